//! reqwest implementation of BookRepository

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::domain::{BookRepository, DomainError};
use crate::models::{Book, BookId, BookPayload};

/// BookRepository backed by the catalog's JSON-over-HTTP API
pub struct HttpBookRepository {
    client: Client,
    base_url: String,
}

impl HttpBookRepository {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api/v1`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

/// Map a non-success status to a domain error; success passes through.
fn check_status(resp: Response) -> Result<Response, DomainError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else if status == StatusCode::NOT_FOUND {
        Err(DomainError::NotFound)
    } else {
        Err(DomainError::Status(status.as_u16()))
    }
}

#[async_trait]
impl BookRepository for HttpBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        let url = self.collection_url();
        tracing::info!("GET {}", url);

        let resp = check_status(self.client.get(&url).send().await?)?;
        let books: Vec<Book> = resp.json().await?;

        tracing::info!("Fetched {} books", books.len());
        Ok(books)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Book, DomainError> {
        let url = self.book_url(id);
        tracing::info!("GET {}", url);

        let resp = check_status(self.client.get(&url).send().await?)?;
        Ok(resp.json().await?)
    }

    async fn create(&self, book: BookPayload) -> Result<(), DomainError> {
        let url = self.collection_url();
        tracing::info!("POST {} title={:?}", url, book.title);

        check_status(self.client.post(&url).json(&book).send().await?)?;
        Ok(())
    }

    async fn update(&self, id: BookId, book: BookPayload) -> Result<(), DomainError> {
        let url = self.book_url(id);
        tracing::info!("PUT {}", url);

        // Response body is not consumed
        check_status(self.client.put(&url).json(&book).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), DomainError> {
        let url = self.book_url(id);
        tracing::info!("DELETE {}", url);

        check_status(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
