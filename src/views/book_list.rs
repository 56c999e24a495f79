//! Book list screen: the whole catalog, a client-side search and deletes.

use std::sync::Arc;

use super::search::filter_books;
use super::{Dialogs, Route};
use crate::domain::BookRepository;
use crate::models::{Book, BookId};

const LOAD_FAILED: &str = "Could not load the book list";
const DELETE_FAILED: &str = "Error: could not delete the book";
const DELETED: &str = "Book deleted.";

/// The collection last fetched from the service plus the view of it that
/// matches the current search term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
    filtered: Vec<Book>,
    term: String,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            filtered: books.clone(),
            books,
            term: String::new(),
        }
    }

    /// Full collection, in service order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Books matching the active search term
    pub fn filtered(&self) -> &[Book] {
        &self.filtered
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    fn search(&mut self, term: &str) {
        self.term = term.to_string();
        self.filtered = filter_books(&self.books, term);
    }

    fn remove(&mut self, id: BookId) {
        self.books.retain(|b| b.id != id);
        self.filtered.retain(|b| b.id != id);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Ready(Catalog),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Cancelled,
    Deleted,
    Failed(String),
}

pub struct BookListView {
    repo: Arc<dyn BookRepository>,
    state: ListState,
}

impl BookListView {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self {
            repo,
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            ListState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Fetch the full collection. Any previous search term is dropped.
    pub async fn activate(&mut self) {
        self.state = ListState::Loading;

        self.state = match self.repo.find_all().await {
            Ok(books) => {
                tracing::info!("Book list loaded with {} books", books.len());
                ListState::Ready(Catalog::new(books))
            }
            Err(e) => {
                tracing::error!("Failed to load book list: {}", e);
                ListState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    /// Re-issue the list request after a failure
    pub async fn retry(&mut self) {
        self.activate().await;
    }

    /// Recompute the filtered copy. Never touches the network.
    pub fn search(&mut self, term: &str) {
        if let ListState::Ready(catalog) = &mut self.state {
            catalog.search(term);
            tracing::debug!(
                "Search {:?} matched {} of {} books",
                term,
                catalog.filtered.len(),
                catalog.books.len()
            );
        }
    }

    /// Ask for confirmation, then delete `book` on the service.
    ///
    /// Local copies are only touched once the service has confirmed the
    /// delete, so a failure leaves them exactly as they were.
    pub async fn delete(&mut self, book: &Book, dialogs: &dyn Dialogs) -> DeleteOutcome {
        let question = format!("Do you want to delete \"{}\"?", book.title);
        if !dialogs.confirm(&question) {
            tracing::debug!("Delete of book {} cancelled", book.id);
            return DeleteOutcome::Cancelled;
        }

        match self.repo.delete(book.id).await {
            Ok(()) => {
                tracing::info!("Deleted book {}", book.id);
                if let ListState::Ready(catalog) = &mut self.state {
                    catalog.remove(book.id);
                }
                dialogs.alert(DELETED);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!("Failed to delete book {}: {}", book.id, e);
                dialogs.alert(DELETE_FAILED);
                DeleteOutcome::Failed(DELETE_FAILED.to_string())
            }
        }
    }

    pub fn add(&self) -> Route {
        Route::AddBook
    }

    pub fn edit(&self, id: BookId) -> Route {
        Route::EditBook(id)
    }

    /// The logout control has no sign-out behind it.
    pub fn logout(&self) -> Option<Route> {
        tracing::debug!("Logout requested; no session to end");
        None
    }
}
