//! Repository trait definitions
//!
//! These traits define the contract for talking to the catalog service.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{Book, BookId, BookPayload};

/// Repository trait for the remote Book resource
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Fetch the whole catalog, in the order the service returns it
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Fetch a single book by ID
    async fn find_by_id(&self, id: BookId) -> Result<Book, DomainError>;

    /// Create a new book; the service assigns the ID
    async fn create(&self, book: BookPayload) -> Result<(), DomainError>;

    /// Replace the editable fields of an existing book
    async fn update(&self, id: BookId, book: BookPayload) -> Result<(), DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: BookId) -> Result<(), DomainError>;
}
