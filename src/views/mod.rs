//! View models for the back-office screens
//!
//! Each view owns its own copy of the data it shows and talks to the catalog
//! through a [`BookRepository`](crate::domain::BookRepository). Navigation is
//! expressed as a returned [`Route`]; modal dialogs go through [`Dialogs`].

pub mod book_add;
pub mod book_edit;
pub mod book_list;
pub mod form;
pub mod search;

pub use book_add::BookAddView;
pub use book_edit::BookEditView;
pub use book_list::{BookListView, Catalog, DeleteOutcome, ListState};
pub use form::FormState;
pub use search::filter_books;

use crate::models::BookId;

/// Where the user should be taken next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    BookList,
    AddBook,
    EditBook(BookId),
}

/// Blocking, modal user dialogs
pub trait Dialogs {
    /// Ask a yes/no question; `true` means the user confirmed
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn alert(&self, message: &str);
}
