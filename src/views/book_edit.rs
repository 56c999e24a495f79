//! Edit screen for a single book
//!
//! `Loading -> Ready -> Submitting -> Closed`, falling back to `Ready` with an
//! error when the save fails. A failed initial fetch ends in `Failed`, from
//! which the only way out is [`BookEditView::back`].

use std::sync::Arc;

use super::form::FormState;
use super::{Dialogs, Route};
use crate::domain::BookRepository;
use crate::models::{BookDraft, BookField, BookId};

const LOAD_FAILED: &str = "Could not load the book";
const UPDATE_FAILED: &str = "Error: could not update the book";
const UPDATED: &str = "Book updated.";

pub struct BookEditView {
    repo: Arc<dyn BookRepository>,
    id: BookId,
    state: FormState,
}

impl BookEditView {
    pub fn new(repo: Arc<dyn BookRepository>, id: BookId) -> Self {
        Self {
            repo,
            id,
            state: FormState::Loading,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Fetch the book and seed the draft from it
    pub async fn activate(&mut self) {
        self.state = FormState::Loading;

        self.state = match self.repo.find_by_id(self.id).await {
            Ok(book) => {
                tracing::info!("Loaded book {} for editing", self.id);
                FormState::ready(BookDraft::from(&book))
            }
            Err(e) => {
                tracing::error!("Error fetching book {}: {}", self.id, e);
                FormState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    pub fn set_field(&mut self, field: BookField, value: impl Into<String>) -> bool {
        self.state.set_field(field, value.into())
    }

    /// Validate and send the draft. Returns the route to follow on success.
    pub async fn submit(&mut self, dialogs: &dyn Dialogs) -> Option<Route> {
        let payload = self.state.begin_submit(dialogs)?;

        match self.repo.update(self.id, payload).await {
            Ok(()) => {
                tracing::info!("Updated book {}", self.id);
                dialogs.alert(UPDATED);
                self.state = FormState::Closed;
                Some(Route::BookList)
            }
            Err(e) => {
                tracing::error!("Error updating book {}: {}", self.id, e);
                dialogs.alert(UPDATE_FAILED);
                self.state.submit_failed(UPDATE_FAILED);
                None
            }
        }
    }

    /// Discard the draft after confirmation
    pub fn cancel(&mut self, dialogs: &dyn Dialogs) -> Option<Route> {
        self.state.cancel(dialogs).then_some(Route::BookList)
    }

    /// Leave the error screen. Only available after a failed load.
    pub fn back(&mut self) -> Option<Route> {
        if !matches!(self.state, FormState::Failed(_)) {
            return None;
        }
        self.state = FormState::Closed;
        Some(Route::BookList)
    }
}
