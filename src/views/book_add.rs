//! Add screen: an empty draft that is created on the service when saved.

use std::sync::Arc;

use super::form::FormState;
use super::{Dialogs, Route};
use crate::domain::BookRepository;
use crate::models::{BookDraft, BookField};

const CREATE_FAILED: &str = "Error: could not add the book";
const CREATED: &str = "Book added.";

pub struct BookAddView {
    repo: Arc<dyn BookRepository>,
    state: FormState,
}

impl BookAddView {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self {
            repo,
            state: FormState::ready(BookDraft::default()),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_field(&mut self, field: BookField, value: impl Into<String>) -> bool {
        self.state.set_field(field, value.into())
    }

    pub async fn submit(&mut self, dialogs: &dyn Dialogs) -> Option<Route> {
        let payload = self.state.begin_submit(dialogs)?;
        let title = payload.title.clone();

        match self.repo.create(payload).await {
            Ok(()) => {
                tracing::info!("Added book {:?}", title);
                dialogs.alert(CREATED);
                self.state = FormState::Closed;
                Some(Route::BookList)
            }
            Err(e) => {
                tracing::error!("Error adding book {:?}: {}", title, e);
                dialogs.alert(CREATE_FAILED);
                self.state.submit_failed(CREATE_FAILED);
                None
            }
        }
    }

    pub fn cancel(&mut self, dialogs: &dyn Dialogs) -> Option<Route> {
        self.state.cancel(dialogs).then_some(Route::BookList)
    }
}
