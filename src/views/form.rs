//! State shared by the edit and add forms

use super::Dialogs;
use crate::models::{BookDraft, BookField, BookPayload};

pub(crate) const FILL_ALL_FIELDS: &str = "Please fill in every field";
pub(crate) const DISCARD_CHANGES: &str = "Do you want to discard your changes?";

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// Waiting for the record to edit
    Loading,
    /// Draft is editable; `error` holds the last failed save, if any
    Ready {
        draft: BookDraft,
        error: Option<String>,
    },
    /// The save request is in flight
    Submitting { draft: BookDraft },
    /// The record could not be loaded; only going back is possible
    Failed(String),
    /// The form was saved or abandoned and its draft dropped
    Closed,
}

impl FormState {
    pub fn ready(draft: BookDraft) -> Self {
        FormState::Ready { draft, error: None }
    }

    pub fn draft(&self) -> Option<&BookDraft> {
        match self {
            FormState::Ready { draft, .. } | FormState::Submitting { draft } => Some(draft),
            _ => None,
        }
    }

    /// Update one draft field. Only allowed while `Ready`.
    pub(crate) fn set_field(&mut self, field: BookField, value: String) -> bool {
        match self {
            FormState::Ready { draft, .. } => {
                draft.set(field, value);
                true
            }
            _ => {
                tracing::debug!("Ignoring edit of {} outside the ready state", field);
                false
            }
        }
    }

    /// Validate the ready draft and move to `Submitting`.
    ///
    /// Returns the payload to send, or `None` when there is nothing to
    /// submit or validation failed (the user has been alerted and the state
    /// is untouched).
    pub(crate) fn begin_submit(&mut self, dialogs: &dyn Dialogs) -> Option<BookPayload> {
        let FormState::Ready { draft, .. } = self else {
            tracing::debug!("Submit ignored outside the ready state");
            return None;
        };

        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Draft rejected: {}", e);
                dialogs.alert(FILL_ALL_FIELDS);
                return None;
            }
        };

        let draft = draft.clone();
        *self = FormState::Submitting { draft };
        Some(payload)
    }

    /// Return from `Submitting` to `Ready`, keeping the draft and the error.
    pub(crate) fn submit_failed(&mut self, message: &str) {
        if let FormState::Submitting { draft } = self {
            let draft = std::mem::take(draft);
            *self = FormState::Ready {
                draft,
                error: Some(message.to_string()),
            };
        }
    }

    /// Ask before throwing the draft away. `true` if the form was closed.
    pub(crate) fn cancel(&mut self, dialogs: &dyn Dialogs) -> bool {
        if !matches!(self, FormState::Ready { .. }) {
            return false;
        }
        if dialogs.confirm(DISCARD_CHANGES) {
            *self = FormState::Closed;
            true
        } else {
            false
        }
    }
}
