//! Domain error types
//!
//! These errors describe why a call to the catalog service failed. The views
//! collapse all of them into one message per operation; the variants exist
//! for logging.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// The service answered 404 for the requested book
    NotFound,
    /// A draft failed client-side validation
    Validation(String),
    /// The request never got a response (connection refused, reset, ...)
    Transport(String),
    /// The service answered with a non-success status
    Status(u16),
    /// The response body was not the JSON we expected
    Decode(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Book not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Transport(msg) => write!(f, "Request failed: {}", msg),
            DomainError::Status(code) => write!(f, "Service returned status {}", code),
            DomainError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from reqwest errors (used in infrastructure layer)
impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            DomainError::Status(status.as_u16())
        } else {
            DomainError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(DomainError::NotFound.to_string(), "Book not found");
        assert_eq!(
            DomainError::Status(503).to_string(),
            "Service returned status 503"
        );
        assert_eq!(
            DomainError::Validation("title is required".into()).to_string(),
            "Validation error: title is required"
        );
    }
}
