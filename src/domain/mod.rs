//! Domain layer - Pure client abstractions
//!
//! This layer contains NO HTTP or UI code.
//! Only trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
