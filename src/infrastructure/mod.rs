//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - HTTP repository implementations (repositories)

pub mod config;
pub mod repositories;

pub use config::Config;
pub use repositories::*;
