pub mod console;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod views;

pub use infrastructure::config;
