//! Repository implementations using reqwest

pub mod book_repository;

pub use book_repository::HttpBookRepository;
