//! Data models for Aklatan

pub mod book;

pub use book::{Book, NewBook, NewBookForm};
