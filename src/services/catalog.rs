//! Catalog service

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Store a validated candidate book
    pub async fn create_book(&self, book: &NewBook) -> AppResult<Book> {
        let created = self.repository.books.create(book).await?;
        tracing::info!("Catalog create: stored book id={}", created.id);
        Ok(created)
    }
}
