//! Books repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Store a candidate book and return it with its assigned id
    pub async fn create(&self, data: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author)
            VALUES (?, ?)
            RETURNING id, title, author
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
