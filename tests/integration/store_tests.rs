//! Record store tests

use aklatan::{db, models::NewBook, repository::Repository, AppError};

use crate::support::{create_books, drop_books_table, fresh_db};

// A fresh database returns no rows, and no error, when fetching books.
#[tokio::test]
async fn test_book_empty() {
    let books = Repository::new(fresh_db().await).books.list().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_create_assigns_ids_in_order() {
    let pool = fresh_db().await;
    let created = create_books(&pool, 3).await;

    assert!(created.windows(2).all(|pair| pair[0].id < pair[1].id));

    let listed = Repository::new(pool).books.list().await.unwrap();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_setup_database_is_idempotent() {
    let pool = fresh_db().await;
    create_books(&pool, 1).await;

    db::setup_database(&pool).await.unwrap();

    let books = Repository::new(pool).books.list().await.unwrap();
    assert_eq!(books.len(), 1);
}

#[tokio::test]
async fn test_missing_table_surfaces_database_error() {
    let pool = fresh_db().await;
    drop_books_table(&pool).await;
    let repository = Repository::new(pool);

    assert!(matches!(
        repository.books.list().await,
        Err(AppError::Database(_))
    ));

    let candidate = NewBook {
        title: "a".to_string(),
        author: "b".to_string(),
    };
    assert!(matches!(
        repository.books.create(&candidate).await,
        Err(AppError::Database(_))
    ));
}
