//! Book catalog pages

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};

use super::BookSubmission;
use crate::{
    error::AppResult,
    views::{self, BookIndexTemplate, BookNewTemplate},
    AppState,
};

/// List all books
pub async fn index(State(state): State<AppState>) -> AppResult<Response> {
    let books = state.services.catalog.list_books().await?;
    views::render(StatusCode::OK, &BookIndexTemplate { books })
}

/// Show the empty new-book form
pub async fn new_form() -> AppResult<Response> {
    views::render(StatusCode::OK, &BookNewTemplate::default())
}

/// Handle a new-book submission
pub async fn create(
    State(state): State<AppState>,
    BookSubmission(form): BookSubmission,
) -> AppResult<Response> {
    let book = match form.into_candidate() {
        Ok(book) => book,
        Err(errors) => {
            tracing::debug!("Rejected book submission: {:?}", errors);
            return views::render(StatusCode::BAD_REQUEST, &BookNewTemplate { errors });
        }
    };

    state.services.catalog.create_book(&book).await?;
    Ok((StatusCode::FOUND, [(LOCATION, "/books/")]).into_response())
}

/// Send the site root to the book list
pub async fn root() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, "/books/")])
}
