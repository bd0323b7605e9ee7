//! HTML views rendered with askama templates

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{error::AppResult, models::Book};

/// Book list page
#[derive(Template)]
#[template(path = "books/index.html")]
pub struct BookIndexTemplate {
    pub books: Vec<Book>,
}

/// New-book form, with the messages of a rejected submission if any
#[derive(Template, Default)]
#[template(path = "books/new.html")]
pub struct BookNewTemplate {
    pub errors: Vec<String>,
}

/// Render `template` into an HTML response with the given status.
pub fn render<T: Template>(status: StatusCode, template: &T) -> AppResult<Response> {
    let body = template.render()?;
    Ok((status, Html(body)).into_response())
}
