//! HTTP handlers for the Aklatan pages

pub mod books;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};

use crate::models::NewBookForm;

/// Extractor for a submitted new-book form.
///
/// Accepts url-encoded and multipart bodies. A body that cannot be decoded
/// yields an empty form, so it is reported through validation like any
/// other missing field. Repeated keys keep their first value.
pub struct BookSubmission(pub NewBookForm);

#[async_trait]
impl<S> FromRequest<S> for BookSubmission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            multipart_fields(req, state).await
        } else {
            match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(rejection) => {
                    tracing::debug!("Unreadable book form: {}", rejection);
                    Vec::new()
                }
            }
        };

        Ok(BookSubmission(NewBookForm::from_fields(fields)))
    }
}

async fn multipart_fields<S>(req: Request, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!("Unreadable multipart book form: {}", rejection);
            return Vec::new();
        }
    };

    let mut fields = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!("Malformed multipart field: {}", e);
                break;
            }
        };
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match field.text().await {
            Ok(value) => fields.push((name, value)),
            Err(e) => {
                tracing::debug!("Unreadable multipart field {}: {}", name, e);
                break;
            }
        }
    }
    fields
}
