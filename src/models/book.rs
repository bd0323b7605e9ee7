//! Book model

use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Candidate book, validated but not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

/// Raw body of the new-book form
#[derive(Debug, Default, Validate)]
pub struct NewBookForm {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
}

/// Form fields with their display labels, in declaration order
const FIELDS: [(&str, &str); 2] = [("title", "Title"), ("author", "Author")];

impl NewBookForm {
    /// Build a form from decoded key/value pairs. The first value of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in fields {
            let slot = match key.as_str() {
                "title" => &mut form.title,
                "author" => &mut form.author,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Turn the submitted fields into a candidate book, or the ordered list
    /// of messages describing what is missing.
    pub fn into_candidate(self) -> Result<NewBook, Vec<String>> {
        let messages = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => missing_field_messages(&errors),
        };

        match (self.title, self.author) {
            (Some(title), Some(author)) if messages.is_empty() => Ok(NewBook { title, author }),
            _ => Err(messages),
        }
    }
}

fn missing_field_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    FIELDS
        .iter()
        .filter(|(field, _)| field_errors.contains_key(*field))
        .map(|(_, label)| format!("{} is required, but was empty.", label))
        .collect()
}
