//! Error types module
//!
//! `FormError` covers everything the form can reject locally, before any request
//! leaves the process. Transport failures stay `anyhow::Error` and are handled at
//! the completion step of each operation.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<validator::ValidationErrors> for FormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        FormError::Validation(messages.join("; "))
    }
}
