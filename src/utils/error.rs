use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::error::{ErrorKind, WriteFailure};
use std::fmt;

use crate::models::ApiResponse;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Conflict(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Persistence detail stays in the log, callers get a generic body
        let body = match self {
            AppError::Database(detail) => {
                log::error!("💥 {}", detail);
                "Something went wrong".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(body))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

/// Field behind a violated unique index, decoded from a duplicate-key
/// write error (code 11000).
pub fn duplicate_key_field(err: &mongodb::error::Error) -> Option<String> {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = &*err.kind {
        if write_error.code == 11000 {
            return index_field_from_message(&write_error.message);
        }
    }
    None
}

// Server reports the violated index as e.g. "... index: email_1 dup key: ..."
fn index_field_from_message(message: &str) -> Option<String> {
    let rest = &message[message.find("index: ")? + "index: ".len()..];
    let index_name = rest.split_whitespace().next()?;
    Some(index_name.trim_end_matches("_1").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_field_from_message() {
        let message = "E11000 duplicate key error collection: shop-service.users index: email_1 dup key: { email: \"jane@example.com\" }";
        assert_eq!(index_field_from_message(message), Some("email".to_string()));

        let message = "E11000 duplicate key error collection: shop-service.shops index: slug_1 dup key: { slug: \"main-branch\" }";
        assert_eq!(index_field_from_message(message), Some("slug".to_string()));

        assert_eq!(index_field_from_message("connection refused"), None);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("All fields are required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("Email a@b already exists".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("User not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_error_messages_pass_through() {
        assert_eq!(
            AppError::NotFound("Shop not found".into()).to_string(),
            "Shop not found"
        );
        assert_eq!(
            AppError::Validation("All fields are required".into()).to_string(),
            "All fields are required"
        );
    }
}
