use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use bookstore::db::DbError;
use super::Envelope;

/// Errors returned by API handlers.
///
/// Every variant is rendered as an error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Database or driver failure.  The message is safe to show clients; the
    /// underlying error is only logged.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Map a database error, reporting internal failures to the client as
    /// `context`.
    pub fn from_db(err: DbError, context: &str) -> ApiError {
        match err {
            DbError::NotFound(id) => {
                log::debug!("book not found: {id}");
                ApiError::NotFound("Book not found".to_owned())
            }
            DbError::Invalid(msg) => ApiError::Validation(msg),
            DbError::Internal(msg) => {
                log::error!("{context}: {msg}");
                ApiError::Storage(context.to_owned())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(Envelope::<()>::error(self.to_string()))
    }
}
