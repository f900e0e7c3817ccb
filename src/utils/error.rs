use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::{
    database::StoreError,
    models::{Entity, RecordError},
};

pub const MESSAGE_INVALID_BODY: &str = "Invalid request body";
pub const MESSAGE_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MESSAGE_INTERNAL_ERROR: &str = "Internal server error";

/// Outcome of a failed handler invocation.
///
/// Client-facing variants carry a fixed message; the server-side variants
/// keep their detail for the log and always answer with the generic 500 body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body did not parse, a required field was missing/blank, or the `id`
    /// query parameter was blank. Deliberately one variant for all three.
    #[error("Invalid request body")]
    InvalidRequest,

    #[error("{}", .0.not_found_message())]
    NotFound(Entity),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    MalformedRecord(#[from] RecordError),

    #[error("{0} insert was not acknowledged by the store")]
    Unacknowledged(Entity),
}

impl AppError {
    /// Plain-text body sent to the client.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::InvalidRequest => MESSAGE_INVALID_BODY,
            AppError::NotFound(entity) => entity.not_found_message(),
            AppError::MethodNotAllowed => MESSAGE_METHOD_NOT_ALLOWED,
            AppError::Store(_) | AppError::MalformedRecord(_) | AppError::Unacknowledged(_) => {
                MESSAGE_INTERNAL_ERROR
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Store(_) | AppError::MalformedRecord(_) | AppError::Unacknowledged(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(self.client_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors_hide_detail() {
        let err = AppError::Store(StoreError::Unavailable("connection refused".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal server error");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_not_found_uses_entity_message() {
        assert_eq!(AppError::NotFound(Entity::Payments).client_message(), "Payment not found");
        assert_eq!(AppError::NotFound(Entity::Rides).to_string(), "Ride not found");
        assert_eq!(AppError::NotFound(Entity::Rides).status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_client_errors() {
        assert_eq!(AppError::InvalidRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidRequest.client_message(), "Invalid request body");
        assert_eq!(AppError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
