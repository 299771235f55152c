use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::store::StoreError;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type for the JSON API.
///
/// Validation and conflict messages are returned to the client as they are,
/// unexpected errors are logged and replaced by a generic message.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid `{field}`: {message}")]
    ValidationError {
        field: &'static str,
        message: String,
    },
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> u16 {
        self.status_code().as_u16()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate => Self::Conflict(e.to_string()),
            StoreError::Unexpected(e) => Self::UnexpectedError(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::ValidationError {
                field,
                ref message,
            } => {
                tracing::warn!(field, detail = message, "rejected request");
                schema::ErrorBody {
                    code: self.code(),
                    message: "Validation failed".to_owned(),
                    details: vec![schema::FieldError {
                        field,
                        message: message.to_owned(),
                    }],
                }
            }
            Self::Conflict(ref s) => {
                tracing::warn!("{:?}", s);
                schema::ErrorBody {
                    code: self.code(),
                    message: s.to_owned(),
                    details: Vec::new(),
                }
            }
            Self::UnexpectedError(ref e) => {
                tracing::error!("{:?}", e);
                schema::ErrorBody {
                    code: self.code(),
                    message: "Unexpected error".to_owned(),
                    details: Vec::new(),
                }
            }
        };

        (self.status_code(), Json(body)).into_response()
    }
}
