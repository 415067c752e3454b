use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error};
use serde_json::json;

/// Failure reported by a document store backend.
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[display(fmt = "duplicate key: {}", message)]
    DuplicateKey { message: String },
    #[display(fmt = "store backend failure: {}", message)]
    Backend { message: String },
}

impl StoreError {
    pub fn duplicate(message: impl Into<String>) -> Self {
        StoreError::DuplicateKey {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }
}

/// Errors rendered to clients as `{"message": ...}`.
///
/// The messages are fixed strings the frontend displays as-is.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Covers duplicate emails, missing fields and store failures alike.
    #[display(fmt = "Email already exists.")]
    RegistrationFailed,
    #[display(fmt = "Error fetching users")]
    UserListFailed,
    #[display(fmt = "Invalid email or password. Please contact Admin.")]
    InvalidCredentials,
    #[display(fmt = "Save failed")]
    LeaveSaveFailed,
    #[display(fmt = "Invalid request body")]
    InvalidBody,
    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RegistrationFailed | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::UserListFailed | ApiError::LeaveSaveFailed | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}
