//! Application error type and its HTTP representation.
//!
//! Every failure in the login flow is an [`AppError`] carrying a kind and a
//! client-facing message. Handlers propagate it with `?`; the conversion to an
//! HTTP response happens once, in [`IntoResponse`].
//!
//! # Response format
//!
//! ```json
//! { "error": "Invalid employee code." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when either credential field is missing or empty.
pub const MISSING_CREDENTIALS: &str = "Employee code and password are required.";

/// Message returned when an employee code cannot be resolved to an email.
pub const INVALID_EMPLOYEE_CODE: &str = "Invalid employee code.";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure kinds of the login flow.
///
/// The `Display` output of each variant is exactly the message sent to the
/// client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is missing a required field.
    #[error("{0}")]
    Validation(String),

    /// Employee code is unknown, ambiguous, or the directory could not be queried.
    #[error("{0}")]
    Lookup(String),

    /// The identity provider rejected the sign-in; the message is the provider's own.
    #[error("{0}")]
    Authentication(String),

    /// Anything else: malformed JSON, transport failures, bad upstream payloads.
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn missing_credentials() -> Self {
        Self::Validation(MISSING_CREDENTIALS.to_string())
    }

    pub fn invalid_employee_code() -> Self {
        Self::Lookup(INVALID_EMPLOYEE_CODE.to_string())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// HTTP status for this error.
    ///
    /// Clients of the login endpoint only distinguish success from failure,
    /// so every kind maps to `400 Bad Request`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::Lookup(_)
            | AppError::Authentication(_)
            | AppError::Unexpected(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short machine-readable label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Lookup(_) => "lookup",
            AppError::Authentication(_) => "authentication",
            AppError::Unexpected(_) => "unexpected",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Unexpected(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Unexpected(e.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::Unexpected(e.to_string())
    }
}
