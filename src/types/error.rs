use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

pub const GENERIC_FAILURE: &str = "Oops! Something went wrong! Please try again...";

#[derive(Debug, Error)]
pub enum AppError {
    // client-caused, reported with detail
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("user does not exist: {username}")]
    NotFound { username: String },
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    // infra things, collapsed to one generic message for the caller
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("mail error: {0}")]
    Mail(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl AppError {
    /// True for the bucket of faults the caller only ever sees generically.
    fn is_unclassified(&self) -> bool {
        matches!(self, Self::Db(_) | Self::Mail(_) | Self::Internal(_))
    }

    fn body(&self) -> ErrorBody {
        let (message, data) = match self {
            Self::Validation(errors) => (json!(errors), None),
            Self::NotFound { username } => (
                json!("User does not exist!"),
                Some(json!({ "username": username })),
            ),
            Self::DuplicateEmail(email) => (
                json!("Given email is already registered."),
                Some(json!({ "email": email })),
            ),
            Self::DuplicateUsername(username) => (
                json!("Given username is already taken."),
                Some(json!({ "username": username })),
            ),
            Self::Db(_) | Self::Mail(_) | Self::Internal(_) => (json!(GENERIC_FAILURE), None),
        };
        ErrorBody {
            success: false,
            message,
            data,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        // Every failure shares one transport status; the envelope carries
        // the distinction.
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_unclassified() {
            // Root cause stays in the server logs only.
            log::error!("unclassified failure: {self}");
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
