use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::utils::{MAX_BATCH_TEXTS, MAX_TEXT_CHARS};

/// One variant per rejection rule; the response message names the rule
/// that failed.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Missing required field: text")]
    MissingText,

    #[error("Text must be a non-empty string")]
    InvalidText,

    #[error("Text must be a string")]
    TextNotAString,

    #[error("Text too long. Maximum {max} characters allowed.", max = MAX_TEXT_CHARS)]
    TextTooLong,

    #[error("Missing required field: texts")]
    MissingTexts,

    #[error("Texts must be a list")]
    TextsNotAList,

    #[error("Texts must be a non-empty list")]
    EmptyTexts,

    #[error("Too many texts. Maximum {max} texts allowed.", max = MAX_BATCH_TEXTS)]
    TooManyTexts,

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Turns a handler panic into the generic 500 body; the detail stays in the
/// server log.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };

    error!("Request handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
