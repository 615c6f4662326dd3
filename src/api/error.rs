//! HTTP error taxonomy.
//!
//! Every error variant maps to a fixed status and a `{"msg": ...}` body.
//! Internal detail never reaches the client; callers log the cause and
//! return the variant.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or malformed input; the message is client-facing.
    #[error("{0}")]
    Validation(&'static str),
    /// Duplicate email on registration.
    #[error("User already exists with this email")]
    Conflict,
    /// Bad login; identical for unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Missing, malformed, expired, or otherwise unacceptable bearer token.
    #[error("Not authorized")]
    Unauthorized,
    /// Unknown route.
    #[error("Route not found")]
    NotFound,
    /// Store unreachable or unexpected failure; detail stays in the logs.
    #[error("Something went wrong")]
    Internal,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "msg": self.to_string() }))).into_response()
    }
}
