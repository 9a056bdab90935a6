//! API Error Types
//!
//! The only client-facing failure is an ingest payload that carries no usable
//! `products` array. Everything else is either accepted or surfaces as a 500
//! from the panic guard in the router.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No products found in request")]
    NoProducts,
}

/// `{"status": ..., "message": ...}` envelope shared by ingest successes and errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoProducts => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(StatusMessage::error(self.to_string()))).into_response()
    }
}
