//! Client error types

use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use std::collections::HashMap;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error body returned by the API
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Non-2xx response without a decodable error body
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(e) if e.is_timeout() => AppError::timeout(message),
            ClientError::Http(e) if e.is_decode() => {
                AppError::with_message(ErrorCode::InvalidFormat, message)
            }
            ClientError::Http(_) => AppError::network(message),
            ClientError::Api {
                code,
                message,
                details,
            } => AppError {
                code: ErrorCode::try_from(code).unwrap_or(ErrorCode::Unknown),
                message,
                details,
            },
            ClientError::Status { status, body } => {
                AppError::with_message(ErrorCode::from_http_status(status), message)
                    .with_detail("status", status.as_u16())
                    .with_detail("body", body)
            }
            ClientError::InvalidResponse(_) => {
                AppError::with_message(ErrorCode::InvalidFormat, message)
            }
            ClientError::Config(_) => AppError::config(message),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
