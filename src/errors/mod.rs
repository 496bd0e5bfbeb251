//! Error handling module for seatboard.
//!
//! Provides the central error taxonomy with mapping to HTTP status codes and
//! the JSON error envelope shared by every endpoint.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or empty required field
    Validation(String),
    /// Unknown thread or post id
    NotFound(String),
    /// Wrong HTTP verb on a method-gated route
    MethodNotAllowed(&'static [&'static str]),
    /// Blob store or transport failure
    Upstream(String),
    /// Anything else
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the short envelope message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Invalid Request",
            AppError::NotFound(_) => "Not Found",
            AppError::MethodNotAllowed(_) => "Method Not Allowed",
            AppError::Upstream(_) => "Internal Server Error",
            AppError::Internal(_) => "Internal Server Error",
        }
    }

    /// Get the detail string exposed to the caller.
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Upstream(msg)
            | AppError::Internal(msg) => Some(msg.clone()),
            AppError::MethodNotAllowed(_) => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.details() {
            Some(details) => write!(f, "{}: {}", self.message(), details),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Store request failed: {:?}", err);
        AppError::Upstream(format!("Store request failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let allowed_methods = match error {
            AppError::MethodNotAllowed(allowed) => {
                Some(allowed.iter().map(|m| m.to_string()).collect())
            }
            _ => None,
        };

        Self {
            message: error.message().to_string(),
            details: error.details(),
            allowed_methods,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = ErrorResponse::new(&self);
        let mut response = (status, Json(body)).into_response();

        if let AppError::MethodNotAllowed(allowed) = self {
            if let Ok(value) = allowed.join(", ").parse() {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MethodNotAllowed(&["GET"]).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Upstream("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_method_not_allowed() {
        let envelope = ErrorResponse::new(&AppError::MethodNotAllowed(&["GET"]));
        assert_eq!(envelope.message, "Method Not Allowed");
        assert_eq!(envelope.allowed_methods, Some(vec!["GET".to_string()]));
        assert!(envelope.details.is_none());
    }

    #[test]
    fn test_envelope_validation() {
        let envelope = ErrorResponse::new(&AppError::Validation("threadId is required.".into()));
        assert_eq!(envelope.message, "Invalid Request");
        assert_eq!(envelope.details.as_deref(), Some("threadId is required."));
    }
}
