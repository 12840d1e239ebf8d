// SPDX-License-Identifier: MPL-2.0

//! Error types for the capture application

use crate::backends::camera::types::BackendError;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera hardware errors
    Camera(BackendError),
    /// Classification request errors
    Classify(ClassifyError),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Classification query errors
#[derive(Debug, Clone)]
pub enum ClassifyError {
    /// The request could not be sent or the connection failed
    Request(String),
    /// The service answered with a non-success status
    Status(u16),
    /// The response body was not a valid GraphQL envelope
    Envelope(String),
    /// The envelope carried GraphQL errors instead of data
    Server(String),
    /// The envelope had neither data nor errors
    MissingData,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::Classify(e) => write!(f, "Classification error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::Request(msg) => write!(f, "Request failed: {}", msg),
            ClassifyError::Status(code) => write!(f, "Service returned status {}", code),
            ClassifyError::Envelope(msg) => write!(f, "Invalid response envelope: {}", msg),
            ClassifyError::Server(msg) => write!(f, "Service error: {}", msg),
            ClassifyError::MissingData => write!(f, "Response contained no data"),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ClassifyError {}

// Conversions from sub-errors to AppError
impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::Camera(err)
    }
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        AppError::Classify(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ClassifyError::Status(status.as_u16())
        } else {
            ClassifyError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        ClassifyError::Envelope(err.to_string())
    }
}
