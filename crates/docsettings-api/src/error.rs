//! Error types for docsettings-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docsettings_core::{CoreError, ErrorSeverity};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Section not found: {name}")]
    SectionNotFound { name: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Settings(#[from] CoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SectionNotFound { .. } => StatusCode::NOT_FOUND,
            // Persistence failures are reported as 400 along with validation ones
            ApiError::BadRequest { .. } | ApiError::Settings(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// `{"status": ...}` body shared by success and error responses
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusBody {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error",
            message: Some(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Settings(e) if e.severity() == ErrorSeverity::Error => {
                log::error!("[{}] {}", e.code(), e)
            }
            ApiError::Settings(e) => log::warn!("[{}] {}", e.code(), e),
            other => log::debug!("{}", other),
        }

        let status = self.status_code();
        (status, Json(StatusBody::error(self.to_string()))).into_response()
    }
}
