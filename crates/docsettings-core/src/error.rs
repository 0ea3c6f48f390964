//! Error types for docsettings-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Candidate document violates the settings schema
    ValidationError,
    /// Backing file could not be read or written
    PersistenceError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::PersistenceError => write!(f, "PERSISTENCE_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller supplied bad input, the store is intact
    Warning,
    /// Operation failed on the server side
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for docsettings-core
#[derive(Error, Debug)]
pub enum CoreError {
    /// Messages are kept in the order the checks produced them
    #[error("{}", .errors.join("\n"))]
    Validation { errors: Vec<String> },

    #[error("Settings file {}: {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },
}

impl CoreError {
    /// Build a persistence error for the given file
    pub fn persistence(path: &Path, reason: impl std::fmt::Display) -> Self {
        CoreError::Persistence {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Validation { .. } => ErrorCode::ValidationError,
            CoreError::Persistence { .. } => ErrorCode::PersistenceError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Validation { .. } => ErrorSeverity::Warning,
            CoreError::Persistence { .. } => ErrorSeverity::Error,
        }
    }

    /// Validation messages, empty for other error kinds
    pub fn validation_errors(&self) -> &[String] {
        match self {
            CoreError::Validation { errors } => errors,
            _ => &[],
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::PersistenceError.to_string(), "PERSISTENCE_ERROR");
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let error = CoreError::Validation {
            errors: vec![
                "Missing required section: faiss".to_string(),
                "Missing required section: chatbot".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Missing required section: faiss\nMissing required section: chatbot"
        );
        assert_eq!(error.code(), ErrorCode::ValidationError);
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert_eq!(error.validation_errors().len(), 2);
    }

    #[test]
    fn test_persistence_error() {
        let error = CoreError::persistence(Path::new("/config/settings.yaml"), "permission denied");
        assert_eq!(error.code(), ErrorCode::PersistenceError);
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert!(error.to_string().contains("/config/settings.yaml"));
        assert!(error.to_string().contains("permission denied"));
        assert!(error.validation_errors().is_empty());
    }
}
