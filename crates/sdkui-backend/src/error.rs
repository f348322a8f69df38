use thiserror::Error;

use crate::types::IdentifierError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("SDKMAN installation not found")]
    NotFound,

    #[error("Command failed: {stderr}")]
    CommandFailed { stderr: String },

    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("Could not read {what}: {details}")]
    ParseError { what: &'static str, details: String },

    #[error("Network error during {operation} ({stage}): {details}")]
    NetworkError {
        operation: &'static str,
        stage: NetworkStage,
        details: String,
    },

    #[error("Version not found: {identifier}")]
    VersionNotFound { identifier: String },

    #[error("IO error ({kind}): {message}")]
    IoError {
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Operation not supported on this platform: {operation}")]
    Unsupported { operation: &'static str },

    #[error("Timeout waiting for command")]
    Timeout,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStage {
    #[error("request")]
    Request,
    #[error("status")]
    Status,
    #[error("response body")]
    Body,
}

impl BackendError {
    pub fn network(
        operation: &'static str,
        stage: NetworkStage,
        details: impl std::fmt::Display,
    ) -> Self {
        Self::NetworkError {
            operation,
            stage,
            details: details.to_string(),
        }
    }

    pub fn parse(what: &'static str, details: impl Into<String>) -> Self {
        Self::ParseError {
            what,
            details: details.into(),
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::IoError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
