use sdkui_backend::BackendError;
use sdkui_core::DispatchError;

#[derive(Debug, Clone, PartialEq)]
pub enum AppErrorDetail {
    Message(String),
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },
    Backend(BackendError),
    Dispatch(DispatchError),
}

impl std::fmt::Display for AppErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Io { kind, message } => write!(f, "{kind}: {message}"),
            Self::Backend(error) => write!(f, "{error}"),
            Self::Dispatch(error) => write!(f, "{error}"),
        }
    }
}

impl From<String> for AppErrorDetail {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for AppErrorDetail {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<std::io::Error> for AppErrorDetail {
    fn from(value: std::io::Error) -> Self {
        Self::Io {
            kind: value.kind(),
            message: value.to_string(),
        }
    }
}

impl From<BackendError> for AppErrorDetail {
    fn from(value: BackendError) -> Self {
        Self::Backend(value)
    }
}

impl From<DispatchError> for AppErrorDetail {
    fn from(value: DispatchError) -> Self {
        Self::Dispatch(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Timeout {
        operation: &'static str,
        seconds: u64,
    },
    DetectionFailed {
        details: AppErrorDetail,
    },
    SnapshotLoadFailed {
        details: AppErrorDetail,
    },
    OperationFailed {
        operation: &'static str,
        details: AppErrorDetail,
    },
    ActionRejected {
        details: AppErrorDetail,
    },
}

impl AppError {
    pub fn timeout(operation: &'static str, seconds: u64) -> Self {
        Self::Timeout { operation, seconds }
    }

    pub fn detection_failed(details: impl Into<AppErrorDetail>) -> Self {
        Self::DetectionFailed {
            details: details.into(),
        }
    }

    pub fn snapshot_load_failed(details: impl Into<AppErrorDetail>) -> Self {
        Self::SnapshotLoadFailed {
            details: details.into(),
        }
    }

    pub fn operation_failed(operation: &'static str, details: impl Into<AppErrorDetail>) -> Self {
        Self::OperationFailed {
            operation,
            details: details.into(),
        }
    }

    pub fn action_rejected(details: impl Into<AppErrorDetail>) -> Self {
        Self::ActionRejected {
            details: details.into(),
        }
    }
}

impl From<DispatchError> for AppError {
    fn from(value: DispatchError) -> Self {
        match value {
            DispatchError::Refresh(source) => Self::snapshot_load_failed(source),
            other => Self::action_rejected(other),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { operation, seconds } => {
                write!(f, "{operation} timed out after {seconds}s")
            }
            Self::DetectionFailed { details } => {
                write!(f, "SDKMAN detection failed: {details}")
            }
            Self::SnapshotLoadFailed { details } => {
                write!(f, "Failed to load versions: {details}")
            }
            Self::OperationFailed { operation, details } => {
                write!(f, "{operation} failed: {details}")
            }
            Self::ActionRejected { details } => write!(f, "{details}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use sdkui_backend::{BackendError, Identifier};
    use sdkui_core::{Action, DispatchError};

    use super::{AppError, AppErrorDetail};

    fn id(value: &str) -> Identifier {
        value.parse().expect("valid identifier in test")
    }

    #[test]
    fn timeout_constructor_and_display_match() {
        let error = AppError::timeout("Loading versions", 30);
        assert_eq!(
            error,
            AppError::Timeout {
                operation: "Loading versions",
                seconds: 30
            }
        );
        assert_eq!(error.to_string(), "Loading versions timed out after 30s");
    }

    #[test]
    fn snapshot_load_failure_wraps_backend_error() {
        let error = AppError::snapshot_load_failed(BackendError::CommandFailed {
            stderr: "permission denied".to_string(),
        });

        assert_eq!(
            error.to_string(),
            "Failed to load versions: Command failed: permission denied"
        );
    }

    #[test]
    fn dispatch_refresh_error_becomes_load_failure() {
        let error = AppError::from(DispatchError::Refresh(BackendError::Timeout));

        assert!(matches!(error, AppError::SnapshotLoadFailed { .. }));
    }

    #[test]
    fn dispatch_api_error_is_shown_verbatim() {
        let error = AppError::from(DispatchError::Api {
            action: Action::Install,
            identifier: id("21.0.2-tem"),
            source: BackendError::NotFound,
        });

        assert_eq!(
            error.to_string(),
            "Failed to install 21.0.2-tem: SDKMAN installation not found"
        );
    }

    #[test]
    fn operation_failed_includes_operation_name() {
        let error = AppError::operation_failed("Saving settings", "permission denied");

        assert_eq!(
            error,
            AppError::OperationFailed {
                operation: "Saving settings",
                details: AppErrorDetail::from("permission denied")
            }
        );
        assert_eq!(
            error.to_string(),
            "Saving settings failed: permission denied"
        );
    }

    #[test]
    fn io_detail_keeps_error_kind_and_message() {
        let detail = AppErrorDetail::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(matches!(
            detail,
            AppErrorDetail::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                ..
            }
        ));
        assert_eq!(detail.to_string(), "permission denied: denied");
    }
}
