use thiserror::Error;
use tonic::{Code, Status};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Integration errors
    #[error("Integration error ({integration_source}): {message}")]
    Integration {
        integration_source: String,
        message: String,
    },
}

impl AppError {
    /// Get gRPC status code for this error
    pub fn grpc_code(&self) -> Code {
        match self {
            AppError::Validation(_) => Code::InvalidArgument,
            AppError::Configuration(_) => Code::FailedPrecondition,
            AppError::Integration { .. } => Code::Unavailable,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Integration { .. } => "INTEGRATION_ERROR",
        }
    }
}

/// Convert AppError to a gRPC status for presenters
impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = err.grpc_code();
        let message = err.to_string();

        match &err {
            // Integration failures are logged where the call failed
            AppError::Validation(_) | AppError::Integration { .. } => {
                tracing::debug!(error_code = err.error_code(), message = %message, "Request rejected")
            }
            _ => tracing::error!(error_code = err.error_code(), message = %message, "Request error"),
        }

        Status::new(code, message)
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Conversion from validator::ValidationErrors
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
