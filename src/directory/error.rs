//! Error types for directory operations

use crate::error::AppError;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Result type for interactor operations
pub type InteractorResult<T> = std::result::Result<T, InteractorError>;

/// Errors raised by the directory repository
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Request was missing or malformed
    #[error("directory repository: invalid request: {0}")]
    Validation(String),

    /// The search service call failed
    #[error("directory repository: {operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: tonic::Status,
    },
}

impl RepositoryError {
    pub fn transport(operation: &'static str, source: tonic::Status) -> Self {
        RepositoryError::Transport { operation, source }
    }
}

/// Errors raised by the search interactor
#[derive(Debug, thiserror::Error)]
pub enum InteractorError {
    /// Caller parameters were missing or malformed
    #[error("search interactor: invalid params: {0}")]
    Validation(String),

    /// The repository call failed
    #[error("search interactor: {0}")]
    Repository(#[from] RepositoryError),
}

impl InteractorError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            InteractorError::Validation(_)
                | InteractorError::Repository(RepositoryError::Validation(_))
        )
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        let message = err.to_string();
        match err {
            RepositoryError::Validation(msg) => AppError::Validation(msg),
            RepositoryError::Transport { .. } => AppError::Integration {
                integration_source: "search-service".to_string(),
                message,
            },
        }
    }
}

impl From<InteractorError> for AppError {
    fn from(err: InteractorError) -> Self {
        match err {
            InteractorError::Validation(msg) => AppError::Validation(msg),
            InteractorError::Repository(inner) => inner.into(),
        }
    }
}
