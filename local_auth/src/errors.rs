//! Crate-level error type

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised while setting up biometric authentication.
///
/// Flows themselves never return this type; they report failures as
/// [`AuthResult::Failure`](crate::AuthResult::Failure).
#[derive(Debug, Error)]
pub enum LocalAuthError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the persisted preference store
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LocalAuthError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Config(msg) => tracing::error!("Configuration error: {}", msg),
            Self::Storage(err) => tracing::error!("Storage error: {}", err),
        }
        self
    }
}
