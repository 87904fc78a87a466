//! # CLI Error Type
//!
//! One error type for everything the console does.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fleetdesk                              │
//! │                                                                         │
//! │  Menu action (add car, rent, ...)                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError / CoreError / ValidationError ──► CliError                 │
//! │         │                                                               │
//! │         ├── recoverable? ──► "✗ message", back to the same menu        │
//! │         │                                                               │
//! │         └── console gone (EOF, closed terminal) ──► main prints it     │
//! │                                                     and exits 1         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fleetdesk_core::{CoreError, ValidationError};
use fleetdesk_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the console.
#[derive(Debug, Error)]
pub enum CliError {
    /// A data file operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A rental rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Operator input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON output could not be produced.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A prompt could not be completed.
    #[error("{0}")]
    Interactive(String),
}

impl CliError {
    /// Creates an interactive prompt error.
    pub fn interactive(message: impl Into<String>) -> Self {
        CliError::Interactive(message.into())
    }

    /// True when the operator can be told and the menu can carry on.
    ///
    /// Terminal failures are not recoverable: there is nobody left to tell.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CliError::Store(StoreError::Config(_)) => false,
            CliError::Store(_) | CliError::Core(_) | CliError::Validation(_) => true,
            CliError::Json(_) => true,
            CliError::Interactive(_) => false,
        }
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Store(StoreError::from(err))
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
