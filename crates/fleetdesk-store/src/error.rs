//! # Store Error Types
//!
//! Error types for flat-file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error / toml errors                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path, line and entity context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Printed to the operator                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Operator returns to the menu; nothing here ends the process          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fleetdesk_core::{CoreError, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Flat-file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A data file exists but cannot be read or written.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - Data directory removed while running
    /// - File is not valid UTF-8
    ///
    /// A file that simply does not exist is NOT an error: it loads as an
    /// empty collection.
    #[error("Storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not parse into the expected record shape.
    ///
    /// Loads skip such lines and log this error as a warning.
    #[error("Malformed record in {} line {line}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Entity not found (customer id, plate to delete).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique value already present (plate, customer id).
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Domain rule violation (e.g. car not available).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Field failed validation before reaching the file.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Record could not be encoded for writing.
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// Configuration could not be loaded, saved or validated.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn storage(path: &Path, source: std::io::Error) -> Self {
        StoreError::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl ToString) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// True when a rental failed because the plate is not rentable.
    pub fn is_not_available(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::NotAvailable { .. }))
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
