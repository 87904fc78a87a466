//! # Error Types
//!
//! Domain-specific error types for fleetdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fleetdesk-core errors (this file)                                     │
//! │  ├── CoreError        - Rental rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  fleetdesk-store errors (separate crate)                               │
//! │  └── StoreError       - Flat-file failures, wraps CoreError            │
//! │                                                                         │
//! │  fleetdesk-cli errors (in app)                                         │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → Console    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Rental rule violations.
///
/// Every variant is recoverable: the operator is told the outcome and the
/// console returns to the surrounding menu.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The plate is not in the currently rentable subset.
    ///
    /// ## When This Occurs
    /// - Plate was never added to the fleet
    /// - Car is rented out and availability has not been reset
    /// - Plate typed with the wrong case (plates are case-sensitive)
    #[error("Car {plate} not found or not available")]
    NotAvailable { plate: String },

    /// No customer carries this id.
    #[error("Customer not found: {0}")]
    CustomerNotFound(u32),

    /// Requested rental length is outside the posted terms.
    #[error("Rental of {hours} hours is not allowed: {reason}")]
    InvalidRental { hours: u32, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotAvailable error for a plate.
    pub fn not_available(plate: impl Into<String>) -> Self {
        CoreError::NotAvailable {
            plate: plate.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a record reaches the flat files, since a stray space or
/// semicolon would corrupt the line format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value may be zero but not below it.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., whitespace in a plate, bad decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}
