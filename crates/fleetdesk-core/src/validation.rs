//! # Validation Module
//!
//! Input validation for everything that ends up in a flat file.
//!
//! ## Why Validation Matters Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Formats Are The Schema                          │
//! │                                                                         │
//! │  car rental.txt   ABC1 Toyota Vios 5 Silver 5 50 90 A                   │
//! │                   └─ whitespace separated: a space in "Land Cruiser"   │
//! │                      would shift every later field                      │
//! │                                                                         │
//! │  Customer.txt     1001;Alice Tan;0123;900101-14-5678;Jalan 1            │
//! │                   └─ ';' separated: a ';' in an address would split it │
//! │                                                                         │
//! │  UserPass.txt     1 s3cret                                              │
//! │                   └─ whitespace separated                              │
//! │                                                                         │
//! │  No database constraints exist behind these files, so this module is   │
//! │  the only thing standing between operator typos and a corrupt line.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Car, NewCustomer};
use crate::MAX_RENTAL_HOURS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PLATE_LEN: usize = 20;
const MAX_TOKEN_LEN: usize = 40;
const MAX_CUSTOMER_FIELD_LEN: usize = 200;
const MAX_SEAT_CAPACITY: u32 = 60;

// =============================================================================
// Car Validators
// =============================================================================

/// Validates a licence plate.
///
/// ## Rules
/// - Must not be empty
/// - At most 20 characters
/// - No whitespace (plates are whitespace-delimited on disk)
///
/// ## Example
/// ```rust
/// use fleetdesk_core::validation::validate_plate;
///
/// assert!(validate_plate("WXY1234").is_ok());
/// assert!(validate_plate("WXY 1234").is_err());
/// assert!(validate_plate("").is_err());
/// ```
pub fn validate_plate(plate: &str) -> ValidationResult<()> {
    validate_token("plate", plate, MAX_PLATE_LEN)
}

/// Validates a single-word car attribute (brand, model, colour).
pub fn validate_token(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a single word (use '-' or '_' instead of spaces)".to_string(),
        });
    }

    Ok(())
}

/// Validates seat capacity: positive and plausible for a rental car.
pub fn validate_seat_capacity(seats: u32) -> ValidationResult<()> {
    if seats == 0 {
        return Err(ValidationError::MustBePositive {
            field: "seat capacity".to_string(),
        });
    }

    if seats > MAX_SEAT_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: "seat capacity".to_string(),
            min: 1,
            max: MAX_SEAT_CAPACITY as i64,
        });
    }

    Ok(())
}

/// Validates a rate. Zero is allowed (a tier can be free), negatives are not.
pub fn validate_rate(field: &str, rate: Money) -> ValidationResult<()> {
    if rate.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a car before it is written to the fleet.
pub fn validate_car(car: &Car) -> ValidationResult<()> {
    validate_plate(&car.plate)?;
    validate_token("brand", &car.brand, MAX_TOKEN_LEN)?;
    validate_token("model", &car.model, MAX_TOKEN_LEN)?;
    validate_token("colour", &car.colour, MAX_TOKEN_LEN)?;
    validate_seat_capacity(car.seat_capacity)?;
    validate_rate("rate per hour", car.rates.per_hour)?;
    validate_rate("rate per half day", car.rates.per_half_day)?;
    validate_rate("rate per day", car.rates.per_day)?;
    Ok(())
}

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates one `;`-delimited customer field.
///
/// ## Rules
/// - No `;` and no line breaks
/// - At most 200 characters
/// - Empty only when `required` is false
pub fn validate_customer_field(field: &str, value: &str, required: bool) -> ValidationResult<()> {
    if required && value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_CUSTOMER_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_CUSTOMER_FIELD_LEN,
        });
    }

    if value.contains([';', '\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain ';' or line breaks".to_string(),
        });
    }

    Ok(())
}

/// Validates a registration form. Only the name is mandatory.
pub fn validate_new_customer(customer: &NewCustomer) -> ValidationResult<()> {
    validate_customer_field("name", &customer.name, true)?;
    validate_customer_field("phone", &customer.phone, false)?;
    validate_customer_field("national id", &customer.national_id, false)?;
    validate_customer_field("address", &customer.address, false)?;
    Ok(())
}

// =============================================================================
// Credential Validators
// =============================================================================

/// Validates an administrator secret: non-empty, no whitespace.
pub fn validate_secret(secret: &str) -> ValidationResult<()> {
    if secret.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if secret.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "password".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Rental Validators
// =============================================================================

/// Validates a requested rental length against the posted minimum.
///
/// ## User Workflow
/// ```text
/// Operator enters hours: 2
///      │
///      ▼
/// validate_rental_hours(2, 3) ← THIS FUNCTION
///      │
///      ├── hours < min?        → "hours must be between 3 and 8760"
///      ├── hours > one year?   → same message
///      └── OK → RentalTransaction::rent
/// ```
pub fn validate_rental_hours(hours: u32, min_hours: u32) -> ValidationResult<()> {
    if hours == 0 {
        return Err(ValidationError::MustBePositive {
            field: "hours".to_string(),
        });
    }

    if hours < min_hours || hours > MAX_RENTAL_HOURS {
        return Err(ValidationError::OutOfRange {
            field: "hours".to_string(),
            min: min_hours as i64,
            max: MAX_RENTAL_HOURS as i64,
        });
    }

    Ok(())
}
