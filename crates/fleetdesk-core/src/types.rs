//! # Domain Types
//!
//! Core domain types used throughout Fleetdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │    Customer     │   │   Credential    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  plate (ident)  │   │  id (1001..)    │   │  id (1..)       │       │
//! │  │  brand, model   │   │  name, phone    │   │  secret         │       │
//! │  │  rates          │   │  national_id    │   └─────────────────┘       │
//! │  │  transmission   │   │  address        │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  RentalRecord   │   │  RentalReceipt  │   │  RentalStatus   │       │
//! │  │  (audit entry)  │   │  (to operator)  │   │  Quoting        │       │
//! │  │  write-only     │   │  car, cost      │   │  Committed      │       │
//! │  └─────────────────┘   └─────────────────┘   │  Aborted        │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - A car is identified by its plate (case-sensitive). Changing a plate
//!   means deleting the car and adding it again.
//! - Customers and credentials are identified by sequential integer ids.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing::{RateBreakdown, RateSchedule};

// =============================================================================
// Transmission
// =============================================================================

/// Gearbox type, the last field of every fleet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    /// Written as `A`.
    Automatic,
    /// Written as `M`.
    Manual,
}

impl Transmission {
    /// Single-letter code used in the fleet files.
    pub const fn code(&self) -> &'static str {
        match self {
            Transmission::Automatic => "A",
            Transmission::Manual => "M",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Transmission {
    type Err = ValidationError;

    /// Accepts the codes and the spelled-out names, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "auto" | "automatic" => Ok(Transmission::Automatic),
            "m" | "manual" => Ok(Transmission::Manual),
            other => Err(ValidationError::InvalidFormat {
                field: "transmission".to_string(),
                reason: format!("expected A or M, got '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Car
// =============================================================================

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Registration plate - business identifier, case-sensitive.
    pub plate: String,

    /// Manufacturer, e.g. "Toyota".
    pub brand: String,

    /// Model name, e.g. "Vios".
    pub model: String,

    /// Number of seats.
    pub seat_capacity: u32,

    /// Body colour.
    pub colour: String,

    /// Hourly, half-day and day rates.
    pub rates: RateSchedule,

    /// Gearbox type.
    pub transmission: Transmission,
}

impl Car {
    /// "Brand Model", as printed on receipts and in the audit log.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub phone: String,
    /// National identity card number.
    pub national_id: String,
    pub address: String,
}

/// Registration details for a customer who has no id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub national_id: String,
    pub address: String,
}

impl NewCustomer {
    /// Attaches an id, producing the stored record.
    pub fn with_id(self, id: u32) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
            national_id: self.national_id,
            address: self.address,
        }
    }
}

// =============================================================================
// Credential
// =============================================================================

/// An administrator id / shared-secret pair.
///
/// Secrets are stored in plaintext; this is a convenience gate for a
/// single-operator desk, not a security boundary.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: u32,
    pub secret: String,
}

impl Credential {
    /// Checks a candidate secret against this credential.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.secret == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Rental Status
// =============================================================================

/// Where a rental transaction is in its two-step lifecycle.
///
/// ```text
/// Quoting ──remove ok──► Committed
///    │
///    └──not available──► Aborted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    /// Plate requested, availability not yet touched.
    Quoting,
    /// Car removed from availability and priced.
    Committed,
    /// Plate was not available; nothing changed.
    Aborted,
}

impl Default for RentalStatus {
    fn default() -> Self {
        RentalStatus::Quoting
    }
}

// =============================================================================
// Rental Record (audit log)
// =============================================================================

/// One completed rental, as appended to the audit log.
///
/// Uses the snapshot pattern: customer and car details are frozen at the
/// time of rental. The system never reads these back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub timestamp: DateTime<Local>,
    pub customer_id: u32,
    pub customer_name: String,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub hours: u32,
    pub total_cost: Money,
}

impl RentalRecord {
    /// Snapshots a rental into an audit entry.
    pub fn new(
        customer: &Customer,
        car: &Car,
        hours: u32,
        total_cost: Money,
        timestamp: DateTime<Local>,
    ) -> Self {
        RentalRecord {
            timestamp,
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            plate: car.plate.clone(),
            brand: car.brand.clone(),
            model: car.model.clone(),
            hours,
            total_cost,
        }
    }
}

// =============================================================================
// Rental Receipt
// =============================================================================

/// What the operator gets back from a committed rental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalReceipt {
    pub customer_id: u32,
    /// The car, as it was removed from availability.
    pub car: Car,
    pub hours: u32,
    pub breakdown: RateBreakdown,
    /// Amount billed, in whole currency units.
    pub cost: Money,
    pub rented_at: DateTime<Local>,
    pub status: RentalStatus,
    /// False when the audit log could not be written. The rental still
    /// stands.
    pub audit_logged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_car() -> Car {
        Car {
            plate: "WXY1234".to_string(),
            brand: "Perodua".to_string(),
            model: "Myvi".to_string(),
            seat_capacity: 5,
            colour: "Red".to_string(),
            rates: RateSchedule::new(
                Money::from_units(8),
                Money::from_units(60),
                Money::from_units(100),
            ),
            transmission: Transmission::Automatic,
        }
    }

    #[test]
    fn test_transmission_parsing() {
        assert_eq!("A".parse::<Transmission>().unwrap(), Transmission::Automatic);
        assert_eq!("m".parse::<Transmission>().unwrap(), Transmission::Manual);
        assert_eq!(
            "Automatic".parse::<Transmission>().unwrap(),
            Transmission::Automatic
        );
        assert!("CVT".parse::<Transmission>().is_err());
        assert_eq!(Transmission::Manual.to_string(), "M");
    }

    #[test]
    fn test_car_display_name_and_cost() {
        let car = sample_car();
        assert_eq!(car.display_name(), "Perodua Myvi");
        assert_eq!(car.rates.cost(26), Money::from_units(116));
    }

    #[test]
    fn test_credential_debug_hides_secret() {
        let credential = Credential {
            id: 1,
            secret: "hunter2".to_string(),
        };
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("hunter2"));
        assert!(credential.matches("hunter2"));
        assert!(!credential.matches("hunter"));
    }

    #[test]
    fn test_rental_status_default() {
        assert_eq!(RentalStatus::default(), RentalStatus::Quoting);
    }

    #[test]
    fn test_new_customer_with_id() {
        let customer = NewCustomer {
            name: "Alice Tan".to_string(),
            ..Default::default()
        }
        .with_id(1001);
        assert_eq!(customer.id, 1001);
        assert_eq!(customer.name, "Alice Tan");
    }

    #[test]
    fn test_car_json_shape() {
        let json = serde_json::to_value(sample_car()).unwrap();
        assert_eq!(json["plate"], "WXY1234");
        assert_eq!(json["transmission"], "automatic");
        assert_eq!(json["rates"]["per_day"], 10000);
    }
}
