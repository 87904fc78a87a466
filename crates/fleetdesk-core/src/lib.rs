//! # fleetdesk-core: Pure Rental Logic for Fleetdesk
//!
//! This crate is the **heart** of Fleetdesk. It owns the domain types and the
//! tiered rate calculation, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fleetdesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 fleetdesk-cli (console collaborator)            │   │
//! │  │    Admin menu ──► User menu ──► Rent flow ──► Receipt           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ fleetdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │    Car    │  │   Money   │  │ RateSched │  │   rules   │  │   │
//! │  │   │ Customer  │  │           │  │ Breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO PROMPTS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               fleetdesk-store (flat-file layer)                 │   │
//! │  │       fleet, availability, customers, credentials, audit log    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, Customer, Credential, RentalRecord, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Day / half-day / hour rate decomposition
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules that keep the flat files parseable
//!
//! ## Example Usage
//!
//! ```rust
//! use fleetdesk_core::money::Money;
//! use fleetdesk_core::pricing::RateSchedule;
//!
//! let rates = RateSchedule::new(
//!     Money::from_units(5),  // per hour
//!     Money::from_units(50), // per 12 hours
//!     Money::from_units(90), // per 24 hours
//! );
//!
//! // 30 hours = 1 day + 6 hours
//! assert_eq!(rates.cost(30), Money::from_units(120));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{rental_cost, Quote, RateBreakdown, RateSchedule};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First id handed out by an empty customer directory.
pub const FIRST_CUSTOMER_ID: u32 = 1001;

/// First id handed out by an empty credential store.
pub const FIRST_CREDENTIAL_ID: u32 = 1;

/// Minimum rental length from the posted terms and conditions.
///
/// Enforced at the operator boundary, never inside the rate calculation.
pub const DEFAULT_MIN_RENTAL_HOURS: u32 = 3;

/// Longest rental a single transaction may book (one year).
pub const MAX_RENTAL_HOURS: u32 = 24 * 365;
