//! # fleetdesk-store: Flat-File Layer for Fleetdesk
//!
//! This crate owns every data file of the rental desk. Each file is read
//! once at startup into an in-memory store and written back on mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fleetdesk Data Flow                              │
//! │                                                                         │
//! │  Console action (rent a car)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  fleetdesk-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  RentalDesk   │    │   Inventory   │    │ Repositories │  │   │
//! │  │   │  (desk.rs)    │───►│ fleet ⊇ avail │───►│ fleet, avail │  │   │
//! │  │   │               │    └───────────────┘    │ customers    │  │   │
//! │  │   │ RentalTrans-  │                         │ credentials  │  │   │
//! │  │   │ action        │────────────────────────►│ audit log    │  │   │
//! │  │   └───────────────┘                         └──────┬───────┘  │   │
//! │  │                                                    │          │   │
//! │  │                              flatfile.rs (rewrite / append)   │   │
//! │  └────────────────────────────────────────────────────┼──────────┘   │
//! │                                                       ▼              │
//! │   data_dir/  car rental.txt  available.txt  Customer.txt             │
//! │              UserPass.txt    Log.txt                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - `fleetdesk.toml`, environment overrides, file locations
//! - [`error`] - Store error types
//! - [`flatfile`] - Atomic rewrite, newline-safe append, line loading
//! - [`codec`] - Car and credential line formats
//! - [`repository`] - One store per data file
//! - [`inventory`] - Fleet and availability kept consistent
//! - [`rental`] - Rental transaction
//! - [`desk`] - Handle that opens everything
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fleetdesk_store::{FleetdeskConfig, RentalDesk};
//!
//! let config = FleetdeskConfig::load(None)?;
//! let mut desk = RentalDesk::open(&config)?;
//!
//! let alice = desk.customers_mut().register(form)?;
//! let receipt = desk.rent(&alice, "ABC1", 30)?;
//! println!("Total: {} {}", config.rental.currency_symbol, receipt.cost.units());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod config;
pub mod desk;
pub mod error;
pub mod flatfile;
pub mod inventory;
pub mod rental;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{AuthSettings, FleetdeskConfig, RentalSettings, StorageSettings};
pub use desk::RentalDesk;
pub use error::{StoreError, StoreResult};
pub use inventory::Inventory;
pub use rental::RentalTransaction;

// Repository re-exports for convenience
pub use repository::audit::AuditLog;
pub use repository::availability::AvailabilityStore;
pub use repository::credential::CredentialStore;
pub use repository::customer::CustomerDirectory;
pub use repository::fleet::FleetStore;
