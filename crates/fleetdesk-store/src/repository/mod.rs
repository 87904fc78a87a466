//! # Repository Module
//!
//! One store per data file.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How A Store Works                                    │
//! │                                                                         │
//! │  load(path)        read every line once, skip malformed ones           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  in-memory Vec     the authoritative copy while the desk runs          │
//! │       │                                                                 │
//! │       │  mutation (add / delete / remove / reset)                      │
//! │       ▼                                                                 │
//! │  build next Vec ──► persist ──► swap in                                │
//! │                        │                                                │
//! │                        └─ on failure the old Vec stays, so memory      │
//! │                           never runs ahead of the file                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`FleetStore`] - every car the business owns (full rewrite)
//! - [`AvailabilityStore`] - cars ready to rent (full rewrite)
//! - [`CustomerDirectory`] - registered customers (append-only)
//! - [`CredentialStore`] - administrator logins (append-only)
//! - [`AuditLog`] - rental history (append-only, write-only)
//!
//! [`FleetStore`]: fleet::FleetStore
//! [`AvailabilityStore`]: availability::AvailabilityStore
//! [`CustomerDirectory`]: customer::CustomerDirectory
//! [`CredentialStore`]: credential::CredentialStore
//! [`AuditLog`]: audit::AuditLog

pub mod audit;
pub mod availability;
pub mod credential;
pub mod customer;
pub mod fleet;

mod car_file;
