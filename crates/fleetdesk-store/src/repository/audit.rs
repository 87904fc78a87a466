//! # Audit Log
//!
//! Human-readable rental history. Written once per rental, never read back.
//!
//! ## Entry Layout
//! ```text
//! ==========================================================
//! DATE: 19/10/2026 TIME: 14:03:22
//! CUSTOMER: Alice Tan (ID: 1001)
//! CAR: ABC1 (Toyota Vios)
//! HOURS: 30
//! PAYMENT: RM 120
//! ```
//!
//! Payment is printed in whole currency units, the same amount the
//! customer was charged.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::debug;

use fleetdesk_core::RentalRecord;

use crate::error::StoreResult;
use crate::flatfile::FlatFile;

const BANNER_WIDTH: usize = 58;

/// Append-only rental log.
#[derive(Debug, Clone)]
pub struct AuditLog {
    file: FlatFile,
    currency_symbol: String,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>, currency_symbol: impl Into<String>) -> Self {
        AuditLog {
            file: FlatFile::new(path),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Appends one entry.
    pub fn append(&self, record: &RentalRecord) -> StoreResult<()> {
        self.file.append(&self.format_entry(record))?;
        debug!(
            plate = %record.plate,
            customer_id = record.customer_id,
            "Rental written to audit log"
        );
        Ok(())
    }

    /// Renders one entry, without a trailing newline.
    pub fn format_entry(&self, record: &RentalRecord) -> String {
        format!(
            "{banner}\n\
             {stamp}\n\
             CUSTOMER: {name} (ID: {id})\n\
             CAR: {plate} ({brand} {model})\n\
             HOURS: {hours}\n\
             PAYMENT: {currency} {amount}",
            banner = "=".repeat(BANNER_WIDTH),
            stamp = format_timestamp(&record.timestamp),
            name = record.customer_name,
            id = record.customer_id,
            plate = record.plate,
            brand = record.brand,
            model = record.model,
            hours = record.hours,
            currency = self.currency_symbol,
            amount = record.total_cost.units(),
        )
    }
}

fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("DATE: %d/%m/%Y TIME: %H:%M:%S").to_string()
}
