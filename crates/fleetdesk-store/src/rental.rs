//! # Rental Transaction
//!
//! Turns "customer wants plate X for N hours" into a committed rental.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        rent(customer, plate, hours)                     │
//! │                                                                         │
//! │  Quoting                                                                │
//! │     │                                                                   │
//! │     ├── take plate out of availability ──── not there ──► Aborted      │
//! │     │        (availability rewritten)                 NotAvailable      │
//! │     ▼                                                                   │
//! │  Committed                                                              │
//! │     │                                                                   │
//! │     ├── price with the car's own rates (truncated to whole units)      │
//! │     │                                                                   │
//! │     └── append audit entry ──── fails ──► warn, audit_logged = false   │
//! │                                              (rental still stands)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hours are taken as given. The posted minimum is checked by the caller
//! before a transaction starts.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use fleetdesk_core::{
    rental_cost, CoreError, Customer, RateBreakdown, RentalReceipt, RentalRecord, RentalStatus,
};

use crate::error::StoreResult;
use crate::inventory::Inventory;
use crate::repository::audit::AuditLog;

/// A single rental, from quote to commit.
///
/// ## Usage
/// ```rust,ignore
/// let mut rental = RentalTransaction::new(&mut inventory, &audit_log);
/// let receipt = rental.rent(&customer, "ABC1", 30)?;
/// assert_eq!(receipt.cost, Money::from_units(120));
/// ```
#[derive(Debug)]
pub struct RentalTransaction<'a> {
    inventory: &'a mut Inventory,
    audit_log: &'a AuditLog,
    status: RentalStatus,
}

impl<'a> RentalTransaction<'a> {
    pub fn new(inventory: &'a mut Inventory, audit_log: &'a AuditLog) -> Self {
        RentalTransaction {
            inventory,
            audit_log,
            status: RentalStatus::Quoting,
        }
    }

    pub fn status(&self) -> RentalStatus {
        self.status
    }

    /// Rents `plate` to `customer` for `hours`, stamped with the local time.
    pub fn rent(&mut self, customer: &Customer, plate: &str, hours: u32) -> StoreResult<RentalReceipt> {
        self.rent_at(customer, plate, hours, Local::now())
    }

    /// Same as [`rent`](Self::rent) with an explicit timestamp.
    ///
    /// ## Errors
    /// - `NotAvailable` when the plate is not in availability (status
    ///   becomes `Aborted`, nothing changes)
    /// - `InvalidRental` when this transaction already finished
    /// - `StorageUnavailable` when availability cannot be rewritten (status
    ///   becomes `Aborted`, the car stays available)
    pub fn rent_at(
        &mut self,
        customer: &Customer,
        plate: &str,
        hours: u32,
        at: DateTime<Local>,
    ) -> StoreResult<RentalReceipt> {
        if self.status != RentalStatus::Quoting {
            return Err(CoreError::InvalidRental {
                hours,
                reason: format!("transaction already {:?}", self.status).to_lowercase(),
            }
            .into());
        }

        let car = match self.inventory.take_available(plate) {
            Ok(car) => car,
            Err(e) => {
                self.status = RentalStatus::Aborted;
                info!(plate = %plate, customer_id = customer.id, error = %e, "Rental aborted");
                return Err(e);
            }
        };
        self.status = RentalStatus::Committed;

        let cost = rental_cost(hours, &car);
        let record = RentalRecord::new(customer, &car, hours, cost, at);

        let audit_logged = match self.audit_log.append(&record) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    plate = %car.plate,
                    customer_id = customer.id,
                    error = %e,
                    "Rental committed but audit log write failed"
                );
                false
            }
        };

        info!(
            plate = %car.plate,
            customer_id = customer.id,
            hours,
            cost = %cost,
            "Rental committed"
        );

        Ok(RentalReceipt {
            customer_id: customer.id,
            car,
            hours,
            breakdown: RateBreakdown::from_hours(hours),
            cost,
            rented_at: at,
            status: self.status,
            audit_logged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::test_support::{abc1, new_customer, TestEnvironment};
    use fleetdesk_core::Money;

    fn ready_inventory(env: &TestEnvironment) -> Inventory {
        let mut inventory = Inventory::open(&env.config.storage).unwrap();
        inventory.add_car(abc1()).unwrap();
        inventory.reset_availability().unwrap();
        inventory
    }

    #[test]
    fn test_rent_thirty_hours_costs_120_then_plate_is_gone() {
        let env = TestEnvironment::new();
        let mut inventory = ready_inventory(&env);
        let log = AuditLog::new(env.config.storage.audit_log_path(), "RM");
        let alice = new_customer("Alice Tan").with_id(1001);

        let mut rental = RentalTransaction::new(&mut inventory, &log);
        let receipt = rental.rent(&alice, "ABC1", 30).unwrap();
        assert_eq!(rental.status(), RentalStatus::Committed);

        assert_eq!(receipt.cost, Money::from_units(120));
        assert_eq!(receipt.breakdown.days, 1);
        assert_eq!(receipt.breakdown.hours, 6);
        assert_eq!(receipt.status, RentalStatus::Committed);
        assert!(receipt.audit_logged);
        assert_eq!(receipt.car.plate, "ABC1");

        let log_text = env.read("Log.txt");
        assert!(log_text.contains("CUSTOMER: Alice Tan (ID: 1001)"));
        assert!(log_text.contains("CAR: ABC1 (Toyota Vios)"));
        assert!(log_text.contains("HOURS: 30"));
        assert!(log_text.contains("PAYMENT: RM 120"));

        let mut again = RentalTransaction::new(&mut inventory, &log);
        let err = again.rent(&alice, "ABC1", 1).unwrap_err();
        assert!(err.is_not_available());
        assert_eq!(again.status(), RentalStatus::Aborted);

        assert!(inventory.availability().is_empty());
        assert!(inventory.fleet().contains("ABC1"));
    }

    #[test]
    fn test_unknown_plate_aborts_without_side_effects() {
        let env = TestEnvironment::new();
        let mut inventory = ready_inventory(&env);
        let log = AuditLog::new(env.config.storage.audit_log_path(), "RM");
        let before = env.read("available.txt");

        let mut rental = RentalTransaction::new(&mut inventory, &log);
        let err = rental
            .rent(&new_customer("Bala").with_id(1002), "NOPE", 5)
            .unwrap_err();

        assert!(matches!(err, StoreError::Core(CoreError::NotAvailable { .. })));
        assert_eq!(env.read("available.txt"), before);
        assert_eq!(env.read("Log.txt"), "");
    }

    #[test]
    fn test_audit_failure_does_not_undo_rental() {
        let env = TestEnvironment::new();
        let mut inventory = ready_inventory(&env);
        let log = AuditLog::new(env.dir.path().join("no-such-dir").join("Log.txt"), "RM");

        let mut rental = RentalTransaction::new(&mut inventory, &log);
        let receipt = rental
            .rent(&new_customer("Alice Tan").with_id(1001), "ABC1", 30)
            .unwrap();

        assert!(!receipt.audit_logged);
        assert_eq!(receipt.cost, Money::from_units(120));
        assert!(!inventory.availability().contains("ABC1"));
    }

    #[test]
    fn test_transaction_is_single_use() {
        let env = TestEnvironment::new();
        let mut inventory = ready_inventory(&env);
        let log = AuditLog::new(env.config.storage.audit_log_path(), "RM");
        let alice = new_customer("Alice Tan").with_id(1001);

        let mut rental = RentalTransaction::new(&mut inventory, &log);
        rental.rent(&alice, "ABC1", 30).unwrap();
        assert!(matches!(
            rental.rent(&alice, "ABC1", 30),
            Err(StoreError::Core(CoreError::InvalidRental { .. }))
        ));
    }

    #[test]
    fn test_rented_car_returns_after_reset() {
        let env = TestEnvironment::new();
        let mut inventory = ready_inventory(&env);
        let log = AuditLog::new(env.config.storage.audit_log_path(), "RM");
        let alice = new_customer("Alice Tan").with_id(1001);

        RentalTransaction::new(&mut inventory, &log)
            .rent(&alice, "ABC1", 18)
            .unwrap();
        inventory.reset_availability().unwrap();

        let receipt = RentalTransaction::new(&mut inventory, &log)
            .rent(&alice, "ABC1", 18)
            .unwrap();
        assert_eq!(receipt.cost, Money::from_units(80));
    }
}
