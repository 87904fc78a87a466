//! # Rental Desk
//!
//! One handle owning every store, opened from a [`FleetdeskConfig`].
//!
//! ## Startup
//! ```text
//! FleetdeskConfig::load(None)
//!      │
//!      ▼
//! RentalDesk::open(&config)
//!      ├── create data_dir if missing
//!      ├── Inventory::open        (fleet + availability, reconciled)
//!      ├── CustomerDirectory::load
//!      ├── CredentialStore::load  (with master secret)
//!      └── AuditLog::new          (opened lazily on first rental)
//! ```
//!
//! Each store is loaded once here. The console never reads a data file
//! directly afterwards.

use tracing::info;

use fleetdesk_core::{CoreError, Customer, RentalReceipt};

use crate::config::FleetdeskConfig;
use crate::error::{StoreError, StoreResult};
use crate::inventory::Inventory;
use crate::rental::RentalTransaction;
use crate::repository::audit::AuditLog;
use crate::repository::credential::CredentialStore;
use crate::repository::customer::CustomerDirectory;

/// Main handle providing store access.
#[derive(Debug)]
pub struct RentalDesk {
    config: FleetdeskConfig,
    inventory: Inventory,
    customers: CustomerDirectory,
    credentials: CredentialStore,
    audit_log: AuditLog,
}

impl RentalDesk {
    /// Opens every store under the configured data directory.
    ///
    /// ## Returns
    /// * `Ok(RentalDesk)` - stores loaded, availability reconciled
    /// * `Err(StoreError)` - data directory or a data file is unreadable
    pub fn open(config: &FleetdeskConfig) -> StoreResult<Self> {
        config.validate()?;
        let storage = &config.storage;

        info!(data_dir = %storage.data_dir.display(), "Opening rental desk");
        std::fs::create_dir_all(&storage.data_dir)
            .map_err(|e| StoreError::storage(&storage.data_dir, e))?;

        let inventory = Inventory::open(storage)?;
        let customers = CustomerDirectory::load(storage.customer_path())?;
        let credentials =
            CredentialStore::load(storage.credential_path(), config.auth.master_secret())?;
        let audit_log = AuditLog::new(storage.audit_log_path(), &config.rental.currency_symbol);

        info!(
            fleet = inventory.fleet().len(),
            available = inventory.availability().len(),
            customers = customers.len(),
            admins = credentials.len(),
            "Rental desk ready"
        );

        Ok(RentalDesk {
            config: config.clone(),
            inventory,
            customers,
            credentials,
            audit_log,
        })
    }

    pub fn config(&self) -> &FleetdeskConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerDirectory {
        &mut self.customers
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn credentials_mut(&mut self) -> &mut CredentialStore {
        &mut self.credentials
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }

    /// Starts a rental against this desk's inventory and audit log.
    pub fn begin_rental(&mut self) -> RentalTransaction<'_> {
        RentalTransaction::new(&mut self.inventory, &self.audit_log)
    }

    /// Rents `plate` to an already-loaded customer.
    pub fn rent(&mut self, customer: &Customer, plate: &str, hours: u32) -> StoreResult<RentalReceipt> {
        self.begin_rental().rent(customer, plate, hours)
    }

    /// Looks up the customer by id, then rents.
    ///
    /// ## Errors
    /// - `CustomerNotFound` when the id is unknown (nothing changes)
    /// - anything [`RentalTransaction::rent`] returns
    pub fn rent_for(&mut self, customer_id: u32, plate: &str, hours: u32) -> StoreResult<RentalReceipt> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .ok_or(CoreError::CustomerNotFound(customer_id))?;
        RentalTransaction::new(&mut self.inventory, &self.audit_log).rent(customer, plate, hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc1, new_customer, TestEnvironment};
    use fleetdesk_core::Money;

    #[test]
    fn test_open_creates_data_dir() {
        let env = TestEnvironment::new();
        let config = FleetdeskConfig::for_data_dir(env.dir.path().join("nested").join("desk"));

        let desk = RentalDesk::open(&config).unwrap();
        assert!(config.storage.data_dir.is_dir());
        assert!(desk.inventory().fleet().is_empty());
        assert_eq!(desk.customers().next_id(), 1001);
        assert_eq!(desk.credentials().next_id(), 1);
    }

    #[test]
    fn test_end_to_end_rental() {
        let env = TestEnvironment::new();
        let mut desk = RentalDesk::open(&env.config).unwrap();

        desk.inventory_mut().add_car(abc1()).unwrap();
        desk.inventory_mut().reset_availability().unwrap();
        let alice = desk
            .customers_mut()
            .register(new_customer("Alice Tan"))
            .unwrap();

        let receipt = desk.rent_for(alice.id, "ABC1", 30).unwrap();
        assert_eq!(receipt.cost, Money::from_units(120));
        assert!(desk.rent(&alice, "ABC1", 1).unwrap_err().is_not_available());

        let reopened = RentalDesk::open(&env.config).unwrap();
        assert!(reopened.inventory().availability().is_empty());
        assert_eq!(reopened.customers().find_by_id(1001), Some(&alice));
        assert!(env.read("Log.txt").contains("PAYMENT: RM 120"));
    }

    #[test]
    fn test_unknown_customer_rents_nothing() {
        let env = TestEnvironment::new();
        let mut desk = RentalDesk::open(&env.config).unwrap();
        desk.inventory_mut().add_car(abc1()).unwrap();
        desk.inventory_mut().reset_availability().unwrap();

        assert!(matches!(
            desk.rent_for(4242, "ABC1", 30),
            Err(StoreError::Core(CoreError::CustomerNotFound(4242)))
        ));
        assert!(desk.inventory().availability().contains("ABC1"));
    }

    #[test]
    fn test_currency_symbol_reaches_audit_log() {
        let mut env = TestEnvironment::new();
        env.config.rental.currency_symbol = "MYR".to_string();
        let mut desk = RentalDesk::open(&env.config).unwrap();
        desk.inventory_mut().add_car(abc1()).unwrap();
        desk.inventory_mut().reset_availability().unwrap();
        let alice = desk
            .customers_mut()
            .register(new_customer("Alice Tan"))
            .unwrap();

        desk.rent(&alice, "ABC1", 18).unwrap();
        assert!(env.read("Log.txt").contains("PAYMENT: MYR 80"));
    }
}
