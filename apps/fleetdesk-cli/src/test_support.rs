//! Shared fixtures for CLI tests.

use fleetdesk_core::{Car, Money, RateSchedule, Transmission};
use fleetdesk_store::{FleetdeskConfig, RentalDesk};
use tempfile::TempDir;

/// A desk over a throwaway data directory.
pub(crate) struct TestDesk {
    pub dir: TempDir,
    pub desk: RentalDesk,
}

impl TestDesk {
    /// Empty desk: no cars, customers or admins.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let config = FleetdeskConfig::for_data_dir(dir.path());
        let desk = RentalDesk::open(&config).unwrap();
        TestDesk { dir, desk }
    }

    /// Desk with ABC1 in the fleet and available.
    pub fn with_abc1() -> Self {
        let mut test = Self::empty();
        test.desk.inventory_mut().add_car(abc1()).unwrap();
        test.desk.inventory_mut().reset_availability().unwrap();
        test
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap_or_default()
    }
}

/// Toyota Vios at 5 / 50 / 90.
pub(crate) fn abc1() -> Car {
    Car {
        plate: "ABC1".to_string(),
        brand: "Toyota".to_string(),
        model: "Vios".to_string(),
        seat_capacity: 5,
        colour: "Silver".to_string(),
        rates: RateSchedule::new(
            Money::from_units(5),
            Money::from_units(50),
            Money::from_units(90),
        ),
        transmission: Transmission::Automatic,
    }
}
