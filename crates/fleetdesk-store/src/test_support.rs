//! Shared fixtures for file-backed tests.

use tempfile::TempDir;

use fleetdesk_core::{Car, Money, NewCustomer, RateSchedule, Transmission};

use crate::config::FleetdeskConfig;

/// A throwaway data directory with a config pointing into it.
pub(crate) struct TestEnvironment {
    pub dir: TempDir,
    pub config: FleetdeskConfig,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = FleetdeskConfig::for_data_dir(dir.path());
        TestEnvironment { dir, config }
    }

    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write fixture");
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap_or_default()
    }
}

/// A car with whole-unit rates per hour / half day / day.
pub(crate) fn car(plate: &str, per_hour: i64, per_half_day: i64, per_day: i64) -> Car {
    Car {
        plate: plate.to_string(),
        brand: "Toyota".to_string(),
        model: "Vios".to_string(),
        seat_capacity: 5,
        colour: "Silver".to_string(),
        rates: RateSchedule::new(
            Money::from_units(per_hour),
            Money::from_units(per_half_day),
            Money::from_units(per_day),
        ),
        transmission: Transmission::Automatic,
    }
}

/// The 5 / 50 / 90 car used throughout the rental scenarios.
pub(crate) fn abc1() -> Car {
    car("ABC1", 5, 50, 90)
}

pub(crate) fn new_customer(name: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        phone: "012-3456789".to_string(),
        national_id: "900101-14-5678".to_string(),
        address: "12 Jalan Mawar, Kuala Lumpur".to_string(),
    }
}
