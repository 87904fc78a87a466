//! # Fleet Store
//!
//! Every car the business owns, rented out or not.
//!
//! ## Key Operations
//! - Load the fleet file once at startup
//! - Add a car (rewrite the whole file)
//! - Delete every car with a plate (rewrite only when something matched)
//!
//! ## Relationship With Availability
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   FleetStore (car rental.txt)                                          │
//! │   ┌───────────────────────────────────────────────┐                   │
//! │   │  ABC1   WXY9   JKL3   QRS7                    │                   │
//! │   │  ┌───────────────────────────┐                │                   │
//! │   │  │ AvailabilityStore         │  rented out:   │                   │
//! │   │  │ (available.txt)           │  JKL3 QRS7     │                   │
//! │   │  │  ABC1   WXY9              │                │                   │
//! │   │  └───────────────────────────┘                │                   │
//! │   └───────────────────────────────────────────────┘                   │
//! │                                                                         │
//! │   A new car joins the fleet only. It becomes rentable on the next     │
//! │   availability reset.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use fleetdesk_core::validation::validate_car;
use fleetdesk_core::Car;

use super::car_file::CarFile;
use crate::error::{StoreError, StoreResult};

/// Store for the fleet file.
///
/// ## Usage
/// ```rust,ignore
/// let mut fleet = FleetStore::load("car rental.txt", false)?;
/// fleet.add(car)?;
/// let removed = fleet.delete("ABC1")?;
/// ```
#[derive(Debug)]
pub struct FleetStore {
    inner: CarFile,
    allow_duplicate_plates: bool,
}

impl FleetStore {
    /// Loads the fleet. A missing file is an empty fleet.
    pub fn load(path: impl Into<PathBuf>, allow_duplicate_plates: bool) -> StoreResult<Self> {
        let inner = CarFile::load(path)?;
        info!(
            path = %inner.path().display(),
            cars = inner.cars().len(),
            skipped = inner.skipped(),
            "Fleet loaded"
        );
        Ok(FleetStore {
            inner,
            allow_duplicate_plates,
        })
    }

    /// All cars, in file order.
    pub fn list(&self) -> &[Car] {
        self.inner.cars()
    }

    /// First car with this plate.
    pub fn get(&self, plate: &str) -> Option<&Car> {
        self.inner.position(plate).map(|i| &self.inner.cars()[i])
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.inner.position(plate).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.cars().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.cars().is_empty()
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Malformed lines ignored by the last load.
    pub fn skipped_lines(&self) -> usize {
        self.inner.skipped()
    }

    /// Appends a car and rewrites the fleet file.
    ///
    /// ## Errors
    /// - `Validation` if a field would corrupt the line format
    /// - `Duplicate` if the plate exists and duplicates are not allowed
    /// - `StorageUnavailable` if the rewrite fails (fleet unchanged)
    pub fn add(&mut self, car: Car) -> StoreResult<()> {
        validate_car(&car)?;

        if !self.allow_duplicate_plates && self.contains(&car.plate) {
            return Err(StoreError::duplicate("plate", &car.plate));
        }

        let plate = car.plate.clone();
        let mut next = self.inner.cars().to_vec();
        next.push(car);
        self.inner.replace(next)?;

        info!(plate = %plate, fleet_size = self.len(), "Car added to fleet");
        Ok(())
    }

    /// Removes every car with `plate`.
    ///
    /// Returns `false` and leaves the file untouched when nothing matched.
    pub fn delete(&mut self, plate: &str) -> StoreResult<bool> {
        if !self.contains(plate) {
            debug!(plate = %plate, "Delete requested for unknown plate");
            return Ok(false);
        }

        let next: Vec<Car> = self
            .inner
            .cars()
            .iter()
            .filter(|c| c.plate != plate)
            .cloned()
            .collect();
        let removed = self.len() - next.len();
        self.inner.replace(next)?;

        info!(plate = %plate, removed, "Car deleted from fleet");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc1, car, TestEnvironment};

    #[test]
    fn test_missing_file_is_empty_fleet() {
        let env = TestEnvironment::new();
        let fleet = FleetStore::load(env.config.storage.fleet_path(), false).unwrap();
        assert!(fleet.is_empty());
        assert_eq!(fleet.skipped_lines(), 0);
    }

    #[test]
    fn test_add_then_reload() {
        let env = TestEnvironment::new();
        let path = env.config.storage.fleet_path();

        let mut fleet = FleetStore::load(&path, false).unwrap();
        fleet.add(abc1()).unwrap();
        fleet.add(car("WXY9", 8, 60, 100)).unwrap();

        let reloaded = FleetStore::load(&path, false).unwrap();
        assert_eq!(reloaded.list(), fleet.list());
        assert_eq!(reloaded.get("WXY9").unwrap().rates.per_day.units(), 100);
        assert_eq!(
            env.read("car rental.txt"),
            "ABC1 Toyota Vios 5 Silver 5 50 90 A\nWXY9 Toyota Vios 5 Silver 8 60 100 A\n"
        );
    }

    #[test]
    fn test_float_written_cars_survive_the_next_rewrite() {
        let env = TestEnvironment::new();
        env.write(
            "car rental.txt",
            "ABC1 Toyota Vios 5 Silver 5 50 90 A\n\
             QRS7 Proton Saga 5 White 7.125 45 80 M\n\
             BIG1 Toyota Alphard 7 Black 500 5000 1e+06 A\n",
        );

        let mut fleet = FleetStore::load(env.config.storage.fleet_path(), false).unwrap();
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.skipped_lines(), 0);

        fleet.add(car("NEW1", 6, 55, 95)).unwrap();
        let text = env.read("car rental.txt");
        assert!(text.contains("QRS7 Proton Saga 5 White 7.13 45 80 M"));
        assert!(text.contains("BIG1 Toyota Alphard 7 Black 500 5000 1000000 A"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_duplicate_plate_rejected_unless_allowed() {
        let env = TestEnvironment::new();
        let path = env.config.storage.fleet_path();

        let mut fleet = FleetStore::load(&path, false).unwrap();
        fleet.add(abc1()).unwrap();
        assert!(matches!(
            fleet.add(abc1()),
            Err(StoreError::Duplicate { .. })
        ));
        assert_eq!(fleet.len(), 1);

        let mut lenient = FleetStore::load(&path, true).unwrap();
        lenient.add(abc1()).unwrap();
        assert_eq!(lenient.len(), 2);
    }

    #[test]
    fn test_invalid_car_never_reaches_file() {
        let env = TestEnvironment::new();
        let mut fleet = FleetStore::load(env.config.storage.fleet_path(), false).unwrap();

        let mut bad = abc1();
        bad.model = "Land Cruiser".to_string();
        assert!(matches!(fleet.add(bad), Err(StoreError::Validation(_))));
        assert!(fleet.is_empty());
        assert_eq!(env.read("car rental.txt"), "");
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let env = TestEnvironment::new();
        env.write(
            "car rental.txt",
            "ABC1 Toyota Vios 5 Silver 5 50 90 A\n\
             WXY9 Honda City 5 Grey 8 60 100 M\n\
             ABC1 Proton Saga 5 White 4 40 70 M\n",
        );

        let mut fleet = FleetStore::load(env.config.storage.fleet_path(), false).unwrap();
        assert_eq!(fleet.len(), 3);

        assert!(fleet.delete("ABC1").unwrap());
        assert_eq!(fleet.len(), 1);
        assert_eq!(
            env.read("car rental.txt"),
            "WXY9 Honda City 5 Grey 8 60 100 M\n"
        );
    }

    #[test]
    fn test_delete_miss_leaves_file_untouched() {
        let env = TestEnvironment::new();
        // No trailing newline and a malformed line: a rewrite would change both.
        let original = "ABC1 Toyota Vios 5 Silver 5 50 90 A\nbroken line";
        env.write("car rental.txt", original);

        let mut fleet = FleetStore::load(env.config.storage.fleet_path(), false).unwrap();
        assert_eq!(fleet.skipped_lines(), 1);
        assert!(!fleet.delete("NOPE").unwrap());
        assert_eq!(env.read("car rental.txt"), original);
    }

    #[test]
    fn test_plates_are_case_sensitive() {
        let env = TestEnvironment::new();
        let mut fleet = FleetStore::load(env.config.storage.fleet_path(), false).unwrap();
        fleet.add(abc1()).unwrap();
        fleet.add(car("abc1", 1, 2, 3)).unwrap();

        assert!(!fleet.delete("Abc1").unwrap());
        assert_eq!(fleet.len(), 2);
    }
}
