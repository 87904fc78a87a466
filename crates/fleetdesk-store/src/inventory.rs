//! # Inventory
//!
//! Owns the fleet and availability stores together so that every plate in
//! availability is also in the fleet, after every operation.
//!
//! ## Operations And What They Touch
//! ```text
//! ┌──────────────────────┬─────────────────┬──────────────────────────────┐
//! │ operation            │ car rental.txt  │ available.txt                │
//! ├──────────────────────┼─────────────────┼──────────────────────────────┤
//! │ add_car              │ rewrite         │ -  (rentable after reset)    │
//! │ delete_car           │ rewrite         │ rewrite if it held the plate │
//! │ take_available       │ -               │ rewrite                      │
//! │ reset_availability   │ -               │ rewrite (copy of fleet)      │
//! │ open / reconcile     │ -               │ rewrite if orphans found     │
//! └──────────────────────┴─────────────────┴──────────────────────────────┘
//! ```
//!
//! `delete_car` purges availability before it touches the fleet, so a
//! failure or crash between the two rewrites leaves at most a fleet car
//! that is not available, never an available car outside the fleet.

use tracing::info;

use fleetdesk_core::Car;

use crate::config::StorageSettings;
use crate::error::StoreResult;
use crate::repository::availability::AvailabilityStore;
use crate::repository::fleet::FleetStore;

/// Fleet plus availability, kept consistent.
#[derive(Debug)]
pub struct Inventory {
    fleet: FleetStore,
    availability: AvailabilityStore,
}

impl Inventory {
    /// Loads both files and drops available cars missing from the fleet.
    pub fn open(settings: &StorageSettings) -> StoreResult<Self> {
        let fleet = FleetStore::load(settings.fleet_path(), settings.allow_duplicate_plates)?;
        let availability = AvailabilityStore::load(settings.availability_path())?;
        Self::from_stores(fleet, availability)
    }

    /// Wraps already-loaded stores, reconciling them first.
    pub fn from_stores(fleet: FleetStore, availability: AvailabilityStore) -> StoreResult<Self> {
        let mut inventory = Inventory {
            fleet,
            availability,
        };
        inventory.reconcile()?;
        Ok(inventory)
    }

    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    pub fn availability(&self) -> &AvailabilityStore {
        &self.availability
    }

    /// Adds a car to the fleet. It is not rentable until the next reset.
    pub fn add_car(&mut self, car: Car) -> StoreResult<()> {
        self.fleet.add(car)
    }

    /// Deletes every car with `plate` from the fleet and from availability.
    ///
    /// Returns `false`, touching neither file, when the fleet has no such
    /// plate.
    pub fn delete_car(&mut self, plate: &str) -> StoreResult<bool> {
        if !self.fleet.contains(plate) {
            return Ok(false);
        }
        let pruned = self.availability.purge(plate)?;
        if pruned > 0 {
            info!(plate = %plate, pruned, "Car removed from availability before deletion");
        }
        self.fleet.delete(plate)
    }

    /// Takes a car out of availability for renting.
    pub fn take_available(&mut self, plate: &str) -> StoreResult<Car> {
        self.availability.remove(plate)
    }

    /// Makes every fleet car available again. Returns how many there are.
    pub fn reset_availability(&mut self) -> StoreResult<usize> {
        self.availability.reset_from_fleet(&self.fleet)
    }

    /// Removes available cars whose plate is not in the fleet.
    pub fn reconcile(&mut self) -> StoreResult<usize> {
        self.availability.retain_fleet(&self.fleet)
    }

    /// Fleet cars not currently available, i.e. rented out.
    pub fn rented_out(&self) -> Vec<&Car> {
        self.fleet
            .list()
            .iter()
            .filter(|car| !self.availability.contains(&car.plate))
            .collect()
    }

    /// True when every available plate is in the fleet.
    pub fn is_consistent(&self) -> bool {
        self.availability
            .list()
            .iter()
            .all(|car| self.fleet.contains(&car.plate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc1, car, TestEnvironment};

    fn open(env: &TestEnvironment) -> Inventory {
        Inventory::open(&env.config.storage).unwrap()
    }

    /// Checks the files themselves, without the reconcile that `open` does.
    fn consistent_on_disk(env: &TestEnvironment) -> bool {
        let fleet = FleetStore::load(env.config.storage.fleet_path(), true).unwrap();
        let available = AvailabilityStore::load(env.config.storage.availability_path()).unwrap();
        available.list().iter().all(|c| fleet.contains(&c.plate))
    }

    #[test]
    fn test_new_car_needs_reset_to_be_rentable() {
        let env = TestEnvironment::new();
        let mut inventory = open(&env);

        inventory.add_car(abc1()).unwrap();
        assert!(inventory.fleet().contains("ABC1"));
        assert!(!inventory.availability().contains("ABC1"));
        assert!(inventory.take_available("ABC1").unwrap_err().is_not_available());

        assert_eq!(inventory.reset_availability().unwrap(), 1);
        assert_eq!(inventory.take_available("ABC1").unwrap().plate, "ABC1");
    }

    #[test]
    fn test_delete_car_prunes_availability() {
        let env = TestEnvironment::new();
        let mut inventory = open(&env);
        inventory.add_car(abc1()).unwrap();
        inventory.add_car(car("WXY9", 8, 60, 100)).unwrap();
        inventory.reset_availability().unwrap();

        assert!(inventory.delete_car("ABC1").unwrap());
        assert!(!inventory.availability().contains("ABC1"));
        assert!(inventory.is_consistent());

        let reopened = open(&env);
        assert_eq!(reopened.fleet().len(), 1);
        assert_eq!(reopened.availability().len(), 1);
    }

    #[test]
    fn test_failed_availability_rewrite_keeps_delete_consistent() {
        let env = TestEnvironment::new();
        let mut inventory = open(&env);
        inventory.add_car(abc1()).unwrap();
        inventory.reset_availability().unwrap();

        let blocker = env.dir.path().join("available.txt.tmp");
        std::fs::create_dir(&blocker).unwrap();

        assert!(inventory.delete_car("ABC1").is_err());
        assert!(inventory.is_consistent());
        assert!(inventory.fleet().contains("ABC1"));
        assert!(consistent_on_disk(&env));

        std::fs::remove_dir(&blocker).unwrap();
        assert!(inventory.delete_car("ABC1").unwrap());
        assert!(inventory.fleet().is_empty());
        assert!(inventory.availability().is_empty());
        assert!(inventory.take_available("ABC1").unwrap_err().is_not_available());
    }

    #[test]
    fn test_delete_unknown_plate_touches_nothing() {
        let env = TestEnvironment::new();
        let fleet = "ABC1 Toyota Vios 5 Silver 5 50 90 A";
        let available = "ABC1 Toyota Vios 5 Silver 5 50 90 A";
        env.write("car rental.txt", fleet);
        env.write("available.txt", available);

        let mut inventory = open(&env);
        assert!(!inventory.delete_car("NOPE").unwrap());
        assert_eq!(env.read("car rental.txt"), fleet);
        assert_eq!(env.read("available.txt"), available);
    }

    #[test]
    fn test_open_drops_orphaned_available_cars() {
        let env = TestEnvironment::new();
        env.write("car rental.txt", "ABC1 Toyota Vios 5 Silver 5 50 90 A\n");
        env.write(
            "available.txt",
            "GONE1 Honda City 5 Grey 8 60 100 M\nABC1 Toyota Vios 5 Silver 5 50 90 A\n",
        );

        let inventory = open(&env);
        assert!(inventory.is_consistent());
        assert_eq!(inventory.availability().len(), 1);
        assert_eq!(env.read("available.txt"), "ABC1 Toyota Vios 5 Silver 5 50 90 A\n");
    }

    #[test]
    fn test_rented_out_is_fleet_minus_available() {
        let env = TestEnvironment::new();
        let mut inventory = open(&env);
        inventory.add_car(abc1()).unwrap();
        inventory.add_car(car("WXY9", 8, 60, 100)).unwrap();
        inventory.reset_availability().unwrap();
        inventory.take_available("WXY9").unwrap();

        let out: Vec<&str> = inventory
            .rented_out()
            .into_iter()
            .map(|c| c.plate.as_str())
            .collect();
        assert_eq!(out, vec!["WXY9"]);
    }

    #[test]
    fn test_invariant_holds_across_mixed_operations() {
        let env = TestEnvironment::new();
        let mut inventory = open(&env);

        let plates = ["P1", "P2", "P3", "P4", "P5"];
        for (i, plate) in plates.iter().enumerate() {
            inventory.add_car(car(plate, 1 + i as i64, 10, 20)).unwrap();
            assert!(inventory.is_consistent());
        }

        inventory.reset_availability().unwrap();
        assert_eq!(inventory.availability().list(), inventory.fleet().list());

        for (step, plate) in plates.iter().cycle().take(15).enumerate() {
            match step % 3 {
                0 => {
                    let _ = inventory.take_available(plate);
                }
                1 => {
                    inventory.delete_car(plate).unwrap();
                }
                _ => {
                    let _ = inventory.add_car(car(plate, 3, 30, 60));
                    if step % 2 == 0 {
                        inventory.reset_availability().unwrap();
                    }
                }
            }
            assert!(inventory.is_consistent(), "broken after step {}", step);
            assert!(consistent_on_disk(&env), "broken on disk after step {}", step);
        }
    }
}
