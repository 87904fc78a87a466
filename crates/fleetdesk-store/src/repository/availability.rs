//! # Availability Store
//!
//! The cars that can be rented right now. Same line format as the fleet.
//!
//! Renting removes one car. The only way a car comes back is a reset, which
//! copies the whole fleet over.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use fleetdesk_core::{Car, CoreError};

use super::car_file::CarFile;
use super::fleet::FleetStore;
use crate::error::StoreResult;

/// Store for the availability file.
#[derive(Debug)]
pub struct AvailabilityStore {
    inner: CarFile,
}

impl AvailabilityStore {
    /// Loads availability. A missing file means nothing is rentable.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let inner = CarFile::load(path)?;
        info!(
            path = %inner.path().display(),
            cars = inner.cars().len(),
            skipped = inner.skipped(),
            "Availability loaded"
        );
        Ok(AvailabilityStore { inner })
    }

    pub fn list(&self) -> &[Car] {
        self.inner.cars()
    }

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

    pub fn skipped_lines(&self) -> usize {
        self.inner.skipped()
    }

    /// Takes the first car with `plate` out of availability.
    ///
    /// ## Errors
    /// - `NotAvailable` if no available car has this plate. The file is not
    ///   touched.
    /// - `StorageUnavailable` if the rewrite fails. The car stays available.
    pub fn remove(&mut self, plate: &str) -> StoreResult<Car> {
        let Some(index) = self.inner.position(plate) else {
            debug!(plate = %plate, "Plate not in availability");
            return Err(CoreError::not_available(plate).into());
        };

        let mut next = self.inner.cars().to_vec();
        let car = next.remove(index);
        self.inner.replace(next)?;

        info!(plate = %plate, remaining = self.len(), "Car taken out of availability");
        Ok(car)
    }

    /// Makes availability an exact copy of the fleet.
    pub fn reset_from_fleet(&mut self, fleet: &FleetStore) -> StoreResult<usize> {
        self.inner.replace(fleet.list().to_vec())?;
        info!(cars = self.len(), "Availability reset from fleet");
        Ok(self.len())
    }

    /// Removes every car with `plate`. No rewrite when nothing matched.
    pub(crate) fn purge(&mut self, plate: &str) -> StoreResult<usize> {
        self.retain(|car| car.plate != plate)
    }

    /// Drops cars whose plate is not in the fleet.
    pub(crate) fn retain_fleet(&mut self, fleet: &FleetStore) -> StoreResult<usize> {
        let dropped = self.retain(|car| fleet.contains(&car.plate))?;
        if dropped > 0 {
            warn!(
                dropped,
                path = %self.path().display(),
                "Removed available cars that are no longer in the fleet"
            );
        }
        Ok(dropped)
    }

    fn retain(&mut self, keep: impl Fn(&Car) -> bool) -> StoreResult<usize> {
        let next: Vec<Car> = self.inner.cars().iter().filter(|&c| keep(c)).cloned().collect();
        let dropped = self.len() - next.len();
        if dropped > 0 {
            self.inner.replace(next)?;
        }
        Ok(dropped)
    }
}
