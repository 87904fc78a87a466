//! Shared backing for the two car files.

use std::path::{Path, PathBuf};

use fleetdesk_core::Car;

use crate::error::StoreResult;
use crate::flatfile::{encode_all, load_records, FlatFile};

/// An ordered list of cars mirrored to a file by full rewrite.
#[derive(Debug)]
pub(crate) struct CarFile {
    file: FlatFile,
    cars: Vec<Car>,
    skipped: usize,
}

impl CarFile {
    pub(crate) fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = FlatFile::new(path);
        let loaded = load_records::<Car>(&file)?;
        Ok(CarFile {
            file,
            cars: loaded.records,
            skipped: loaded.skipped,
        })
    }

    pub(crate) fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }

    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }

    pub(crate) fn position(&self, plate: &str) -> Option<usize> {
        self.cars.iter().position(|c| c.plate == plate)
    }

    /// Persists `next`, then makes it the in-memory list.
    pub(crate) fn replace(&mut self, next: Vec<Car>) -> StoreResult<()> {
        self.file.rewrite(&encode_all(&next))?;
        self.cars = next;
        // A successful rewrite drops whatever malformed lines were on disk.
        self.skipped = 0;
        Ok(())
    }
}
