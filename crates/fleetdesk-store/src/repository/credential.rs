//! # Credential Store
//!
//! Administrator id / secret pairs, one `id secret` line each, append-only.
//!
//! ## Login Check
//! ```text
//! verify(secret)
//!      │
//!      ├── master secret configured and equal? ──► true
//!      │
//!      └── any stored line has this secret? ──► true
//!                                     else ──► false
//! ```
//!
//! Logins are by secret alone. The id only numbers administrators as they
//! are added.
//!
//! The master secret is what lets a fresh install, whose credential file is
//! still empty, log in to create its first administrator.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use fleetdesk_core::validation::validate_secret;
use fleetdesk_core::{Credential, FIRST_CREDENTIAL_ID};

use crate::error::{StoreError, StoreResult};
use crate::flatfile::{load_records, FlatFile, LineRecord};

/// Store for the credential file.
pub struct CredentialStore {
    file: FlatFile,
    credentials: Vec<Credential>,
    master_secret: Option<String>,
    skipped: usize,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.file.path())
            .field("credentials", &self.credentials.len())
            .field("master_secret", &self.master_secret.is_some())
            .finish()
    }
}

impl CredentialStore {
    /// Loads the credential file.
    ///
    /// `master_secret` of `None` (or empty) disables the master secret.
    pub fn load(path: impl Into<PathBuf>, master_secret: Option<&str>) -> StoreResult<Self> {
        let file = FlatFile::new(path);
        let loaded = load_records::<Credential>(&file)?;

        info!(
            path = %file.path().display(),
            credentials = loaded.records.len(),
            skipped = loaded.skipped,
            "Credentials loaded"
        );

        Ok(CredentialStore {
            file,
            credentials: loaded.records,
            master_secret: master_secret.filter(|s| !s.is_empty()).map(str::to_string),
            skipped: loaded.skipped,
        })
    }

    /// True when `secret` is the master secret or belongs to any stored
    /// credential.
    pub fn verify(&self, secret: &str) -> bool {
        if self.master_secret.as_deref() == Some(secret) {
            debug!("Login accepted with master secret");
            return true;
        }

        match self.credentials.iter().find(|c| c.matches(secret)) {
            Some(credential) => {
                debug!(admin_id = credential.id, "Login accepted");
                true
            }
            None => {
                debug!("Login rejected");
                false
            }
        }
    }

    /// One past the largest stored id, or 1 when empty.
    pub fn next_id(&self) -> u32 {
        self.credentials
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(FIRST_CREDENTIAL_ID, |max| max.saturating_add(1))
    }

    /// Assigns the next id to `secret` and stores it.
    pub fn register(&mut self, secret: &str) -> StoreResult<Credential> {
        let credential = Credential {
            id: self.next_id(),
            secret: secret.to_string(),
        };
        self.add(credential.clone())?;
        Ok(credential)
    }

    /// Appends a credential.
    ///
    /// ## Errors
    /// - `Validation` if the secret is empty or contains whitespace
    /// - `Duplicate` if the id is already taken
    /// - `StorageUnavailable` if the append fails
    pub fn add(&mut self, credential: Credential) -> StoreResult<()> {
        validate_secret(&credential.secret)?;

        if self.credentials.iter().any(|c| c.id == credential.id) {
            return Err(StoreError::duplicate("admin id", credential.id));
        }

        self.file.append(&credential.encode())?;
        info!(admin_id = credential.id, "Administrator added");
        self.credentials.push(credential);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}
