//! # Fleetdesk Configuration
//!
//! Where the data files live and the few business knobs the desk exposes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FLEETDESK_DATA_DIR=/srv/rental                                     │
//! │     FLEETDESK_MASTER_SECRET=...                                        │
//! │     FLEETDESK_MIN_HOURS=3                                              │
//! │     FLEETDESK_CURRENCY=RM                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/fleetdesk/fleetdesk.toml (Linux)                         │
//! │     ~/Library/Application Support/com.fleetdesk.fleetdesk/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     legacy file names, master secret "a", 3 hour minimum               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! data_dir = "/srv/rental"
//! fleet_file = "car rental.txt"
//! availability_file = "available.txt"
//! customer_file = "Customer.txt"
//! credential_file = "UserPass.txt"
//! audit_log_file = "Log.txt"
//! allow_duplicate_plates = false
//!
//! [auth]
//! master_secret = "a"   # empty string disables the master secret
//!
//! [rental]
//! min_hours = 3
//! currency_symbol = "RM"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use fleetdesk_core::{DEFAULT_MIN_RENTAL_HOURS, MAX_RENTAL_HOURS};

// =============================================================================
// Storage Settings
// =============================================================================

/// Location and names of the data files.
///
/// The default file names match the files an existing desk already has,
/// so pointing `data_dir` at an old working directory just works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding every data file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_fleet_file")]
    pub fleet_file: String,

    #[serde(default = "default_availability_file")]
    pub availability_file: String,

    #[serde(default = "default_customer_file")]
    pub customer_file: String,

    #[serde(default = "default_credential_file")]
    pub credential_file: String,

    #[serde(default = "default_audit_log_file")]
    pub audit_log_file: String,

    /// Lets the fleet hold two cars with the same plate.
    /// Default: false
    #[serde(default)]
    pub allow_duplicate_plates: bool,
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fleetdesk", "fleetdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_fleet_file() -> String {
    "car rental.txt".to_string()
}

fn default_availability_file() -> String {
    "available.txt".to_string()
}

fn default_customer_file() -> String {
    "Customer.txt".to_string()
}

fn default_credential_file() -> String {
    "UserPass.txt".to_string()
}

fn default_audit_log_file() -> String {
    "Log.txt".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: default_data_dir(),
            fleet_file: default_fleet_file(),
            availability_file: default_availability_file(),
            customer_file: default_customer_file(),
            credential_file: default_credential_file(),
            audit_log_file: default_audit_log_file(),
            allow_duplicate_plates: false,
        }
    }
}

impl StorageSettings {
    /// Default file names rooted at `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        StorageSettings {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn fleet_path(&self) -> PathBuf {
        self.data_dir.join(&self.fleet_file)
    }

    pub fn availability_path(&self) -> PathBuf {
        self.data_dir.join(&self.availability_file)
    }

    pub fn customer_path(&self) -> PathBuf {
        self.data_dir.join(&self.customer_file)
    }

    pub fn credential_path(&self) -> PathBuf {
        self.data_dir.join(&self.credential_file)
    }

    pub fn audit_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.audit_log_file)
    }

    fn file_names(&self) -> [(&'static str, &str); 5] {
        [
            ("fleet_file", &self.fleet_file),
            ("availability_file", &self.availability_file),
            ("customer_file", &self.customer_file),
            ("credential_file", &self.credential_file),
            ("audit_log_file", &self.audit_log_file),
        ]
    }
}

// =============================================================================
// Auth Settings
// =============================================================================

/// Administrator login settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Secret accepted for any administrator id.
    ///
    /// Lets a fresh install (empty credential file) log in to create its
    /// first administrator. An empty string turns it off.
    #[serde(default = "default_master_secret")]
    pub master_secret: String,
}

fn default_master_secret() -> String {
    "a".to_string()
}

impl Default for AuthSettings {
    fn default() -> Self {
        AuthSettings {
            master_secret: default_master_secret(),
        }
    }
}

impl AuthSettings {
    /// The master secret, or `None` when disabled.
    pub fn master_secret(&self) -> Option<&str> {
        Some(self.master_secret.as_str()).filter(|s| !s.is_empty())
    }
}

// =============================================================================
// Rental Settings
// =============================================================================

/// Business rules shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalSettings {
    /// Shortest rental the desk accepts, in hours.
    #[serde(default = "default_min_hours")]
    pub min_hours: u32,

    /// Printed before amounts on receipts and in the audit log.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_min_hours() -> u32 {
    DEFAULT_MIN_RENTAL_HOURS
}

fn default_currency_symbol() -> String {
    "RM".to_string()
}

impl Default for RentalSettings {
    fn default() -> Self {
        RentalSettings {
            min_hours: default_min_hours(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetdeskConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub rental: RentalSettings,
}

impl FleetdeskConfig {
    /// Defaults with every data file under `data_dir`.
    ///
    /// ## Usage
    /// ```rust
    /// use fleetdesk_store::FleetdeskConfig;
    ///
    /// let config = FleetdeskConfig::for_data_dir("/tmp/desk");
    /// assert!(config.storage.fleet_path().ends_with("car rental.txt"));
    /// ```
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        FleetdeskConfig {
            storage: StorageSettings::in_dir(data_dir),
            ..Default::default()
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (fleetdesk.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading fleetdesk config from file");
                let contents =
                    std::fs::read_to_string(&path).map_err(|e| StoreError::storage(&path, e))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::Config("no config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::storage(parent, e))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StoreError::storage(&path, e))?;

        info!(?path, "Fleetdesk config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        for (key, name) in self.storage.file_names() {
            if name.trim().is_empty() {
                return Err(StoreError::Config(format!("storage.{} must not be empty", key)));
            }
            let components: Vec<Component<'_>> = Path::new(name).components().collect();
            if !matches!(components.as_slice(), [Component::Normal(_)]) {
                return Err(StoreError::Config(format!(
                    "storage.{} must be a plain file name, got '{}'",
                    key, name
                )));
            }
        }

        let names = self.storage.file_names();
        for (i, (key, name)) in names.iter().enumerate() {
            if let Some((other, _)) = names[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(StoreError::Config(format!(
                    "storage.{} and storage.{} both point at '{}'",
                    key, other, name
                )));
            }
        }

        if self.rental.min_hours == 0 || self.rental.min_hours > MAX_RENTAL_HOURS {
            return Err(StoreError::Config(format!(
                "rental.min_hours must be between 1 and {}",
                MAX_RENTAL_HOURS
            )));
        }

        if self.auth.master_secret.chars().any(char::is_whitespace) {
            return Err(StoreError::Config(
                "auth.master_secret must not contain whitespace".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("FLEETDESK_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Ok(secret) = std::env::var("FLEETDESK_MASTER_SECRET") {
            debug!("Overriding master secret from environment");
            self.auth.master_secret = secret;
        }

        if let Ok(hours) = std::env::var("FLEETDESK_MIN_HOURS") {
            match hours.parse::<u32>() {
                Ok(h) => self.rental.min_hours = h,
                Err(_) => warn!(value = %hours, "Ignoring non-numeric FLEETDESK_MIN_HOURS"),
            }
        }

        if let Ok(symbol) = std::env::var("FLEETDESK_CURRENCY") {
            self.rental.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "fleetdesk", "fleetdesk")
            .map(|dirs| dirs.config_dir().join("fleetdesk.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FleetdeskConfig::default();
        assert_eq!(config.storage.fleet_file, "car rental.txt");
        assert_eq!(config.storage.availability_file, "available.txt");
        assert_eq!(config.storage.customer_file, "Customer.txt");
        assert_eq!(config.storage.credential_file, "UserPass.txt");
        assert_eq!(config.storage.audit_log_file, "Log.txt");
        assert!(!config.storage.allow_duplicate_plates);
        assert_eq!(config.auth.master_secret(), Some("a"));
        assert_eq!(config.rental.min_hours, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = FleetdeskConfig::for_data_dir("/tmp/desk");
        assert!(config.validate().is_ok());

        config.storage.customer_file = "available.txt".to_string();
        assert!(config.validate().is_err());

        config.storage.customer_file = "sub/Customer.txt".to_string();
        assert!(config.validate().is_err());

        config.storage.customer_file = "..".to_string();
        assert!(config.validate().is_err());

        config.storage.customer_file = "Customer.txt".to_string();
        config.rental.min_hours = 0;
        assert!(config.validate().is_err());

        config.rental.min_hours = 1;
        config.auth.master_secret = String::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.master_secret(), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FleetdeskConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/srv/rental"

            [rental]
            min_hours = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/rental"));
        assert_eq!(config.storage.fleet_file, "car rental.txt");
        assert_eq!(config.rental.min_hours, 6);
        assert_eq!(config.rental.currency_symbol, "RM");
        assert_eq!(config.auth.master_secret, "a");
    }

    #[test]
    fn test_save_and_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("fleetdesk.toml");

        let mut config = FleetdeskConfig::for_data_dir(dir.path());
        config.storage.allow_duplicate_plates = true;
        config.rental.currency_symbol = "MYR".to_string();

        let written = config.save(Some(path.clone())).unwrap();
        assert_eq!(written, path);

        let contents = std::fs::read_to_string(&path).unwrap();
        let reloaded: FleetdeskConfig = toml::from_str(&contents).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_paths_join_data_dir() {
        let storage = StorageSettings::in_dir("/srv/rental");
        assert_eq!(
            storage.fleet_path(),
            PathBuf::from("/srv/rental/car rental.txt")
        );
        assert_eq!(storage.audit_log_path(), PathBuf::from("/srv/rental/Log.txt"));
    }
}
