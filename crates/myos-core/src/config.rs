//! Store configuration for myos
//!
//! Configuration is stored in `.myos/config.toml`. A missing file or missing
//! keys fall back to defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{MyosError, Result};

pub use types::{BackendPreference, DigestConfig, StoreConfig, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            tracing::warn!(
                found = config.version,
                supported = STORE_FORMAT_VERSION,
                "store was written by a newer version"
            );
        }

        Ok(config)
    }

    /// Load if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MyosError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
