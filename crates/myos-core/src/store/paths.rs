//! Store directory layout and discovery

use std::path::{Path, PathBuf};

use crate::error::{MyosError, Result};

/// Hidden store directory created under a project root
pub const DEFAULT_STORE_DIR: &str = ".myos";

/// Store configuration file
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `start` looking for a `.myos/` directory
pub fn discover_store(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(DEFAULT_STORE_DIR);
        if candidate.is_dir() {
            tracing::debug!(store = %candidate.display(), "discovered store");
            return Ok(candidate);
        }
    }
    Err(MyosError::StoreNotFound {
        search_root: start.to_path_buf(),
    })
}
