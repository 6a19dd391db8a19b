//! Network configuration for tramnet
//!
//! Configuration is read from a TOML file (`tramnet.toml` by default) and
//! passed explicitly to whatever builds the network.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TramError};
use crate::network::NetworkSnapshot;

pub use types::{NetworkConfig, CONFIG_FILE_NAME};

/// Where a network comes from
#[derive(Debug, Clone)]
pub enum NetworkSource {
    /// A snapshot JSON file on disk
    Path(PathBuf),
    /// A snapshot that is already in memory
    Snapshot(NetworkSnapshot),
}

impl NetworkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NetworkConfig = toml::from_str(&content)?;

        if config.default_weight == 0 {
            tracing::warn!(
                path = %path.display(),
                "default_weight = 0 makes untimed hops free in time routing"
            );
        }

        Ok(config)
    }

    /// Load `tramnet.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TramError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The configured snapshot as a source, resolving relative paths against `base`
    pub fn source(&self, base: &Path) -> Option<NetworkSource> {
        self.network.as_ref().map(|path| {
            if path.is_absolute() {
                NetworkSource::Path(path.clone())
            } else {
                NetworkSource::Path(base.join(path))
            }
        })
    }
}
