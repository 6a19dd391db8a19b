//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tramnet.toml";

/// Network configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Path to the network snapshot JSON (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<PathBuf>,

    /// Reject inconsistent snapshots instead of skipping bad records
    #[serde(default)]
    pub strict: bool,

    /// Weight of a line edge before its transition time is known
    #[serde(default = "default_weight")]
    pub default_weight: u32,

    /// Decimals used when rendering distances in kilometres
    #[serde(default = "default_distance_precision")]
    pub distance_precision: usize,

    /// Longest plausible hop between consecutive stops, in kilometres
    #[serde(default = "default_max_hop_km")]
    pub max_hop_km: f64,
}

fn default_weight() -> u32 {
    1
}

fn default_distance_precision() -> usize {
    3
}

fn default_max_hop_km() -> f64 {
    20.0
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network: None,
            strict: false,
            default_weight: default_weight(),
            distance_precision: default_distance_precision(),
            max_hop_km: default_max_hop_km(),
        }
    }
}
