//! Crate configuration
//!
//! Loaded from an optional `ticketa.toml` in the working directory plus
//! `TICKETA_*` environment overrides; every field has a default so running
//! with no configuration at all works.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Simulated latency applied to repository operations, modeling the network
/// round-trip the original client faked on top of local storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Delay for list/summary reads, in milliseconds
    pub list_ms: u64,
    /// Delay for single-record reads and all mutations, in milliseconds
    pub mutate_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 250,
            mutate_ms: 200,
        }
    }
}

impl LatencyConfig {
    /// No simulated latency; what tests use
    pub const fn none() -> Self {
        Self {
            list_ms: 0,
            mutate_ms: 0,
        }
    }

    pub const fn list(self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub const fn mutate(self) -> Duration {
        Duration::from_millis(self.mutate_ms)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory for all record stores
    pub data_dir: PathBuf,
    /// Simulated operation latency
    pub latency: LatencyConfig,
    /// Whether to seed sample tickets on first access of an empty store
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            latency: LatencyConfig::default(),
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Load configuration from `ticketa.toml` and the environment, falling
    /// back to defaults for anything unset
    pub fn load_or_default() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("ticketa").required(false))
            .add_source(config::Environment::with_prefix("TICKETA").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ticketa", "ticketa")
        .map_or_else(|| PathBuf::from(".ticketa"), |dirs| dirs.data_dir().to_path_buf())
}
