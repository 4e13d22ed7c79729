//! # Configuration
//!
//! Settings live in an optional `config.yaml` inside the data directory:
//!
//! ```yaml
//! default_shops: ["50嵐", "迷客夏"]
//! log_filter: "drink_tracker=debug"
//! ```
//!
//! The data directory itself defaults to `<platform data dir>/drink-tracker`
//! and can be redirected with the `DRINK_TRACKER_HOME` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DATA_DIR_ENV: &str = "DRINK_TRACKER_HOME";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Shops offered before the user has logged anything
pub const DEFAULT_SHOPS: [&str; 4] = ["50嵐", "一沐日", "五桐號", "迷客夏"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Directory holding the JSON store
    pub data_directory: PathBuf,
    /// Shop catalog used when nothing has been persisted yet
    pub default_shops: Vec<String>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            default_shops: DEFAULT_SHOPS.iter().map(|s| s.to_string()).collect(),
            log_filter: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration for the data directory named by the environment
    pub fn load() -> Result<Self> {
        Self::load_from(resolve_data_directory(std::env::var_os(DATA_DIR_ENV)))
    }

    /// Load configuration from `<data_directory>/config.yaml`, falling back to
    /// defaults when the file does not exist.
    pub fn load_from<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let data_directory = data_directory.as_ref().to_path_buf();
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: TrackerConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Malformed config at {}", config_path.display()))?;
            debug!("Loaded config from {:?}", config_path);
            config
        } else {
            debug!("No config file at {:?}, using defaults", config_path);
            TrackerConfig::default()
        };

        // The directory the file was found in always wins over its contents
        config.data_directory = data_directory;
        Ok(config)
    }
}

/// Data directory from the value of `DRINK_TRACKER_HOME`, if it was set
fn resolve_data_directory(env_value: Option<OsString>) -> PathBuf {
    match env_value {
        Some(dir) if !dir.is_empty() => {
            info!("{} set, using data directory {:?}", DATA_DIR_ENV, dir);
            PathBuf::from(dir)
        }
        _ => default_data_directory(),
    }
}

fn default_data_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drink-tracker")
}
