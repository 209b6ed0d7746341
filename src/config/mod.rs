// Configuration
// Optional TOML file tuning storage, photo intake and day counting

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::display::DayCounting;
use crate::services::intake::{IntakeLimits, DEFAULT_MAX_BYTES, DEFAULT_MAX_DIMENSION};
use crate::services::storage::DEFAULT_QUOTA_BYTES;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "BABY_DDAY_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORAGE_FILE_NAME: &str = "dday.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file backing the settings store.
    pub storage_path: PathBuf,
    pub storage_quota_bytes: usize,
    pub photo_max_bytes: usize,
    pub photo_max_dimension: u32,
    pub day_counting: DayCounting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            storage_quota_bytes: DEFAULT_QUOTA_BYTES,
            photo_max_bytes: DEFAULT_MAX_BYTES,
            photo_max_dimension: DEFAULT_MAX_DIMENSION,
            day_counting: DayCounting::default(),
        }
    }
}

impl AppConfig {
    /// Parses a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Loads the config from its resolved location, never failing: problems
    /// are logged and the defaults are used.
    pub fn load_or_default() -> Self {
        let path = resolve_config_path();
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Using configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Failed to load configuration: {err:?}, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn intake_limits(&self) -> IntakeLimits {
        IntakeLimits {
            max_bytes: self.photo_max_bytes,
            max_dimension: self.photo_max_dimension,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "BabyDday", "BabyDday")
}

/// `BABY_DDAY_CONFIG` if set, else `config.toml` in the platform config dir.
pub fn resolve_config_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Some(dirs) = project_dirs() {
        dirs.config_dir().join(CONFIG_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for config");
        PathBuf::from(CONFIG_FILE_NAME)
    }
}

fn default_storage_path() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.data_dir().join(STORAGE_FILE_NAME)
    } else {
        PathBuf::from(STORAGE_FILE_NAME)
    }
}
