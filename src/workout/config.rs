use crate::error::{Result, WorkoutError};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DB_FILENAME: &str = "workouts.json";

/// Overrides the config directory. Keeps tests and scripted use out of
/// the real home directory.
pub const CONFIG_DIR_ENV: &str = "WORKOUT_CONFIG_DIR";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("com", "workout", "workout"));

fn project_dirs() -> Result<&'static ProjectDirs> {
    PROJECT_DIRS.as_ref().ok_or_else(|| {
        WorkoutError::Config("Could not determine the user config directory".to_string())
    })
}

/// Directory holding `config.json`, honoring `$WORKOUT_CONFIG_DIR`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Where `workout init` puts the database when no path is given.
pub fn default_db_path() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir).join(DB_FILENAME));
    }
    Ok(project_dirs()?.data_dir().join(DB_FILENAME))
}

/// Configuration for workout, stored as `config.json` in the user
/// config directory. Currently a single field: the database path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutConfig {
    pub database: PathBuf,
}

impl WorkoutConfig {
    pub fn new(database: PathBuf) -> Self {
        Self { database }
    }

    /// Load the config from the given directory. A missing file is a
    /// `Config` error directing the user to `workout init`.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Err(WorkoutError::Config(
                "Config file not found. Run 'workout init' first".to_string(),
            ));
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            WorkoutError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;
        let config: WorkoutConfig = serde_json::from_str(&content).map_err(|e| {
            WorkoutError::Config(format!("Invalid config file {}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save the config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| {
                WorkoutError::Config(format!(
                    "Failed to create {}: {}",
                    config_dir.display(),
                    e
                ))
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| WorkoutError::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&config_path, content).map_err(|e| {
            WorkoutError::Config(format!("Failed to write {}: {}", config_path.display(), e))
        })?;
        Ok(())
    }
}
