use crate::api::WorkoutApi;
use crate::config::{self, WorkoutConfig};
use crate::error::{Result, WorkoutError};
use crate::store::fs::JsonFileStore;
use std::path::PathBuf;

#[derive(Debug)]
pub struct WorkoutContext {
    pub api: WorkoutApi<JsonFileStore>,
    pub db_path: PathBuf,
}

/// Resolve the database path and build the production API around it.
///
/// Resolution order: an explicit `--db-path` override first, then the
/// path recorded in the config file. Either way the database file must
/// already exist; `workout init` is the only thing that creates it.
pub fn initialize(db_override: Option<PathBuf>) -> Result<WorkoutContext> {
    let db_path = match db_override {
        Some(path) => path,
        None => WorkoutConfig::load(config::config_dir()?)?.database,
    };

    if !db_path.exists() {
        return Err(WorkoutError::Config(format!(
            "Database not found at {}. Run 'workout init' first",
            db_path.display()
        )));
    }

    let api = WorkoutApi::new(JsonFileStore::new(&db_path));
    Ok(WorkoutContext { api, db_path })
}
