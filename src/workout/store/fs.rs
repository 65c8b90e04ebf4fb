use super::DataStore;
use crate::error::{Result, WorkoutError};
use crate::model::Exercise;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store. The whole collection is one JSON array; every
/// write replaces the file.
#[derive(Debug)]
pub struct JsonFileStore {
    db_path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl DataStore for JsonFileStore {
    fn read_exercises(&self) -> Result<Vec<Exercise>> {
        let content = fs::read_to_string(&self.db_path).map_err(WorkoutError::DbRead)?;
        let exercises: Vec<Exercise> = serde_json::from_str(&content)?;
        Ok(exercises)
    }

    fn write_exercises(&mut self, exercises: &[Exercise]) -> Result<()> {
        // 4-space indentation, the array shape this tool has always written.
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        exercises.serialize(&mut ser)?;

        // Write to a sibling temp file and rename over the target, so a
        // crash mid-write cannot leave a truncated database behind.
        let tmp_path = self.db_path.with_extension("json.tmp");
        fs::write(&tmp_path, &buf).map_err(WorkoutError::DbWrite)?;
        fs::rename(&tmp_path, &self.db_path).map_err(WorkoutError::DbWrite)?;
        Ok(())
    }
}

/// Create the database file holding an empty collection. Truncates any
/// existing file at the path.
pub fn init_database(db_path: &Path) -> Result<()> {
    fs::write(db_path, "[]").map_err(WorkoutError::DbWrite)
}
