use super::DataStore;
use crate::error::Result;
use crate::model::Exercise;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    exercises: Vec<Exercise>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }
}

impl DataStore for InMemoryStore {
    fn read_exercises(&self) -> Result<Vec<Exercise>> {
        Ok(self.exercises.clone())
    }

    fn write_exercises(&mut self, exercises: &[Exercise]) -> Result<()> {
        self.exercises = exercises.to_vec();
        Ok(())
    }
}
