//! # API Facade
//!
//! [`WorkoutApi`] is a thin facade over the command layer and the single
//! entry point a UI should use. One method per user operation, no
//! business logic, no I/O concerns. Generic over
//! [`DataStore`](crate::store::DataStore) so tests can run against
//! `InMemoryStore` while production uses `JsonFileStore`.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

#[derive(Debug)]
pub struct WorkoutApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> WorkoutApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a new exercise built from description words and a rank.
    pub fn add(&mut self, description: &[String], rank: u8) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, description, rank)
    }

    /// The current persisted sequence, with 1-based ids.
    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Mark the exercise at `exercise_id` as done.
    pub fn set_done(&mut self, exercise_id: usize) -> Result<commands::CmdResult> {
        commands::complete::run(&mut self.store, exercise_id)
    }

    /// Remove the exercise at `exercise_id`.
    pub fn remove(&mut self, exercise_id: usize) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, exercise_id)
    }

    /// Remove every exercise.
    pub fn remove_all(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, ListedExercise, MessageLevel};
