//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the command layer and
//! persistence. Every operation is whole-collection: the store reads or
//! replaces the entire ordered sequence of exercises, never a slice of
//! it. That keeps the contract trivial at the record volumes this tool
//! sees (tens to low hundreds of entries).
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one JSON array per file
//! - [`memory::InMemoryStore`]: in-memory storage for tests

use crate::error::Result;
use crate::model::Exercise;

pub mod fs;
pub mod memory;

/// Abstract interface for exercise storage.
pub trait DataStore {
    /// Read the full persisted sequence, in insertion order.
    fn read_exercises(&self) -> Result<Vec<Exercise>>;

    /// Replace the full persisted sequence.
    fn write_exercises(&mut self, exercises: &[Exercise]) -> Result<()>;
}
