use crate::error::{Result, WorkoutError};
use crate::model::Exercise;

/// Bounds-check a 1-based exercise id against the sequence and return
/// the vector position. Any id outside `[1, len]` is rejected before
/// anything is mutated.
pub fn position_of(exercises: &[Exercise], id: usize) -> Result<usize> {
    if id == 0 || id > exercises.len() {
        return Err(WorkoutError::InvalidId(id));
    }
    Ok(id - 1)
}
