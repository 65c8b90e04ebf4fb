use crate::commands::{CmdMessage, CmdResult, ListedExercise};
use crate::error::Result;
use crate::model::Exercise;
use crate::store::DataStore;

/// Append a new exercise to the end of the sequence.
///
/// If the pre-write read fails, the error propagates and nothing is
/// returned; a record that was never persisted is never reported back.
pub fn run<S: DataStore>(store: &mut S, description: &[String], rank: u8) -> Result<CmdResult> {
    let exercise = Exercise::new(description, rank);
    let mut exercises = store.read_exercises()?;
    exercises.push(exercise.clone());
    store.write_exercises(&exercises)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" as a rank {} exercise",
        exercise.description, rank
    )));
    result.affected.push(ListedExercise {
        id: exercises.len(),
        exercise,
    });
    Ok(result)
}
