use crate::commands::{helpers, CmdMessage, CmdResult, ListedExercise};
use crate::error::Result;
use crate::store::DataStore;

/// Mark the exercise at the given 1-based id as done and write the
/// sequence back. An out-of-range id leaves the store untouched.
pub fn run<S: DataStore>(store: &mut S, id: usize) -> Result<CmdResult> {
    let mut exercises = store.read_exercises()?;
    let pos = helpers::position_of(&exercises, id)?;
    exercises[pos].done = true;
    let exercise = exercises[pos].clone();
    store.write_exercises(&exercises)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exercise {} \"{}\" completed",
        id, exercise.description
    )));
    result.affected.push(ListedExercise { id, exercise });
    Ok(result)
}
