use crate::commands::{helpers, CmdMessage, CmdResult, ListedExercise};
use crate::error::Result;
use crate::store::DataStore;

/// Remove the exercise at the given 1-based id and write the sequence
/// back. Every later record shifts down by one id.
pub fn run<S: DataStore>(store: &mut S, id: usize) -> Result<CmdResult> {
    let mut exercises = store.read_exercises()?;
    let pos = helpers::position_of(&exercises, id)?;
    let exercise = exercises.remove(pos);
    store.write_exercises(&exercises)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exercise {} \"{}\" was removed",
        id, exercise.description
    )));
    result.affected.push(ListedExercise { id, exercise });
    Ok(result)
}
