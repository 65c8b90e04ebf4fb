use crate::commands::{CmdResult, ListedExercise};
use crate::error::Result;
use crate::store::DataStore;

/// Return the persisted sequence verbatim, each record paired with its
/// current 1-based id. Read failures propagate; a missing database and a
/// corrupt one stay distinguishable for the caller.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let exercises = store.read_exercises()?;
    let listed = exercises
        .into_iter()
        .enumerate()
        .map(|(i, exercise)| ListedExercise {
            id: i + 1,
            exercise,
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
