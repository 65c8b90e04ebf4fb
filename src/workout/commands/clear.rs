use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Replace the whole collection with an empty one. Deliberately skips
/// the read: clearing must still work when the database is corrupt.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    store.write_exercises(&[])?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All exercises were removed"));
    Ok(result)
}
