use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::init_database;
use std::path::Path;

pub fn run(db_path: &Path) -> Result<CmdResult> {
    init_database(db_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "The workout database is {}",
        db_path.display()
    )));
    Ok(result)
}
