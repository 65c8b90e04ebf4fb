use serde::{Deserialize, Serialize};

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 3;
pub const DEFAULT_RANK: u8 = 2;

/// A single workout entry.
///
/// The serialized field names (`Description`, `Rank`, `Done`) are the
/// on-disk format and must not change. Records carry no identifier:
/// an exercise is addressed by its 1-based position in the persisted
/// sequence, and that position shifts when earlier records are removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exercise {
    pub description: String,
    pub rank: u8,
    pub done: bool,
}

impl Exercise {
    /// Build a record from the words of a description.
    ///
    /// Words are joined with single spaces and the description is
    /// normalized to end with a period. Rank bounds are enforced at the
    /// CLI boundary, not here.
    pub fn new(description_parts: &[String], rank: u8) -> Self {
        let mut description = description_parts.join(" ");
        if !description.ends_with('.') {
            description.push('.');
        }
        Self {
            description,
            rank,
            done: false,
        }
    }
}
