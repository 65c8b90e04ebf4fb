use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Exercise id {0} is out of range")]
    InvalidId(usize),

    #[error("Failed to read the workout database: {0}")]
    DbRead(#[source] std::io::Error),

    #[error("Failed to write the workout database: {0}")]
    DbWrite(#[source] std::io::Error),

    #[error("Workout database is not valid JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
