use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workout::model::{DEFAULT_RANK, MAX_RANK, MIN_RANK};

#[derive(Parser, Debug)]
#[command(name = "workout", version)]
#[command(about = "Track workout exercises from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialise the config file and the exercise database.
    /// The global --db-path picks where the database lives; the default
    /// is the user data directory.
    Init,

    /// Add a new exercise with a description
    #[command(alias = "a")]
    Add {
        /// Words of the description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Rank of the exercise (1-3)
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_RANK,
            value_parser = clap::value_parser!(u8).range(MIN_RANK as i64..=MAX_RANK as i64)
        )]
        rank: u8,
    },

    /// List all exercises
    #[command(alias = "ls")]
    List,

    /// Mark an exercise as done using its id
    Complete {
        /// 1-based id shown by 'workout list'
        exercise_id: usize,
    },

    /// Remove an exercise using its id
    #[command(alias = "rm")]
    Remove {
        /// 1-based id shown by 'workout list'
        exercise_id: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all exercises
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
