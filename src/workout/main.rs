use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use workout::api::{CmdMessage, ListedExercise, MessageLevel};
use workout::commands;
use workout::config::{self, WorkoutConfig};
use workout::error::{Result, WorkoutError};
use workout::init::{initialize, WorkoutContext};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Init runs before context setup: it is the command that creates
    // what initialize() requires to exist.
    if let Commands::Init = cli.command {
        return handle_init(cli.db_path);
    }

    let mut ctx = initialize(cli.db_path)?;
    match cli.command {
        Commands::Add { description, rank } => handle_add(&mut ctx, &description, rank),
        Commands::List => handle_list(&ctx),
        Commands::Complete { exercise_id } => handle_complete(&mut ctx, exercise_id),
        Commands::Remove { exercise_id, force } => handle_remove(&mut ctx, exercise_id, force),
        Commands::Clear { force } => handle_clear(&mut ctx, force),
        Commands::Init => unreachable!("handled before context setup"),
    }
}

fn handle_init(db_override: Option<PathBuf>) -> Result<()> {
    let db_path = match db_override {
        Some(path) => path,
        None => config::default_db_path()?,
    };

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).map_err(WorkoutError::DbWrite)?;
    }
    WorkoutConfig::new(db_path.clone()).save(config::config_dir()?)?;

    let result = commands::init::run(&db_path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut WorkoutContext, description: &[String], rank: u8) -> Result<()> {
    let result = ctx.api.add(description, rank)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &WorkoutContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_exercises(&result.listed);
    Ok(())
}

fn handle_complete(ctx: &mut WorkoutContext, exercise_id: usize) -> Result<()> {
    let result = ctx.api.set_done(exercise_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut WorkoutContext, exercise_id: usize, force: bool) -> Result<()> {
    if !force {
        let listed = ctx.api.list()?.listed;
        let entry = listed
            .iter()
            .find(|le| le.id == exercise_id)
            .ok_or(WorkoutError::InvalidId(exercise_id))?;
        let prompt = format!(
            "Delete exercise {}: {}?",
            exercise_id, entry.exercise.description
        );
        if !confirm(&prompt) {
            println!("Operation cancelled");
            return Ok(());
        }
    }

    let result = ctx.api.remove(exercise_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut WorkoutContext, force: bool) -> Result<()> {
    if !force && !confirm("Delete all exercises?") {
        println!("Operation cancelled");
        return Ok(());
    }

    let result = ctx.api.remove_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
// ID, Rank and Done column widths.
const FIXED_WIDTH: usize = 6 + 8 + 7;

fn print_exercises(listed: &[ListedExercise]) {
    if listed.is_empty() {
        println!("No exercises in the workout list yet.");
        return;
    }

    let header = format!("{:<6}{:<8}{:<7}{}", "ID", "Rank", "Done", "Description");

    println!();
    println!("{}", "Exercise List:".blue().bold());
    println!();
    println!("{}", header.blue().bold());
    println!("{}", "-".repeat(header.width()).blue());

    let available = LINE_WIDTH.saturating_sub(FIXED_WIDTH);
    for le in listed {
        let done = if le.exercise.done { "yes" } else { "no" };
        let description = truncate_to_width(&le.exercise.description, available);
        let row = format!(
            "{:<6}{:<8}{:<7}{}",
            le.id,
            format!("({})", le.exercise.rank),
            done,
            description
        );
        println!("{}", row.blue());
    }
    println!();
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
