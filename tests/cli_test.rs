use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use workout::config::CONFIG_DIR_ENV;

fn workout_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("workout").unwrap();
    cmd.env(CONFIG_DIR_ENV, config_dir);
    cmd
}

#[test]
fn test_init_creates_config_and_database() {
    let temp = TempDir::new().unwrap();

    workout_cmd(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("The workout database is"));

    assert!(temp.path().join("config.json").exists());
    let db = fs::read_to_string(temp.path().join("workouts.json")).unwrap();
    assert_eq!(db, "[]");
}

#[test]
fn test_add_then_list_shows_the_exercise() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();

    workout_cmd(temp.path())
        .args(["add", "Bench", "Press", "--rank", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bench Press."));

    workout_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise List:"))
        .stdout(predicate::str::contains("Bench Press."))
        .stdout(predicate::str::contains("(1)"));
}

#[test]
fn test_add_normalizes_description_with_a_period() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();

    workout_cmd(temp.path())
        .args(["add", "Squat"])
        .assert()
        .success();

    let db = fs::read_to_string(temp.path().join("workouts.json")).unwrap();
    assert!(db.contains("\"Squat.\""));
}

#[test]
fn test_complete_marks_the_exercise_done() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();
    workout_cmd(temp.path())
        .args(["add", "Plank"])
        .assert()
        .success();

    workout_cmd(temp.path())
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"));

    workout_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"));
}

#[test]
fn test_remove_with_force_shifts_ids() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();
    workout_cmd(temp.path())
        .args(["add", "First"])
        .assert()
        .success();
    workout_cmd(temp.path())
        .args(["add", "Second"])
        .assert()
        .success();

    workout_cmd(temp.path())
        .args(["remove", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was removed"));

    workout_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Second."))
        .stdout(predicate::str::contains("First.").not());
}

#[test]
fn test_clear_with_force_empties_the_list() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();
    workout_cmd(temp.path())
        .args(["add", "Lunges"])
        .assert()
        .success();

    workout_cmd(temp.path())
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All exercises were removed"));

    workout_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises"));
}

#[test]
fn test_commands_fail_before_init() {
    let temp = TempDir::new().unwrap();

    workout_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("workout init"));
}

#[test]
fn test_out_of_range_id_fails_with_a_nonzero_exit() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();

    workout_cmd(temp.path())
        .args(["complete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_rank_outside_the_domain_is_rejected() {
    let temp = TempDir::new().unwrap();
    workout_cmd(temp.path()).arg("init").assert().success();

    workout_cmd(temp.path())
        .args(["add", "Sprint", "--rank", "5"])
        .assert()
        .failure();
}

#[test]
fn test_db_path_override_bypasses_the_config() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("elsewhere.json");
    fs::write(&db_path, "[]").unwrap();

    // No init: the override points straight at an existing database.
    workout_cmd(temp.path())
        .args(["add", "Rowing", "--db-path"])
        .arg(&db_path)
        .assert()
        .success();

    let db = fs::read_to_string(&db_path).unwrap();
    assert!(db.contains("\"Rowing.\""));
}

#[test]
fn test_corrupt_database_is_reported_distinctly() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("workouts.json");
    fs::write(&db_path, "{ not an array").unwrap();

    workout_cmd(temp.path())
        .args(["list", "--db-path"])
        .arg(&db_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
