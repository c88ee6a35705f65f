use std::path::Path;

use assert_cmd::Command;
use jiff::{ToSpan, Zoned};
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn sakura_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sakura").expect("Failed to find sakura binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// A day inside the date window
fn next_week() -> String {
    Zoned::now().date().saturating_add(7.days()).to_string()
}

/// Saves an invitation through `respond` and returns its ID
fn respond(db_path: &Path, food: &str) -> String {
    let output = sakura_cmd(db_path)
        .args([
            "respond",
            "--date",
            next_week().as_str(),
            "--date-type",
            "dinner",
            "--specifics",
            "rooftop",
            "--food",
            food,
            "--after",
            "walk",
        ])
        .output()
        .expect("run sakura");
    assert!(output.status.success(), "respond failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("- Invitation ID: "))
        .expect("summary names the invitation ID")
        .trim()
        .to_string()
}

#[test]
fn test_cli_respond_prints_summary() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sakura_cmd(&db_path)
        .args([
            "respond",
            "--date",
            next_week().as_str(),
            "--date-type",
            "concert",
            "--specifics",
            "jazz",
            "--food",
            "thai",
            "--after",
            "drinks",
            "--suggestions",
            "Somewhere quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date Invitation Response:"))
        .stdout(predicate::str::contains("- Date Type: Concert/Show - Jazz"))
        .stdout(predicate::str::contains("- After Date Activity: Drinks at a bar"))
        .stdout(predicate::str::contains("- Additional Suggestions: Somewhere quiet"));
}

#[test]
fn test_cli_respond_rejects_date_outside_window() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let today = Zoned::now().date().to_string();

    sakura_cmd(&db_path)
        .args([
            "respond",
            "--date",
            today.as_str(),
            "--date-type",
            "movie",
            "--food",
            "indian",
            "--after",
            "home",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pick a day between"));

    sakura_cmd(&db_path)
        .args(["responses", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved invitations found"));
}

#[test]
fn test_cli_respond_rejects_unknown_options() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let date = next_week();

    sakura_cmd(&db_path)
        .args([
            "respond",
            "--date",
            date.as_str(),
            "--date-type",
            "skydiving",
            "--food",
            "thai",
            "--after",
            "walk",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown date type 'skydiving'"));

    sakura_cmd(&db_path)
        .args([
            "respond",
            "--date",
            date.as_str(),
            "--date-type",
            "movie",
            "--specifics",
            "rooftop",
            "--food",
            "thai",
            "--after",
            "walk",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not belong to the chosen date type"));
}

#[test]
fn test_cli_list_empty_responses() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sakura_cmd(&db_path)
        .args(["responses", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved invitations found"));
}

#[test]
fn test_cli_list_and_show_saved_responses() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let first = respond(&db_path, "italian");
    let second = respond(&db_path, "mexican");

    sakura_cmd(&db_path)
        .args(["responses", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 invitations saved on this device"))
        .stdout(predicate::str::contains(format!("- Invitation {first}")))
        .stdout(predicate::str::contains(format!("- Invitation {second}")));

    sakura_cmd(&db_path)
        .args(["responses", "show", second.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# Invitation {second}")))
        .stdout(predicate::str::contains("**Date Type:** Dinner Date - Rooftop Restaurant"))
        .stdout(predicate::str::contains("**Food:** With Mexican food"));
}

#[test]
fn test_cli_show_unknown_response_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sakura_cmd(&db_path)
        .args(["responses", "show", "zzzzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No invitation found with ID zzzzzzzz"));
}

#[test]
fn test_cli_delete_response() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let keep = respond(&db_path, "thai");
    let gone = respond(&db_path, "chinese");

    sakura_cmd(&db_path)
        .args(["responses", "delete", gone.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Success: Deleted invitation {gone}")));

    sakura_cmd(&db_path)
        .args(["responses", "show", gone.as_str()])
        .assert()
        .failure();

    sakura_cmd(&db_path)
        .args(["responses", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 invitation saved on this device"))
        .stdout(predicate::str::contains(format!("- Invitation {keep}")));
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    respond(&db_path, "american");
    respond(&db_path, "vegetarian");

    sakura_cmd(&db_path)
        .args(["responses", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    sakura_cmd(&db_path)
        .args(["responses", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 saved invitations"));

    sakura_cmd(&db_path)
        .args(["responses", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved invitations found"));
}

#[test]
fn test_cli_export_response() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let export_path = temp_dir.path().join("response.txt");
    let id = respond(&db_path, "japanese");

    sakura_cmd(&db_path)
        .args(["responses", "export", id.as_str(), "--output"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Saved responses to"));

    let exported = std::fs::read_to_string(&export_path).expect("read export");
    assert!(exported.starts_with("Date Invitation Response:\n"));
    assert!(exported.contains(&format!("- Invitation ID: {id}")));
    assert!(exported.contains("- Food Preference: Japanese"));
    assert!(!exported.contains("Additional Suggestions"));
}

#[test]
fn test_cli_options_lists_catalog() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sakura_cmd(&db_path)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee Date"))
        .stdout(predicate::str::contains("Rooftop Restaurant `rooftop`"))
        .stdout(predicate::str::contains("Vegetarian `vegetarian`"))
        .stdout(predicate::str::contains("Head home `home`"));
}

#[test]
fn test_cli_interactive_invite() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let script = format!("\ny\n{}\noutdoor\npicnic\nindian\ndessert\n\n\n", next_week());

    sakura_cmd(&db_path)
        .arg("invite")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Will you go on a date with me?"))
        .stdout(predicate::str::contains("- Date Type: Outdoor Activity - Picnic in the Park"))
        .stdout(predicate::str::contains("- After Date Activity: Dessert somewhere"));

    sakura_cmd(&db_path)
        .args(["responses", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 invitation saved on this device"));
}

#[test]
fn test_cli_interactive_invite_stops_on_closed_input() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    sakura_cmd(&db_path)
        .write_stdin("\nn\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended"));
}
