//! End-to-end tests: scripted input through a session.

use std::io::Cursor;
use std::io::Write as _;
use timetravel_games::{AppConfig, DisplayConfig, OutputFormat, Session};

fn run(script: &str, format: OutputFormat) -> String {
    let mut session = Session::new(DisplayConfig::default(), format, Vec::new());
    session.run(Cursor::new(script)).expect("session runs");
    String::from_utf8(session.into_output()).expect("utf-8 output")
}

#[test]
fn test_scripted_win() {
    let output = run("0\n3\n1\n4\n2\n", OutputFormat::Text);

    assert!(output.starts_with("Type `help` for commands."));
    assert!(output.contains("[X]|[X]|[X]"));
    assert!(output.trim_end().ends_with("> Go to move #5 - X: (0, 2)"));
    assert!(output.contains("Winner: X"));
}

#[test]
fn test_move_after_win_is_ignored() {
    let output = run("0\n3\n1\n4\n2\n8\n", OutputFormat::Text);
    assert!(output.contains("! Ignored: Game is already over: Player X wins"));
    assert!(!output.contains("Go to move #6"));
}

#[test]
fn test_branching_over_jump() {
    let output = run("0\n1\n2\njump 1\n4\n", OutputFormat::Text);
    let last_frame = output.rsplit("Go to game start").next().unwrap();

    assert!(last_frame.contains("Go to move #1 - X: (0, 0)"));
    assert!(last_frame.contains("> Go to move #2 - O: (1, 1)"));
    assert!(!last_frame.contains("Go to move #3"));
}

#[test]
fn test_bad_input_keeps_playing() {
    let output = run("fly\njump 9\n\n4\nquit\n5\n", OutputFormat::Text);

    assert!(output.contains("! Unknown command \"fly\""));
    assert!(output.contains("! Step 9 is out of range (history has 1 entries)"));
    assert!(output.contains("Go to move #1 - X: (1, 1)"));
    // Nothing after quit is read.
    assert!(!output.contains("Go to move #2"));
}

#[test]
fn test_json_frames() {
    let output = run("4\ntoggle\n4\n", OutputFormat::Json);
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).expect("every line is JSON"))
        .collect();

    // Initial frame, move, toggle, notice, frame after the ignored move.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1]["status_text"], "Next player: O");
    assert_eq!(lines[2]["reverse_display"], true);
    assert_eq!(lines[2]["move_list"][0]["step"], 1);
    assert!(lines[3]["notice"].as_str().unwrap().contains("occupied"));
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[display]\ncell_numbers = false\nhighlight = [\"<\", \">\"]\n\n[log]\nfilter = \"debug\""
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert!(!config.display.cell_numbers);
    assert_eq!(config.log.filter, "debug");

    let mut session = Session::new(config.display, OutputFormat::Text, Vec::new());
    session.run(Cursor::new("0\n3\n1\n4\n2\n")).unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("<X>|<X>|<X>"));
    assert!(output.contains(" O | O | . "));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Cannot read"));
}
