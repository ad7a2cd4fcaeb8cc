//! Runs the `tictactoe` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

fn tictactoe(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(["--config", "absent.toml"])
        .args(args)
        .output()
        .expect("binary runs")
}

#[test]
fn test_replay_json_on_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = tictactoe(
        dir.path(),
        &["replay", "--moves", "0,3,1,4,2,8", "--descending", "--json"],
    );
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON report");
    assert_eq!(json["view"]["status"]["Won"], "X");
    assert_eq!(json["view"]["sort_label"], "Sort Ascending");
    assert_eq!(json["view"]["moves"][0]["label"], 5);
    assert_eq!(json["ignored"][0][0], 8);
    assert_eq!(json["ignored"][0][1], "GameOver");
}

#[test]
fn test_replay_text_on_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = tictactoe(dir.path(), &["replay", "--moves", "0,3,1,4,2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("win by X [0,1,2]"));
    assert!(stdout.contains("> Go to move # 5 (3,1)"));
}

#[test]
fn test_replay_bad_jump_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = tictactoe(dir.path(), &["replay", "--moves", "0", "--jump", "5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Step 5 is out of range (history has 2 snapshots)"));
}
