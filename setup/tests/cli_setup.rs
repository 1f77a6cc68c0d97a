//! CLI tests for the setup binary.
//!
//! Spawns the real binary against temp workspaces and verifies exit codes,
//! console output, and filesystem effects. Scenarios are chosen so no test
//! ever reaches a real package manager.

use std::fs;
use std::process::Command;

use setup::exit_codes;

#[test]
fn missing_interpreter_fails_without_touching_the_workspace() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("setup.toml"),
        "python_candidates = [\"definitely-not-a-python-interpreter\"]\n",
    )
    .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_setup"))
        .current_dir(temp.path())
        .output()
        .expect("run setup");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No Python interpreter found"));
    assert!(!temp.path().join("your_documents").exists());
    assert!(!temp.path().join("outputs").exists());
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("setup.toml"), "install_timeout_secs = 0\n").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_setup"))
        .current_dir(temp.path())
        .output()
        .expect("run setup");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("install_timeout_secs"));
}

#[test]
fn explicit_root_flag_targets_that_workspace() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("setup.toml"),
        "python_candidates = [\"definitely-not-a-python-interpreter\"]\n",
    )
    .expect("write config");

    // Run from elsewhere; the config under --root must still be honored.
    let status = Command::new(env!("CARGO_BIN_EXE_setup"))
        .arg("--root")
        .arg(temp.path())
        .status()
        .expect("run setup");

    assert_eq!(status.code(), Some(exit_codes::FAILED));
}
