use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_last_mile"))
        .args(args)
        .env("RUST_LOG", "warn,last_mile=info")
        .output()
        .expect("Failed to execute the game binary")
}

/// Test that an autopilot session runs to completion headless
#[test]
fn test_headless_autopilot_runs() {
    let output = run_binary(&["--autopilot", "--seed", "7", "--quiet", "--ticks", "3000"]);

    assert!(
        output.status.success(),
        "Session failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SESSION COMPLETE"),
        "Session did not complete properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Orders completed:"), "Missing order count");
    assert!(stderr.contains("Money earned:"), "Missing money");
    assert!(stderr.contains("Rank:"), "Missing rank");
    assert!(stderr.contains("Shift started"), "Missing start log");
}

/// Test that the idle clock ends the shift
#[test]
fn test_idle_session_finishes() {
    let output = run_binary(&["--quiet", "--ticks", "700"]);
    assert!(output.status.success(), "Session failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Status: Finished"), "stderr: {}", stderr);
    assert!(stderr.contains("Rank: Trainee"), "stderr: {}", stderr);
}

/// Test that the console map is printed outside quiet mode
#[test]
fn test_map_is_drawn() {
    let output = run_binary(&["--ticks", "10"]);
    assert!(output.status.success(), "Session failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Warehouse Floor ==="));
    assert!(stdout.contains("=== Final State ==="));
}

/// Test that a scripted delivery is replayed
#[test]
fn test_script_delivery() {
    let output = run_binary(&[
        "--quiet",
        "--ticks",
        "5",
        "--script",
        "U U A W300 U A W300 R D R A W300 U U W300",
    ]);
    assert!(output.status.success(), "Session failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Orders completed: 1"), "stderr: {}", stderr);
    assert!(stderr.contains("Money earned: 2100"), "stderr: {}", stderr);
}

/// Test that a malformed script is reported
#[test]
fn test_bad_script_fails() {
    let output = run_binary(&["--script", "U Q"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command 'Q'"), "stderr: {}", stderr);
}
