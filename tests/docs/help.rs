//! Help documentation and CLI flag tests.
//!
//! These tests verify that:
//! - CLI help text is complete and accurate
//! - Documented flags and subcommands are accepted
//! - Error messages match documentation
//!
//! Run with:
//!   cargo test --test docs

use std::process::{Command, Stdio};

fn li3(args: &[&str]) -> std::io::Result<std::process::Output> {
    Command::new(env!("CARGO_BIN_EXE_li3"))
        .args(args)
        .env_remove("LI3_CONSOLE_CONFIG")
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
}

// =============================================================================
// CLI Help Tests
// =============================================================================

/// Test that --help flag produces output.
#[test]
fn test_help_flag_works() {
    match li3(&["--help"]) {
        Ok(out) => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            assert!(out.status.success(), "--help should exit 0");
            assert!(!stdout.is_empty(), "Help output should not be empty");
            assert!(stdout.contains("li3"), "Help should mention the tool name");
        }
        Err(e) => {
            println!("Skipping: Could not run li3 binary: {}", e);
        }
    }
}

/// Test that -h is an alias for --help.
#[test]
fn test_short_help_flag() {
    let long = li3(&["--help"]);
    let short = li3(&["-h"]);

    if let (Ok(long), Ok(short)) = (long, short) {
        assert!(short.status.success());
        // Short help is a summary of long help; both list the subcommands
        let short_out = String::from_utf8_lossy(&short.stdout);
        let long_out = String::from_utf8_lossy(&long.stdout);
        for needle in ["help", "api", "--plain", "--config"] {
            assert!(short_out.contains(needle), "-h should mention {needle}");
            assert!(long_out.contains(needle), "--help should mention {needle}");
        }
    }
}

/// Test that --version flag works.
#[test]
fn test_version_flag() {
    match li3(&["--version"]) {
        Ok(out) => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            assert!(out.status.success());
            assert!(
                stdout.contains(env!("CARGO_PKG_VERSION")),
                "Version output should contain the crate version, got: {}",
                stdout
            );
        }
        Err(e) => {
            println!("Skipping: Could not run li3 binary: {}", e);
        }
    }
}

// =============================================================================
// Subcommand Help Tests
// =============================================================================

/// Test that both subcommands have help.
#[test]
fn test_subcommand_help_available() {
    let cases = [
        ("help", "Command name"),
        ("api", "Dotted class path"),
    ];

    for (subcommand, expected) in cases {
        match li3(&[subcommand, "--help"]) {
            Ok(out) => {
                let stdout = String::from_utf8_lossy(&out.stdout);
                assert!(out.status.success(), "{subcommand} --help should exit 0");
                assert!(
                    stdout.contains(expected),
                    "{subcommand} --help should describe its arguments"
                );
            }
            Err(e) => {
                println!("Skipping {}: {}", subcommand, e);
            }
        }
    }
}

/// Test that api help lists the accepted targets.
#[test]
fn test_api_help_lists_targets() {
    if let Ok(out) = li3(&["api", "--help"]) {
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("method"), "api help should list `method`");
        assert!(stdout.contains("property"), "api help should list `property`");
    }
}

// =============================================================================
// Error Message Tests
// =============================================================================

/// Test that invalid subcommands produce helpful errors.
#[test]
fn test_invalid_command_error() {
    if let Ok(out) = li3(&["definitely-not-a-command"]) {
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(!out.status.success(), "Invalid subcommand should fail");
        assert!(
            stderr.contains("unrecognized subcommand"),
            "Error should name the problem, got: {}",
            stderr
        );
    }
}

/// Test that missing required args produce helpful errors.
#[test]
fn test_missing_args_error() {
    if let Ok(out) = li3(&["api"]) {
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(!out.status.success(), "api without a class should fail");
        assert!(
            stderr.contains("<CLASS>"),
            "Error should mention the missing argument, got: {}",
            stderr
        );
    }
}

/// Test that an unknown command name reports the normalized class name.
#[test]
fn test_unknown_command_message() {
    if let Ok(out) = li3(&["help", "nope"]) {
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert_eq!(out.status.code(), Some(1));
        assert!(stderr.contains("Command `Nope` not found"));
    }
}
