// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for fail-fast termination.
//!
//! Each test re-runs this test binary filtered to itself with a marker
//! variable set; the child takes the exiting path and the parent inspects
//! its exit status and stderr.

use std::process::{Command, Output};

use envsure::reader::fail_fast::INVALID_EXIT_CODE;
use envsure::{Env, EnvReader, ExitOnInvalid};

const CHILD_MARKER: &str = "ENVSURE_FAIL_FAST_CHILD";

fn is_child() -> bool {
    std::env::var_os(CHILD_MARKER).is_some()
}

fn run_child(test_name: &str) -> Output {
    Command::new(std::env::current_exe().expect("test binary path"))
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .output()
        .expect("failed to spawn child test process")
}

// =============================================================================
// Exit path
// =============================================================================

#[test]
fn invalid_number_exits_with_255() {
    if is_child() {
        let env = EnvReader::with_source(Env::from_iter([("PORT", "abc")]));
        let _ = env.number("PORT", None).exit_on_invalid();
        unreachable!("exit_on_invalid should have terminated the process");
    }

    let output = run_child("invalid_number_exits_with_255");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(INVALID_EXIT_CODE));
    assert!(
        stderr.contains("⨉ Error parsing environment variable PORT"),
        "stderr was: {stderr}"
    );
    assert!(
        stderr.contains("  • Expected number, received \"abc\""),
        "stderr was: {stderr}"
    );
}

#[test]
fn missing_required_exits_with_one_line_per_issue() {
    if is_child() {
        let env = EnvReader::with_source(Env::new());
        let _ = env.string("DATABASE_URL", None).exit_on_invalid();
        unreachable!("exit_on_invalid should have terminated the process");
    }

    let output = run_child("missing_required_exits_with_one_line_per_issue");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(255));
    let diagnostic: Vec<&str> = stderr
        .lines()
        .skip_while(|line| !line.starts_with('⨉'))
        .collect();
    assert_eq!(
        diagnostic,
        [
            "⨉ Error parsing environment variable DATABASE_URL",
            "  • Required"
        ]
    );
}

// =============================================================================
// No exit
// =============================================================================

#[test]
fn valid_values_do_not_exit() {
    let env = EnvReader::with_source(Env::from_iter([("WORKERS", "4")]));

    let workers = env.number("WORKERS", None).exit_on_invalid().unwrap();
    let debug = env.boolean("DEBUG", Some(false)).exit_on_invalid().unwrap();

    assert_eq!(workers, 4.0);
    assert!(!debug);
}
