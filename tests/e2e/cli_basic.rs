//! Basic CLI tests for pmb
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use predicates::prelude::*;

use crate::common::{pmb, Fixture};

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    pmb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--bookmarks"))
        .stdout(predicate::str::contains("CONFIG FILE:"))
        .stdout(predicate::str::contains("keymap.toml"));
}

#[test]
fn help_short_flag_shows_usage() {
    pmb()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    pmb()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    pmb()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("pmb"));
}

// =============================================================================
// Invalid Arguments (Exit Code 2)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_2() {
    pmb()
        .arg("--unknown-option")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn missing_bookmarks_returns_exit_code_2() {
    let fixture = Fixture::new();
    pmb()
        .env("XDG_CONFIG_HOME", fixture.dir.path())
        .arg("--config")
        .arg(fixture.path("config.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bookmarks is required"));
}

#[test]
fn option_without_value_returns_exit_code_2() {
    pmb().arg("--keys").assert().code(2);
}

#[test]
fn invalid_config_file_returns_exit_code_2() {
    let fixture = Fixture::new();
    fixture.write("config.toml", "[logging]\nlevel = \"loud\"\n");
    fixture.pmb().args(["--keys", "down"]).assert().code(2);
}

// =============================================================================
// Runtime Errors (Exit Code 1)
// =============================================================================

#[test]
fn missing_bookmarks_file_returns_exit_code_1() {
    let fixture = Fixture::new();
    pmb()
        .env("XDG_CONFIG_HOME", fixture.dir.path())
        .arg("--bookmarks")
        .arg(fixture.path("nope.json"))
        .arg("--config")
        .arg(fixture.path("config.toml"))
        .args(["--keys", "down"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn malformed_bookmarks_returns_exit_code_1() {
    let fixture = Fixture::new();
    fixture.write("bookmarks.json", "{ not json");
    fixture.pmb().args(["--keys", "down"]).assert().code(1);
}

#[test]
fn root_that_is_a_bookmark_returns_exit_code_1() {
    let fixture = Fixture::new();
    fixture
        .pmb()
        .args(["--root", "11", "--keys", "down"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a bookmark folder"));
}

#[test]
fn unknown_key_name_returns_exit_code_1() {
    let fixture = Fixture::new();
    fixture
        .pmb()
        .args(["--keys", "down,warp"])
        .assert()
        .code(1);
}
