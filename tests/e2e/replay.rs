//! Key replay tests for pmb
//!
//! `--keys` feeds key names through the popup without a terminal and prints
//! one JSON intent per line.

use predicates::prelude::*;
use serde_json::Value;

use crate::common::Fixture;

fn intents(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn down_highlights_first_item() {
    let fixture = Fixture::new();
    fixture
        .pmb()
        .args(["--keys", "down"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""intent":"highlight""#))
        .stdout(predicate::str::contains(r#""item_index":0"#));
}

#[test]
fn drill_down_then_open() {
    let fixture = Fixture::new();
    let output = fixture
        .pmb()
        .args(["--keys", "down,right,enter"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let intents = intents(&output.stdout);
    assert_eq!(intents.len(), 3);
    assert_eq!(intents[1]["intent"], "open_folder");
    assert_eq!(intents[1]["id"], "10");
    assert_eq!(intents[1]["parent_id"], "1");
    assert_eq!(intents[2]["intent"], "open_bookmarks");
    assert_eq!(intents[2]["ids"][0], "100");
    assert_eq!(intents[2]["options"]["close_popup"], true);
}

#[test]
fn left_closes_pane() {
    let fixture = Fixture::new();
    let output = fixture
        .pmb()
        .args(["--keys", "down,right,left"])
        .output()
        .unwrap();

    let intents = intents(&output.stdout);
    assert_eq!(intents[2]["intent"], "remove_trees_after");
    assert_eq!(intents[2]["parent_id"], "1");
}

#[test]
fn replay_stops_after_popup_closes() {
    let fixture = Fixture::new();
    let output = fixture
        .pmb()
        .args(["--keys", "enter,down,down"])
        .output()
        .unwrap();

    let intents = intents(&output.stdout);
    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0]["ids"][0], "10");
}

#[test]
fn unbound_keys_print_nothing() {
    let fixture = Fixture::new();
    fixture
        .pmb()
        .args(["--keys", "x,ctrl+p,left"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn root_option_selects_first_pane() {
    let fixture = Fixture::new();
    let output = fixture
        .pmb()
        .args(["--root", "2", "--keys", "enter"])
        .output()
        .unwrap();

    let intents = intents(&output.stdout);
    assert_eq!(intents[0]["ids"][0], "20");
}

#[test]
fn root_from_config_file() {
    let fixture = Fixture::new();
    fixture.write("config.toml", "[general]\nroot_id = \"2\"\n");
    let output = fixture.pmb().args(["--keys", "enter"]).output().unwrap();

    let intents = intents(&output.stdout);
    assert_eq!(intents[0]["ids"][0], "20");
}

// =============================================================================
// Context Menu
// =============================================================================

#[test]
fn control_opens_menu_when_configured() {
    let fixture = Fixture::new();
    fixture.write("config.toml", "[keyboard]\ncontext_menu_key = \"control\"\n");
    let output = fixture
        .pmb()
        .args(["--keys", "down,control,menu"])
        .output()
        .unwrap();

    let intents = intents(&output.stdout);
    assert_eq!(intents.len(), 2);
    assert_eq!(intents[1]["intent"], "open_menu");
    assert_eq!(intents[1]["id"], "10");
}

#[test]
fn menu_without_highlight_does_nothing() {
    let fixture = Fixture::new();
    fixture.write("config.toml", "[keyboard]\ncontext_menu_key = \"menu\"\n");
    fixture
        .pmb()
        .args(["--keys", "menu"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Keymap File
// =============================================================================

#[test]
fn keymap_file_adds_and_removes_bindings() {
    let fixture = Fixture::new();
    fixture.write(
        "bookmark-nav/keymap.toml",
        "[base-window]\n\"j\" = \"highlight_next\"\n\"down\" = \"none\"\n",
    );
    let output = fixture
        .pmb()
        .args(["--keys", "down,j,j"])
        .output()
        .unwrap();

    let intents = intents(&output.stdout);
    assert_eq!(intents.len(), 2);
    assert_eq!(intents[1]["item_index"], 1);
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn log_file_receives_json_lines() {
    let fixture = Fixture::new();
    fixture.write("config.toml", "[logging]\nlevel = \"debug\"\n");
    let log = fixture.path("pmb.log");
    fixture
        .pmb()
        .arg("--log-file")
        .arg(&log)
        .args(["--keys", "down"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    let first: Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert!(first["ts_ms"].is_u64());
    assert!(content.contains("popup opened"));
}
