// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// `rb` pointed at a store inside `temp`, isolated from the caller's env
pub fn rb(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rb").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("RB_PHASES")
        .env_remove("RUST_LOG")
        .env("RB_STORE_PATH", temp.path().join("store"));
    cmd
}

/// Run `rb --format json <args>` successfully and parse stdout
pub fn rb_json(temp: &TempDir, args: &[&str]) -> Value {
    let output = rb(temp)
        .args(["--format", "json"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

/// Create a lead and return its id
pub fn create_lead(temp: &TempDir, name: &str, extra: &[&str]) -> String {
    let email = format!("{}@example.com", name.to_lowercase());
    let mut args = vec!["lead", "create", name, email.as_str()];
    args.extend_from_slice(extra);
    let lead = rb_json(temp, &args);
    lead["id"].as_str().unwrap().to_string()
}

/// Create a property and return its id
pub fn create_property(temp: &TempDir, title: &str, extra: &[&str]) -> String {
    let mut args = vec!["property", "create", title, "Calle Mayor 1, Madrid", "900"];
    args.extend_from_slice(extra);
    let property = rb_json(temp, &args);
    property["id"].as_str().unwrap().to_string()
}
