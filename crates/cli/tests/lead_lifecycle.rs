// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for lead and property lifecycles

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{create_lead, create_property, rb, rb_json};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn rb_help() {
    let temp = TempDir::new().unwrap();
    rb(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lead and property pipelines"));
}

#[test]
fn rb_version() {
    let temp = TempDir::new().unwrap();
    rb(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rb"));
}

#[test]
fn new_lead_starts_in_first_phase() {
    let temp = TempDir::new().unwrap();
    let lead = rb_json(&temp, &["lead", "create", "Ana Ruiz", "ana@example.com"]);

    assert_eq!(lead["phase"], "qualified_profile");
    assert_eq!(lead["phase_label"], "Perfil cualificado");
    assert_eq!(lead["days_in_phase"], 0);
    assert!(lead["id"].as_str().unwrap().starts_with("lead-"));
}

#[test]
fn lead_moves_backward_by_label() {
    let temp = TempDir::new().unwrap();
    let id = create_lead(&temp, "Ana", &["--phase", "Inquilino aceptado"]);

    let moved = rb_json(&temp, &["lead", "move", &id, "Calificación en curso"]);
    assert_eq!(moved["phase"], "qualification_in_progress");

    rb(&temp)
        .args(["lead", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calificación en curso"));
}

#[test]
fn advance_walks_forward_until_the_end() {
    let temp = TempDir::new().unwrap();
    let id = create_lead(&temp, "Leo", &["--phase", "tenant_accepted"]);

    let lead = rb_json(&temp, &["lead", "advance", &id]);
    assert_eq!(lead["phase"], "contract_signed");

    rb(&temp)
        .args(["lead", "advance", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last phase"))
        .stderr(predicate::str::contains("rb lead retreat"));
}

#[test]
fn list_filters_by_phase() {
    let temp = TempDir::new().unwrap();
    create_property(&temp, "Ático", &["--phase", "published"]);
    create_property(&temp, "Estudio", &[]);

    let published = rb_json(&temp, &["property", "list", "--phase", "Publicada"]);
    let published = published.as_array().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0]["title"], "Ático");
}

#[test]
fn delete_removes_lead() {
    let temp = TempDir::new().unwrap();
    let id = create_lead(&temp, "Eva", &[]);

    rb(&temp)
        .args(["lead", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted lead"));
    rb(&temp)
        .args(["lead", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rb lead list"));
}

#[test]
fn store_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other");
    rb(&temp)
        .args(["--store", other.to_str().unwrap()])
        .args(["lead", "create", "Ana", "ana@example.com"])
        .assert()
        .success();

    assert!(other.join("leads").is_dir());
    assert!(!temp.path().join("store").join("leads").exists());
}
