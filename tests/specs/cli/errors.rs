//! Error reporting specs
//!
//! Failures exit non-zero and explain what to do next.

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    let project = Project::empty();
    project.rb().args(&["frobnicate"]).fails();
}

#[test]
fn unknown_pipeline_kind_fails() {
    let project = Project::empty();
    project
        .rb()
        .args(&["phases", "tenant"])
        .fails()
        .stderr_has("unknown pipeline");
}

#[test]
fn missing_lead_reports_not_found() {
    let project = Project::empty();
    let run = project
        .rb()
        .args(&["lead", "show", "lead-404"])
        .fails()
        .stderr_has("error: lead not found: lead-404")
        .stderr_has("suggestions:");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn invalid_move_leaves_lead_in_place() {
    let project = Project::empty();
    let lead = project.json(&["lead", "create", "Ana", "ana@example.com"]);
    let id = field(&lead, "id");

    project
        .rb()
        .args(&["lead", "move", id, "published"])
        .fails()
        .stderr_has("unknown phase 'published'");

    let after = project.json(&["lead", "show", id]);
    assert_eq!(after["phase"], "qualified_profile");
    assert_eq!(after["phase_entered_at"], lead["phase_entered_at"]);
}

#[test]
fn create_with_unknown_phase_creates_nothing() {
    let project = Project::empty();
    project
        .rb()
        .args(&["property", "create", "Ático", "Calle Mayor 1", "950", "--phase", "NoExiste"])
        .fails()
        .stderr_has("unknown property phase: NoExiste");

    let properties = project.json(&["property", "list"]);
    assert!(properties.as_array().unwrap().is_empty());
}

#[test]
fn path_like_ids_are_rejected() {
    let project = Project::empty();
    project
        .rb()
        .args(&["lead", "show", "../etc"])
        .fails()
        .stderr_has("invalid id");
}
