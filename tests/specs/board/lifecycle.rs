//! Lead and property lifecycle specs

use crate::prelude::*;

#[test]
fn lead_without_phase_starts_at_first_phase() {
    let project = Project::empty();
    let lead = project.json(&["lead", "create", "Ana", "ana@example.com"]);
    assert_eq!(lead["phase"], "qualified_profile");
    assert_eq!(lead["phase_label"], "Perfil cualificado");
}

#[test]
fn lead_may_move_backward() {
    let project = Project::empty();
    let lead = project.json(&[
        "lead",
        "create",
        "Ana",
        "ana@example.com",
        "--phase",
        "Inquilino aceptado",
    ]);
    let moved = project.json(&["lead", "move", field(&lead, "id"), "Calificación en curso"]);
    assert_eq!(moved["phase"], "qualification_in_progress");
}

#[test]
fn move_to_current_phase_keeps_entry_time() {
    let project = Project::empty();
    let lead = project.json(&["lead", "create", "Ana", "ana@example.com"]);
    let same = project.json(&["lead", "move", field(&lead, "id"), "qualified_profile"]);
    assert_eq!(same["phase_entered_at"], lead["phase_entered_at"]);
}

#[test]
fn property_walks_the_pipeline() {
    let project = Project::empty();
    let property = project.json(&["property", "create", "Ático", "Calle Mayor 1", "950"]);
    let id = field(&property, "id");

    for expected in ["documentation", "published", "reserved", "rented"] {
        let moved = project.json(&["property", "advance", id]);
        assert_eq!(moved["phase"], expected);
    }
    project
        .rb()
        .args(&["property", "advance", id])
        .fails()
        .stderr_has("already in the last phase");

    let back = project.json(&["property", "retreat", id]);
    assert_eq!(back["phase"], "reserved");
}

#[test]
fn retreat_from_first_phase_fails() {
    let project = Project::empty();
    let lead = project.json(&["lead", "create", "Ana", "ana@example.com"]);
    project
        .rb()
        .args(&["lead", "retreat", field(&lead, "id")])
        .fails()
        .stderr_has("already in the first phase");
}

#[test]
fn deleting_a_property_drops_its_assignments() {
    let project = Project::empty();
    let lead = project.json(&["lead", "create", "Ana", "ana@example.com"]);
    let property = project.json(&["property", "create", "Ático", "Calle Mayor 1", "950"]);
    project
        .rb()
        .args(&["assign", "--lead", field(&lead, "id"), "--property", field(&property, "id")])
        .passes();

    project
        .rb()
        .args(&["property", "delete", field(&property, "id")])
        .passes();
    let assignments = project.json(&["assignments"]);
    assert!(assignments.as_array().unwrap().is_empty());
}
