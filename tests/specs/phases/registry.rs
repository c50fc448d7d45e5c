//! Phase registry specs
//!
//! Phases are listed in board order, resolved by key or label, and may be
//! relabelled from a TOML file.

use crate::prelude::*;

#[test]
fn lead_phases_in_order() {
    let project = Project::empty();
    project.rb().args(&["phases", "lead"]).passes().stdout_eq(
        "ORDER  KEY                          LABEL
0      qualified_profile            Perfil cualificado
1      visit_scheduled              Visita programada
2      qualification_in_progress    Calificación en curso
3      tenant_accepted              Inquilino aceptado
4      contract_signed              Contrato firmado
",
    );
}

#[test]
fn property_phases_are_contiguous() {
    let project = Project::empty();
    let phases = project.json(&["phases", "property"]);
    for (i, phase) in phases.as_array().unwrap().iter().enumerate() {
        assert_eq!(phase["order"], i);
        assert_eq!(phase["kind"], "property");
    }
}

#[test]
fn show_resolves_label() {
    let project = Project::empty();
    let phase = project.json(&["phases", "lead", "--show", "Inquilino aceptado"]);
    assert_eq!(phase["key"], "tenant_accepted");
    assert_eq!(phase["order"], 3);
}

#[test]
fn show_unknown_property_phase_fails() {
    let project = Project::empty();
    project
        .rb()
        .args(&["phases", "property", "--show", "NoExiste"])
        .fails()
        .stderr_has("unknown property phase: NoExiste");
}

#[test]
fn relabelled_phases_from_config() {
    let project = Project::empty();
    project.file(
        "phases.toml",
        "[lead.labels]\nqualified_profile = \"Qualified profile\"\n",
    );

    let lead = project
        .rb()
        .env("RB_PHASES", project.path().join("phases.toml"))
        .args(&["--format", "json", "lead", "create", "Ana", "ana@example.com"])
        .passes()
        .json();
    assert_eq!(lead["phase"], "qualified_profile");
    assert_eq!(lead["phase_label"], "Qualified profile");
}
