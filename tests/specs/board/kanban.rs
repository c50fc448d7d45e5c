//! Kanban board specs

use crate::prelude::*;

#[test]
fn empty_board_has_every_column() {
    let project = Project::empty();
    let board = project.json(&["board", "property"]);
    let columns = board["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[0]["phase"]["label"], "Captación");
    assert_eq!(columns[4]["phase"]["label"], "Alquilada");
}

#[test]
fn new_cards_have_zero_days() {
    let project = Project::empty();
    project.json(&["lead", "create", "Ana", "ana@example.com"]);
    project
        .rb()
        .args(&["board", "lead"])
        .passes()
        .stdout_has("Perfil cualificado (1)")
        .stdout_has("0d");
}

#[test]
fn legacy_labels_are_normalised() {
    let project = Project::empty();
    let lead = project.json(&["lead", "create", "Ana", "ana@example.com"]);
    let id = field(&lead, "id").to_string();

    // Rewrite the stored row the way the old dashboard stored phases
    let path = project.path().join(format!(".rentboard/leads/{}.json", id));
    let stored = std::fs::read_to_string(&path).unwrap();
    std::fs::write(
        &path,
        stored.replace("\"qualified_profile\"", "\"Visita programada\""),
    )
    .unwrap();

    let board = project.json(&["board", "lead"]);
    assert_eq!(board["columns"][1]["cards"][0]["id"], id.as_str());

    project
        .rb()
        .args(&["normalize"])
        .passes()
        .stdout_has("normalize: 1 succeeded, 0 failed");
    let after = project.json(&["lead", "show", &id]);
    assert_eq!(after["phase"], "visit_scheduled");
}
