//! Seed specs
//!
//! The default seed creates 30 leads and 6 published properties and
//! spreads the leads over the properties round robin.

use crate::prelude::*;
use std::collections::HashMap;

/// Ids sorted by creation time
fn ids_by_creation(items: &serde_json::Value) -> Vec<String> {
    let mut items: Vec<_> = items.as_array().unwrap().iter().collect();
    items.sort_by_key(|item| field(item, "created_at").to_string());
    items.iter().map(|item| field(item, "id").to_string()).collect()
}

#[test]
fn default_seed_is_round_robin() {
    let project = Project::empty();
    let run = project.json(&["seed"]);
    assert_eq!(run["failed"], 0);
    assert_eq!(run["assigned"], 30);

    let leads = ids_by_creation(&project.json(&["lead", "list"]));
    let properties = ids_by_creation(&project.json(&["property", "list", "--phase", "published"]));
    assert_eq!(leads.len(), 30);
    assert_eq!(properties.len(), 6);

    let assignments = project.json(&["assignments"]);
    let by_lead: HashMap<String, String> = assignments
        .as_array()
        .unwrap()
        .iter()
        .map(|a| (field(a, "lead_id").to_string(), field(a, "property_id").to_string()))
        .collect();
    assert_eq!(by_lead[&leads[0]], properties[0]);
    assert_eq!(by_lead[&leads[6]], properties[0]);
    assert_eq!(by_lead[&leads[29]], properties[5]);
}

#[test]
fn seed_replaces_previous_data() {
    let project = Project::empty();
    project.json(&["lead", "create", "Ana", "ana@example.com"]);
    project.json(&["seed", "--leads", "3", "--properties", "1", "--drafts", "0"]);

    let leads = project.json(&["lead", "list"]);
    let leads = leads.as_array().unwrap();
    assert_eq!(leads.len(), 3);
    assert!(leads.iter().all(|l| l["name"] != "Ana"));
}

#[test]
fn seed_without_published_properties_fails() {
    let project = Project::empty();
    project
        .rb()
        .args(&["seed", "--properties", "0"])
        .fails()
        .stderr_has("no eligible properties");
}

#[test]
fn refused_seed_keeps_existing_data() {
    let project = Project::empty();
    project.json(&["seed"]);
    project
        .rb()
        .args(&["seed", "--leads", "3", "--properties", "0"])
        .fails();
    assert_eq!(project.json(&["lead", "list"]).as_array().unwrap().len(), 30);
    assert_eq!(project.json(&["assignments"]).as_array().unwrap().len(), 30);
}

#[test]
fn seeded_board_shows_days_in_phase() {
    let project = Project::empty();
    project.json(&["seed"]);
    let board = project.json(&["board", "lead"]);
    let cards: Vec<_> = board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["cards"].as_array().unwrap().clone())
        .collect();
    assert_eq!(cards.len(), 30);
    assert!(cards.iter().all(|c| c["days_in_phase"].as_i64().unwrap() >= 0));
    assert!(cards.iter().any(|c| c["days_in_phase"].as_i64().unwrap() > 0));
}
