//! Round-robin assignment specs

use crate::prelude::*;

fn create_property(project: &Project, title: &str, phase: &str) -> String {
    let property = project.json(&[
        "property", "create", title, "Calle Mayor 1", "900", "--phase", phase,
    ]);
    field(&property, "id").to_string()
}

#[test]
fn no_published_property_assigns_nothing() {
    let project = Project::empty();
    project.json(&["lead", "create", "Ana", "ana@example.com"]);
    create_property(&project, "Estudio", "documentation");

    project
        .rb()
        .args(&["assign"])
        .fails()
        .stderr_has("no eligible properties");
    let assignments = project.json(&["assignments"]);
    assert!(assignments.as_array().unwrap().is_empty());
}

#[test]
fn leads_alternate_between_published_properties() {
    let project = Project::empty();
    let first = create_property(&project, "Ático", "published");
    create_property(&project, "Dúplex", "rented");
    let second = create_property(&project, "Estudio", "Publicada");

    let mut leads = Vec::new();
    for name in ["Ana", "Leo", "Eva"] {
        let email = format!("{}@example.com", name.to_lowercase());
        let lead = project.json(&["lead", "create", name, &email]);
        leads.push(field(&lead, "id").to_string());
    }

    let run = project.json(&["assign"]);
    assert_eq!(run["succeeded"], 3);
    assert_eq!(run["assigned"], 3);

    let assignments = project.json(&["assignments"]);
    let property_of = |lead: &str| {
        assignments
            .as_array()
            .unwrap()
            .iter()
            .find(|a| a["lead_id"] == lead)
            .map(|a| field(a, "property_id").to_string())
            .unwrap()
    };
    assert_eq!(property_of(&leads[0]), first);
    assert_eq!(property_of(&leads[1]), second);
    assert_eq!(property_of(&leads[2]), first);
}

#[test]
fn second_run_only_assigns_new_leads() {
    let project = Project::empty();
    create_property(&project, "Ático", "published");
    project.json(&["lead", "create", "Ana", "ana@example.com"]);
    project.json(&["assign"]);
    project.json(&["lead", "create", "Leo", "leo@example.com"]);

    let run = project.json(&["assign"]);
    assert_eq!(run["assigned"], 1);
    let assignments = project.json(&["assignments"]);
    assert_eq!(assignments.as_array().unwrap().len(), 2);
}
