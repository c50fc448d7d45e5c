//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let project = Project::empty();
    project
        .rb()
        .args(&["--help"])
        .passes()
        .stdout_has("phases")
        .stdout_has("lead")
        .stdout_has("property")
        .stdout_has("board")
        .stdout_has("seed")
        .stdout_has("normalize");
}

#[test]
fn lead_help_lists_moves() {
    let project = Project::empty();
    project
        .rb()
        .args(&["lead", "--help"])
        .passes()
        .stdout_has("advance")
        .stdout_has("retreat")
        .stdout_has("move");
}

#[test]
fn empty_list_says_so() {
    let project = Project::empty();
    project
        .rb()
        .args(&["lead", "list"])
        .passes()
        .stdout_eq("Nothing found.\n");
}
