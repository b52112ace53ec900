//! Catalog-level checks over the assembled command list.

use std::collections::HashSet;

use nexus_commands::all_commands;
use nexus_commands::framework::UNGATED_COMMANDS;

#[test]
fn command_names_are_unique() {
    let commands = all_commands();
    let names: HashSet<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names.len(),
        commands.len(),
        "duplicate command names in the catalog"
    );
}

#[test]
fn every_command_has_a_description() {
    for command in all_commands() {
        assert!(
            command
                .description
                .as_deref()
                .is_some_and(|d| !d.is_empty()),
            "command `{}` has no description",
            command.name
        );
    }
}

#[test]
fn every_command_is_reachable_by_prefix_and_slash() {
    for command in all_commands() {
        assert!(
            command.prefix_action.is_some(),
            "command `{}` has no prefix action",
            command.name
        );
        assert!(
            command.slash_action.is_some(),
            "command `{}` has no slash action",
            command.name
        );
    }
}

#[test]
fn ungated_commands_exist_in_the_catalog() {
    let commands = all_commands();
    let names: HashSet<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    for name in UNGATED_COMMANDS {
        assert!(names.contains(name), "ungated command `{name}` not found");
    }
}

#[test]
fn catalog_covers_every_subject() {
    assert_eq!(all_commands().len(), 47);
}
