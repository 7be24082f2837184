//! Integration tests for the command tree and dispatch

mod common;

use common::run_app;
use iris::commands::help::{BANNER, LISTING_HEADER};
use iris::commands::{build_root, ROOT_NAME};
use iris::error::{IrisError, RegistryError};
use iris::registry::{list_commands, Command};

fn listing(root: &Command) -> String {
    let mut out: Vec<u8> = Vec::new();
    list_commands(root, "", &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_help_prints_banner_header_and_tree() {
    let (result, out) = run_app(&["help"], "");
    assert!(result.is_ok());

    let root = build_root().unwrap();
    let expected = format!("{}\n{}\n{}", BANNER, LISTING_HEADER, listing(&root));
    assert_eq!(out, expected);
}

#[test]
fn test_help_listing_starts_with_root_then_registration_order() {
    let (_, out) = run_app(&["help"], "");
    let after_header = out.split_once(&format!("{}\n", LISTING_HEADER)).unwrap().1;
    let mut lines = after_header.lines();

    assert_eq!(lines.next(), Some(ROOT_NAME));
    assert_eq!(lines.next(), Some("  help"));
    assert_eq!(lines.next(), Some("  remove"));
    assert!(after_header.contains("  repo\n    add\n"));
}

#[test]
fn test_help_ignores_extra_args() {
    let (result, out) = run_app(&["help", "install"], "");
    assert!(result.is_ok());
    assert!(out.contains(LISTING_HEADER));
}

#[test]
fn test_listing_has_one_indented_line_per_node() {
    let root = build_root().unwrap();
    let text = listing(&root);
    assert_eq!(text.lines().count(), root.len());

    fn check(node: &Command, depth: usize, lines: &mut std::str::Lines<'_>) {
        let line = lines.next().unwrap();
        assert_eq!(line, format!("{}{}", "  ".repeat(depth), node.name));
        for child in node.children() {
            check(child, depth + 1, lines);
        }
    }
    check(&root, 0, &mut text.lines());
}

#[test]
fn test_listing_is_idempotent() {
    let root = build_root().unwrap();
    assert_eq!(listing(&root), listing(&root));
}

#[test]
fn test_remove_with_any_args() {
    for args in [&["remove"][..], &["remove", "vim"][..], &["remove", "--force", "-y"][..]] {
        let (result, out) = run_app(args, "");
        assert!(result.is_ok());
        assert_eq!(out, "Removing the application.......\n");
    }
}

#[test]
fn test_unknown_command() {
    let (result, out) = run_app(&["frobnicate"], "");
    match result {
        Err(IrisError::Registry(RegistryError::UnknownCommand(name))) => {
            assert_eq!(name, "frobnicate")
        }
        other => panic!("expected unknown command, got {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn test_duplicate_registration_leaves_tree_unchanged() {
    let mut root = build_root().unwrap();
    let before = listing(&root);

    let result = root.register(Command::new("help", "Another help"));
    assert_eq!(
        result,
        Err(RegistryError::DuplicateCommand {
            parent: ROOT_NAME.to_string(),
            name: "help".to_string()
        })
    );
    assert_eq!(listing(&root), before);
    assert_eq!(root.child("help").unwrap().short, "Show help information");
}

#[test]
fn test_grouping_command_prints_usage() {
    let (result, out) = run_app(&["repo"], "");
    assert!(result.is_ok());
    assert!(out.contains(&format!("{} repo [command]", ROOT_NAME)));
    assert!(out.contains("add  Add a package repository"));
}

#[test]
fn test_grouping_command_rejects_unknown_child() {
    let (result, _) = run_app(&["repo", "drop"], "");
    assert!(matches!(
        result,
        Err(IrisError::Registry(RegistryError::UnknownCommand(ref name))) if name == "repo drop"
    ));
}

#[test]
fn test_no_args_prints_root_usage() {
    let (result, out) = run_app(&[], "");
    assert!(result.is_ok());
    assert!(out.starts_with("A simple package manager\n"));
    assert!(out.contains("Available Commands:"));
}

#[test]
fn test_nested_dispatch() {
    let (result, out) = run_app(&["repo", "add", "-r", "https://repo.example.org"], "");
    assert!(result.is_ok());
    assert_eq!(out, "Adding repository: https://repo.example.org\n");
}
