//! Text rendering of the command tree

use crate::registry::Command;
use std::io::{self, Write};

/// Indentation added per level of depth
const INDENT: &str = "  ";

/// Write `node` and every descendant, one per line, depth-first, parents
/// before children, each indented by two spaces per level below `node`.
pub fn list_commands(node: &Command, indent: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}{}", indent, node.name)?;

    let child_indent = format!("{}{}", indent, INDENT);
    for child in node.children() {
        list_commands(child, &child_indent, out)?;
    }
    Ok(())
}

/// Write the usage block for `node`, reached through `path` from the root
pub fn print_usage(node: &Command, path: &[&str], out: &mut dyn Write) -> io::Result<()> {
    if !node.short.is_empty() {
        writeln!(out, "{}", node.short)?;
        writeln!(out)?;
    }

    let invocation = path.join(" ");
    writeln!(out, "Usage:")?;
    if node.action.is_some() {
        writeln!(out, "{}{} [args]", INDENT, invocation)?;
    }
    if !node.children().is_empty() {
        writeln!(out, "{}{} [command]", INDENT, invocation)?;
        writeln!(out)?;
        writeln!(out, "Available Commands:")?;

        let width = node
            .children()
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0);
        for child in node.children() {
            writeln!(out, "{}{:<width$}  {}", INDENT, child.name, child.short, width = width)?;
        }
    }
    Ok(())
}
