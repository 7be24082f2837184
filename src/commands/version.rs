//! The `version` command and `-V/--version` flag

use crate::registry::Context;
use crate::VERSION;
use colored::Colorize;
use std::io::Write;

/// Version banner; `{version}` is replaced with the crate version
const VERSION_TEMPLATE: &str = r#"
d8b       d8b                    Iris Package Manager         
Y8P       Y8P                 -------------------------
                      
888888d888888.d8888b          Iris v{version}
888888P"  88888K              Copyright (C) 2024-2025 RadianOS Development Team
888888    888"Y8888b.         Copyright (C) 2024-2025 Atiksh Sharma
888888    888     X88         This program may be freely redistributed under
888888    888 88888P'          the terms of the GNU General Public License.
"#;

/// Uncolored version banner
pub fn version_text() -> String {
    VERSION_TEMPLATE.replace("{version}", VERSION)
}

/// Write the version banner to `out`
pub fn print_version(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", version_text().bright_cyan().bold())
}

pub fn version(ctx: &mut Context<'_>, _args: &[String]) -> crate::Result<()> {
    print_version(ctx.out)?;
    Ok(())
}
