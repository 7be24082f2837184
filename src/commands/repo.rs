//! Repository management
//!
//! `repo` is a grouping command; its subcommands do the work.

use crate::commands::parse_args;
use crate::registry::Context;
use crate::ui::confirm;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "add", about = "Add a package repository")]
pub struct AddRepoArgs {
    /// Repository URL
    #[arg(short = 'r', long = "repo")]
    pub repo: String,

    /// Update the repository list afterwards
    #[arg(short = 'u', long = "update")]
    pub update: bool,
}

pub fn add(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(add) = parse_args::<AddRepoArgs>(ctx, "repo add", args)? else {
        return Ok(());
    };

    writeln!(ctx.out, "Adding repository: {}", add.repo)?;
    if add.update {
        if !confirm(ctx, "Are you sure you want to update the repository list")? {
            writeln!(ctx.out, "Update aborted.")?;
            return Ok(());
        }
        writeln!(ctx.out, "Updating repository list.")?;
    }
    Ok(())
}
