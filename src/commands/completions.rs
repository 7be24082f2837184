//! Shell completion scripts generated from the command tree

use crate::commands::parse_args;
use crate::registry::{Command, Context};
use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "completions", about = "Generate a shell completion script")]
pub struct CompletionsArgs {
    /// Shell to generate the script for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Name of the installed binary, if it differs from the root command
    #[arg(long = "bin-name")]
    pub bin_name: Option<String>,
}

/// Mirror the command tree as a clap command so clap_complete can walk it.
///
/// Nodes that declare flags start from their clap description; the rest get
/// a bare command with just a name and description.
pub fn to_clap(node: &Command) -> clap::Command {
    let base = match node.args {
        Some(args) => args(),
        None => clap::Command::new(node.name.clone()),
    };

    // The tree may define its own `help`
    let mut cmd = base
        .name(node.name.clone())
        .about(node.short.clone())
        .disable_help_subcommand(true);

    for child in node.children() {
        cmd = cmd.subcommand(to_clap(child));
    }

    cmd
}

pub fn completions(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(completions) = parse_args::<CompletionsArgs>(ctx, "completions", args)? else {
        return Ok(());
    };

    let bin_name = completions
        .bin_name
        .unwrap_or_else(|| ctx.root.name.clone());
    let mut cmd = to_clap(ctx.root);
    clap_complete::generate(completions.shell, &mut cmd, bin_name, ctx.out);
    Ok(())
}
