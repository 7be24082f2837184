//! Built-in commands
//!
//! [`build_root`] assembles the complete command tree in one place, in the
//! order the commands are listed by `help`.

pub mod completions;
pub mod help;
pub mod packages;
pub mod remove;
pub mod repo;
pub mod system;
pub mod version;

use crate::cli::global_flags_command;
use crate::error::RegistryResult;
use crate::registry::{Command, Context};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use completions::CompletionsArgs;
use packages::{DowngradeArgs, InstallArgs, QueryArgs, SearchArgs};
use repo::AddRepoArgs;
use system::ResumeArgs;

/// Name of the root command, first line of the `help` listing
pub const ROOT_NAME: &str = "yourpackagemanager";

/// Description of the root command
pub const ROOT_SHORT: &str = "A simple package manager";

/// Build the full command tree
pub fn build_root() -> RegistryResult<Command> {
    let mut root = Command::new(ROOT_NAME, ROOT_SHORT).with_args(global_flags_command);

    root.register(Command::new("help", "Show help information").with_action(help::help))?;
    root.register(
        Command::new("remove", "Removes the application/package").with_action(remove::remove),
    )?;
    root.register(
        Command::new("install", "Install packages")
            .with_action(packages::install)
            .with_args(InstallArgs::command),
    )?;
    root.register(
        Command::new("search", "Search for packages")
            .with_action(packages::search)
            .with_args(SearchArgs::command),
    )?;
    root.register(
        Command::new("query", "Query installed packages")
            .with_action(packages::query)
            .with_args(QueryArgs::command),
    )?;
    root.register(Command::new("list", "List installed packages").with_action(packages::list))?;
    root.register(
        Command::new("upgrade", "Upgrade the system packages").with_action(system::upgrade),
    )?;
    root.register(Command::new("sync", "Sync the repositories").with_action(system::sync))?;
    root.register(
        Command::new("downgrade", "Downgrade packages")
            .with_action(packages::downgrade)
            .with_args(DowngradeArgs::command),
    )?;
    root.register(
        Command::new("resume", "Resume paused operations")
            .with_action(system::resume)
            .with_args(ResumeArgs::command),
    )?;
    root.register(Command::new("repo", "Manage package repositories"))?;
    root.register_at(
        &["repo"],
        Command::new("add", "Add a package repository")
            .with_action(repo::add)
            .with_args(AddRepoArgs::command),
    )?;
    root.register(
        Command::new("version", "Print version information").with_action(version::version),
    )?;
    root.register(
        Command::new("completions", "Generate a shell completion script")
            .with_action(completions::completions)
            .with_args(CompletionsArgs::command),
    )?;

    Ok(root)
}

/// Parse an action's arguments with clap.
///
/// `--help` output is written to the context and yields `None`; any other
/// parse failure is returned as a usage error.
pub(crate) fn parse_args<T: Parser>(
    ctx: &mut Context<'_>,
    name: &str,
    args: &[String],
) -> crate::Result<Option<T>> {
    let bin_name = format!("{} {}", ctx.root.name, name);
    let argv = std::iter::once(bin_name.as_str()).chain(args.iter().map(String::as_str));

    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            write!(ctx.out, "{}", e.render())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
