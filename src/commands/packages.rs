//! Package operations: install, search, query, list and downgrade
//!
//! Nothing is fetched or written yet. Each command validates its flags,
//! asks for confirmation where the operation would change the system, and
//! reports what it would do.

use crate::commands::parse_args;
use crate::registry::Context;
use crate::ui::confirm;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "install", about = "Install packages")]
pub struct InstallArgs {
    /// Package(s) to install
    #[arg(short = 'p', long = "package", required = true, num_args = 1..)]
    pub pkgs: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

#[derive(Parser, Debug)]
#[command(name = "search", about = "Search for packages")]
pub struct SearchArgs {
    /// Search term(s)
    #[arg(short = 't', long = "term", num_args = 1..)]
    pub terms: Vec<String>,

    /// Search all available packages
    #[arg(short = 'a', long = "all")]
    pub all: bool,
}

#[derive(Parser, Debug)]
#[command(name = "query", about = "Query installed packages")]
pub struct QueryArgs {
    /// Query term(s)
    #[arg(short = 't', long = "term", num_args = 1..)]
    pub terms: Vec<String>,

    /// Show detailed information
    #[arg(short = 'd', long = "details")]
    pub details: bool,
}

#[derive(Parser, Debug)]
#[command(name = "downgrade", about = "Downgrade packages")]
pub struct DowngradeArgs {
    /// Package(s) to downgrade
    #[arg(short = 'p', long = "package", required = true, num_args = 1..)]
    pub pkgs: Vec<String>,

    /// Version to downgrade to
    #[arg(short = 'v', long = "version")]
    pub version: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

pub fn install(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(install) = parse_args::<InstallArgs>(ctx, "install", args)? else {
        return Ok(());
    };

    if !install.force && !confirm(ctx, "Are you sure you want to install the packages")? {
        writeln!(ctx.out, "Installation aborted.")?;
        return Ok(());
    }

    writeln!(ctx.out, "Installing packages: {:?}", install.pkgs)?;
    ctx.print_info("Installation complete");
    Ok(())
}

pub fn search(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(search) = parse_args::<SearchArgs>(ctx, "search", args)? else {
        return Ok(());
    };

    writeln!(ctx.out, "Searching packages: {:?}", search.terms)?;
    if search.all {
        writeln!(ctx.out, "Searching all available packages.")?;
    }
    Ok(())
}

pub fn query(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(query) = parse_args::<QueryArgs>(ctx, "query", args)? else {
        return Ok(());
    };

    writeln!(ctx.out, "Querying packages: {:?}", query.terms)?;
    if query.details {
        writeln!(ctx.out, "Detailed information requested.")?;
    }
    Ok(())
}

pub fn list(ctx: &mut Context<'_>, _args: &[String]) -> crate::Result<()> {
    writeln!(ctx.out, "Listing packages")?;
    Ok(())
}

pub fn downgrade(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(downgrade) = parse_args::<DowngradeArgs>(ctx, "downgrade", args)? else {
        return Ok(());
    };

    if !downgrade.force && !confirm(ctx, "Are you sure you want to downgrade the packages")? {
        writeln!(ctx.out, "Downgrade aborted.")?;
        return Ok(());
    }

    writeln!(ctx.out, "Downgrading packages: {:?}", downgrade.pkgs)?;
    if let Some(version) = downgrade.version {
        writeln!(ctx.out, "Downgrading to version: {}", version)?;
    }
    Ok(())
}
