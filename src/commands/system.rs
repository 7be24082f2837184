//! System-wide operations: upgrade, sync and resume

use crate::commands::parse_args;
use crate::registry::Context;
use crate::ui::confirm;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "resume", about = "Resume paused operations")]
pub struct ResumeArgs {
    /// Resume all paused operations
    #[arg(short = 'a', long = "all", conflicts_with = "id")]
    pub all: bool,

    /// ID of the operation to resume
    #[arg(short = 'i', long = "id")]
    pub id: Option<String>,
}

pub fn upgrade(ctx: &mut Context<'_>, _args: &[String]) -> crate::Result<()> {
    if !confirm(ctx, "Are you sure you want to upgrade the system packages")? {
        writeln!(ctx.out, "Upgrade aborted.")?;
        return Ok(());
    }
    writeln!(ctx.out, "Upgrading system packages")?;
    Ok(())
}

pub fn sync(ctx: &mut Context<'_>, _args: &[String]) -> crate::Result<()> {
    if !confirm(ctx, "Are you sure you want to sync the repositories")? {
        writeln!(ctx.out, "Sync aborted.")?;
        return Ok(());
    }
    writeln!(ctx.out, "Syncing repositories")?;
    Ok(())
}

/// An explicit `--all` or `--id` is taken as consent; a bare `resume` asks.
pub fn resume(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let Some(resume) = parse_args::<ResumeArgs>(ctx, "resume", args)? else {
        return Ok(());
    };

    if !resume.all
        && resume.id.is_none()
        && !confirm(ctx, "Are you sure you want to resume the operation")?
    {
        writeln!(ctx.out, "Resume aborted.")?;
        return Ok(());
    }

    match (resume.all, resume.id) {
        (true, _) => writeln!(ctx.out, "Resuming all paused operations.")?,
        (false, Some(id)) => writeln!(ctx.out, "Resuming operation with ID: {}", id)?,
        (false, None) => writeln!(ctx.out, "Resuming operation")?,
    }
    Ok(())
}
