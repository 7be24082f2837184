//! The `remove` command

use crate::registry::Context;

/// Removal is not implemented yet; the command only announces itself and
/// accepts any arguments.
pub fn remove(ctx: &mut Context<'_>, _args: &[String]) -> crate::Result<()> {
    writeln!(ctx.out, "Removing the application.......")?;
    Ok(())
}
