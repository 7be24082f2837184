//! The `help` command
//!
//! Prints the banner followed by the whole command tree.

use crate::registry::{list_commands, Context};

/// Banner printed above the command listing. Scripts match on it, so it
/// must not change.
pub const BANNER: &str = r#"
 ____  ____   ____ _____     __ __    ___  _      ____
|    ||    \ |    / ___/    |  |  |  /  _]| |    |    \
 |  | |  D  ) |  (   \_     |  |  | /  [_ | |    |  o  )
 |  | |    /  |  |\__  |    |  _  ||    _]| |___ |   _/
 |  | |    \  |  |/  \ |    |  |  ||   [_ |     ||  |
 |  | |  .  \ |  |\    |    |  |  ||     ||     ||  |
|____||__|\_||____|\___|    |__|__||_____||_____||__|
    "#;

/// Line printed between the banner and the listing
pub const LISTING_HEADER: &str = "Here are the available commands:";

/// Print the banner and list every registered command, starting at the root
pub fn help(ctx: &mut Context<'_>, _args: &[String]) -> crate::Result<()> {
    writeln!(ctx.out, "{}", BANNER)?;
    writeln!(ctx.out, "{}", LISTING_HEADER)?;
    list_commands(ctx.root, "", ctx.out)?;
    Ok(())
}
