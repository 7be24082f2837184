//! Argument dispatch
//!
//! Walks the command tree along the leading arguments and runs the action
//! of the deepest command they name.

use crate::error::RegistryError;
use crate::registry::{print_usage, Context};

/// Resolve `args` against the tree rooted at `ctx.root` and run the
/// matching action with whatever arguments were not consumed by the path.
///
/// A command without an action prints its usage when nothing follows it,
/// and rejects anything that does follow it as an unknown command.
pub fn execute(ctx: &mut Context<'_>, args: &[String]) -> crate::Result<()> {
    let root = ctx.root;
    let mut node = root;
    let mut path = vec![root.name.as_str()];
    let mut consumed = 0;

    while let Some(child) = args.get(consumed).and_then(|arg| node.child(arg)) {
        node = child;
        path.push(child.name.as_str());
        consumed += 1;
    }
    let rest = &args[consumed..];

    ctx.print_debug(&format!(
        "Dispatching to '{}' with {} argument(s)",
        path.join(" "),
        rest.len()
    ));

    match node.action {
        Some(action) => action(ctx, rest),
        None if rest.is_empty() => {
            print_usage(node, &path, ctx.out)?;
            Ok(())
        }
        None => {
            let mut attempted = path[1..].to_vec();
            attempted.push(rest[0].as_str());
            Err(RegistryError::UnknownCommand(attempted.join(" ")).into())
        }
    }
}
