//! Command tree nodes
//!
//! A [`Command`] owns its children by value, so the tree can never contain
//! a cycle. Children keep their registration order.

use crate::error::{RegistryError, RegistryResult};
use crate::registry::Context;
use std::fmt;

/// Procedure run when dispatch resolves to a command.
///
/// Receives the arguments left over after the command path was matched.
pub type Action = fn(&mut Context<'_>, &[String]) -> crate::Result<()>;

/// Builds the clap description of a command's flags, for completion scripts
pub type ArgSpec = fn() -> clap::Command;

/// A named, invokable node in the command tree
#[derive(Clone)]
pub struct Command {
    /// Name matched against arguments, unique among siblings
    pub name: String,

    /// One-line description for listings
    pub short: String,

    /// Action run on dispatch; `None` for pure grouping nodes
    pub action: Option<Action>,

    /// Flags the command accepts, if it declares any
    pub args: Option<ArgSpec>,

    children: Vec<Command>,
}

impl Command {
    /// Create a grouping command with no action
    pub fn new(name: impl Into<String>, short: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            short: short.into(),
            action: None,
            args: None,
            children: Vec::new(),
        }
    }

    /// Attach an action
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Declare the flags this command accepts
    pub fn with_args(mut self, args: ArgSpec) -> Self {
        self.args = Some(args);
        self
    }

    /// Register a child, builder style
    pub fn with_child(mut self, child: Command) -> RegistryResult<Self> {
        self.register(child)?;
        Ok(self)
    }

    /// Append `child` to this command's children.
    ///
    /// Fails without touching the tree if a sibling already has the same name.
    pub fn register(&mut self, child: Command) -> RegistryResult<()> {
        if self.child(&child.name).is_some() {
            return Err(RegistryError::DuplicateCommand {
                parent: self.name.clone(),
                name: child.name,
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// Register `child` under the command reached by `path` from here
    pub fn register_at<S: AsRef<str>>(&mut self, path: &[S], child: Command) -> RegistryResult<()> {
        let mut parent = self;
        for name in path {
            let name: &str = name.as_ref();
            parent = parent
                .children
                .iter_mut()
                .find(|c| c.name == name)
                .ok_or_else(|| RegistryError::UnknownCommand(name.to_string()))?;
        }
        parent.register(child)
    }

    /// Direct child by exact name
    pub fn child(&self, name: &str) -> Option<&Command> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Descendant reached by following `path` from here
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&Command> {
        path.iter()
            .try_fold(self, |node, name| node.child(name.as_ref()))
    }

    /// Children in registration order
    pub fn children(&self) -> &[Command] {
        &self.children
    }

    /// Whether this node only groups other commands
    pub fn is_group(&self) -> bool {
        self.action.is_none()
    }

    /// Number of nodes in the subtree rooted here, including this one
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Command::len).sum::<usize>()
    }

    /// Always false; a command counts itself
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("action", &self.action.is_some())
            .field("args", &self.args.is_some())
            .field("children", &self.children)
            .finish()
    }
}
