//! Iris - the RadianOS package manager
//!
//! The command line is a tree of named commands built once at startup.
//! Arguments walk the tree to a command, whose action receives whatever
//! arguments are left over.

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod registry;
pub mod ui;

// Re-export commonly used types
pub use error::{IrisError, Result};

/// Current version of Iris
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
