//! CLI interface and argument parsing
//!
//! This module handles global flags, settings loading and handing the
//! remaining arguments to the command tree.

pub mod app;

// Re-export main types
pub use app::*;
