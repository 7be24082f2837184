//! Dispatch context
//!
//! Everything an action is allowed to touch while it runs.

use crate::registry::Command;
use crate::ui::Verbosity;
use std::io::{BufRead, Write};

/// State handed to an action during dispatch
pub struct Context<'a> {
    /// Root of the command tree being dispatched against
    pub root: &'a Command,

    /// Standard output, or a buffer under test
    pub out: &'a mut dyn Write,

    /// Source of answers for confirmation prompts
    pub input: &'a mut dyn BufRead,

    /// Verbosity level
    pub verbosity: Verbosity,

    /// Answer "yes" to every confirmation prompt
    pub assume_yes: bool,
}

impl<'a> Context<'a> {
    /// Create a context with default settings
    pub fn new(root: &'a Command, out: &'a mut dyn Write, input: &'a mut dyn BufRead) -> Self {
        Context {
            root,
            out,
            input,
            verbosity: Verbosity::Normal,
            assume_yes: false,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Answer yes to every prompt
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("[INFO] {}", message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }
}
