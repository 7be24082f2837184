//! Settings file types
//!
//! This module defines the data structures that represent an Iris
//! `config.yml` settings file.

use crate::ui::Verbosity;
use serde::{Deserialize, Serialize};

/// User settings, every field optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Colored terminal output
    pub color: bool,

    /// Answer yes to every confirmation prompt
    pub assume_yes: bool,

    /// Default verbosity level
    pub verbosity: Verbosity,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            color: true,
            assume_yes: false,
            verbosity: Verbosity::Normal,
        }
    }
}

/// Values given on the command line, applied over the settings file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub no_color: bool,
    pub assume_yes: bool,
    pub verbosity: Option<Verbosity>,
}

impl Settings {
    /// Apply command-line overrides; flags can only switch things on
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.no_color {
            self.color = false;
        }
        if overrides.assume_yes {
            self.assume_yes = true;
        }
        if let Some(verbosity) = overrides.verbosity {
            self.verbosity = verbosity;
        }
        self
    }
}
