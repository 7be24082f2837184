//! Settings loading
//!
//! This module handles discovery and parsing of the optional `config.yml`
//! settings file and merging it with command-line flags.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
