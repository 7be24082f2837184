//! Error types for Iris

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Iris operations
pub type Result<T> = std::result::Result<T, IrisError>;

/// Main error type for Iris
#[derive(Error, Debug)]
pub enum IrisError {
    /// Command tree registration and dispatch errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bad arguments for a command
    #[error("{}", usage_message(.0))]
    Usage(#[from] clap::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Command tree errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("command \"{name}\" is already registered under \"{parent}\"")]
    DuplicateCommand { parent: String, name: String },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Specialized result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Clap's message without its own `error: ` prefix, which `main` already adds
fn usage_message(err: &clap::Error) -> String {
    let text = err.to_string();
    text.strip_prefix("error: ")
        .unwrap_or(&text)
        .trim_end()
        .to_string()
}

/// Whether an error came from the user asking for something the tree
/// does not have (as opposed to an I/O or settings failure)
pub fn is_unknown_command(err: &IrisError) -> bool {
    matches!(
        err,
        IrisError::Registry(RegistryError::UnknownCommand(_))
    )
}
