//! Settings file parsing and discovery

use crate::config::types::Settings;
use crate::error::{ConfigError, ConfigResult, IrisError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name inside the user configuration directory
const SETTINGS_FILE_NAME: &str = "config.yml";

/// Default location of the settings file, if the platform has one
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "RadianOS", "iris")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// Resolve which settings file to read.
///
/// An explicit path must exist. The default path is used only when present.
pub fn find_settings_file(explicit: Option<&Path>) -> ConfigResult<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf())),
        None => Ok(default_settings_path().filter(|p| p.is_file())),
    }
}

/// Parse settings from a string
pub fn parse_settings(yaml: &str) -> Result<Settings, IrisError> {
    // An empty file deserializes to null, not a mapping
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse a settings file from a path
pub fn parse_settings_file(path: &Path) -> Result<Settings, IrisError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_settings(&contents)
}

/// Load settings from `explicit` or the default location, falling back to
/// defaults when no file exists
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, IrisError> {
    match find_settings_file(explicit)? {
        Some(path) => parse_settings_file(&path),
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Verbosity;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_settings() {
        let yaml = r#"
color: false
assume_yes: true
verbosity: quiet
"#;
        let settings = parse_settings(yaml).unwrap();
        assert!(!settings.color);
        assert!(settings.assume_yes);
        assert_eq!(settings.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_parse_partial_settings() {
        let settings = parse_settings("assume_yes: true\n").unwrap();
        assert!(settings.color);
        assert!(settings.assume_yes);
    }

    #[test]
    fn test_parse_empty_settings() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_unknown_field_rejected() {
        let result = parse_settings("colour: false\n");
        assert!(matches!(result, Err(IrisError::Yaml(_))));
    }

    #[test]
    fn test_explicit_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yml");
        let result = find_settings_file(Some(&missing));
        assert!(matches!(result, Err(ConfigError::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        fs::write(&path, "verbosity: verbose\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.verbosity, Verbosity::Verbose);
    }
}
