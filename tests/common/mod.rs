//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use iris::cli::App;
use iris::config::Settings;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// Run the built-in tree in-process, returning the result and captured stdout
pub fn run_app(args: &[&str], input: &str) -> (iris::Result<()>, String) {
    let app = App::new(Settings::default()).unwrap();
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let mut out: Vec<u8> = Vec::new();
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let result = app.run(&args, &mut out, &mut input);
    (result, String::from_utf8(out).unwrap())
}

/// Create a temporary directory with a settings file
pub fn create_test_settings(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("config.yml");
    fs::write(&settings_path, content).unwrap();
    (temp_dir, settings_path)
}

/// The `iris` binary with an empty user config directory
pub fn iris_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("iris").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}
