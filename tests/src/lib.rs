//! Shared fixtures for the integration suite.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Writes a config fixture into `dir` and returns its path.
pub fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, body).expect("write config fixture");
    path
}
