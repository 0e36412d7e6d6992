//! Manifest and configuration test utilities

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pydep_check::config::{AuditConfig, AuditMode};
use pydep_check::version::cutoff::Cutoff;

/// Write `content` to `requirements.txt` in a fresh temporary directory
pub fn create_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("requirements.txt");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

pub fn read_manifest(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Audit settings for `path` with the given cutoff date
pub fn create_config(path: &Path, date: &str, mode: AuditMode) -> AuditConfig {
    AuditConfig {
        manifest_path: path.to_path_buf(),
        cutoff: Cutoff::parse(date).unwrap(),
        mode,
        ..AuditConfig::default()
    }
}
