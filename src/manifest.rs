//! Locating, reading and writing the manifest file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::MANIFEST_FILE_NAME;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("File not found by this path: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access {}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Resolve the manifest location.
///
/// A directory is replaced by the `requirements.txt` inside it. The result
/// must exist.
pub fn resolve_path(path: &Path) -> Result<PathBuf, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let file = path.join(MANIFEST_FILE_NAME);
    warn!("Path leads to dir, setting \"{}\" as path", file.display());

    if !file.exists() {
        return Err(ManifestError::NotFound(file));
    }

    Ok(file)
}

/// Read the whole manifest
pub fn read(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

/// Overwrite the manifest with `content` in a single write
pub fn write(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|source| io_error(path, source))?;
    info!("Rewrote {}", path.display());
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> ManifestError {
    if source.kind() == io::ErrorKind::NotFound {
        ManifestError::NotFound(path.to_path_buf())
    } else {
        ManifestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
