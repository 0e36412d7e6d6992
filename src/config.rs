use std::num::NonZeroUsize;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::version::cutoff::Cutoff;

// =============================================================================
// Registry constants
// =============================================================================

/// Default base URL of the package index
pub const DEFAULT_PYPI_REGISTRY: &str = "https://pypi.org";

/// Timeout for a single registry request in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of registry fetches allowed in flight at once
pub const DEFAULT_CONCURRENCY: NonZeroUsize = NonZeroUsize::new(4).unwrap();

// =============================================================================
// Manifest constants
// =============================================================================

/// Manifest path used when `--path` is not given
pub const DEFAULT_MANIFEST_PATH: &str = "requirements.txt";

/// File name appended when the manifest path points to a directory
pub const MANIFEST_FILE_NAME: &str = "requirements.txt";

// =============================================================================
// Date constants
// =============================================================================

/// Cutoff date used when `--date` is absent or cannot be parsed
pub const DEFAULT_CUTOFF_DATE: NaiveDate = NaiveDate::from_ymd_opt(2022, 2, 23).unwrap();

/// Accepted `--date` formats, tried in order
pub const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y", "%Y/%m/%d", "%Y.%m.%d", "%Y-%m-%d",
];

/// Format of `upload_time` in registry responses
pub const UPLOAD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// What the auditor does with unsafe pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditMode {
    /// Log violations and fail the run
    #[default]
    Report,
    /// Downgrade unsafe pins to the newest safe version and rewrite the manifest
    Rewrite,
}

impl AuditMode {
    pub fn from_handle(handle: bool) -> Self {
        if handle {
            AuditMode::Rewrite
        } else {
            AuditMode::Report
        }
    }
}

/// Settings for a single audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Manifest file, or a directory containing `requirements.txt`
    pub manifest_path: PathBuf,
    pub cutoff: Cutoff,
    pub mode: AuditMode,
    /// Base URL of the package index
    pub registry_url: String,
    /// Maximum number of registry fetches in flight
    pub concurrency: NonZeroUsize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            cutoff: Cutoff::default(),
            mode: AuditMode::default(),
            registry_url: DEFAULT_PYPI_REGISTRY.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
