//! Safe-version resolution
//!
//! Reduces a package's release metadata and a cutoff into the versions that
//! were published before the cutoff.

use chrono::NaiveDateTime;

use crate::config::UPLOAD_TIME_FORMAT;
use crate::version::cutoff::Cutoff;
use crate::version::error::ResolveError;
use crate::version::pep440::sort_by_precedence;
use crate::version::types::{ReleaseSet, SafeVersionList};

/// Compute the versions with at least one upload strictly before `cutoff`.
///
/// Every upload time is parsed, so a malformed timestamp fails the whole
/// package even if another upload of the same version already qualified.
/// The result is sorted ascending by PEP 440 precedence.
pub fn resolve_safe(
    releases: &ReleaseSet,
    cutoff: &Cutoff,
) -> Result<SafeVersionList, ResolveError> {
    let mut safe = Vec::new();

    for (version, upload_times) in releases.iter() {
        let mut published_before = false;

        for upload_time in upload_times {
            let uploaded_at = parse_upload_time(version, upload_time)?;
            published_before |= cutoff.admits(uploaded_at);
        }

        if published_before {
            safe.push(version.to_string());
        }
    }

    sort_by_precedence(&mut safe);

    Ok(SafeVersionList::from_sorted(safe))
}

fn parse_upload_time(version: &str, upload_time: &str) -> Result<NaiveDateTime, ResolveError> {
    NaiveDateTime::parse_from_str(upload_time, UPLOAD_TIME_FORMAT).map_err(|source| {
        ResolveError::InvalidUploadTime {
            version: version.to_string(),
            upload_time: upload_time.to_string(),
            source,
        }
    })
}
