//! Classifies manifest entries against the versions published before a cutoff

use std::num::NonZeroUsize;
use std::sync::Arc;

use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, error, info, warn};

use crate::audit::error::AuditError;
use crate::audit::report::{AuditReport, AuditVerdict, EntryReport};
use crate::config::AuditMode;
use crate::parser::types::ManifestEntry;
use crate::version::cutoff::Cutoff;
use crate::version::registry::Registry;
use crate::version::resolver::resolve_safe;
use crate::version::types::SafeVersionList;

/// Audits manifest entries against one cutoff for the whole run
pub struct Auditor {
    registry: Arc<dyn Registry>,
    cutoff: Cutoff,
    mode: AuditMode,
    concurrency: NonZeroUsize,
}

impl Auditor {
    /// Create an auditor that processes one package at a time
    pub fn new(registry: Arc<dyn Registry>, cutoff: Cutoff, mode: AuditMode) -> Self {
        Self {
            registry,
            cutoff,
            mode,
            concurrency: NonZeroUsize::MIN,
        }
    }

    /// Allow up to `concurrency` registry lookups in flight
    pub fn with_concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Audit every entry and collect the verdicts in manifest order.
    ///
    /// Lookups may overlap, but results are consumed in input order, so
    /// verdicts, logs and counts are the same as for a sequential run. The
    /// first registry or resolution failure aborts the audit.
    pub async fn audit(
        &self,
        entries: impl IntoIterator<Item = ManifestEntry>,
    ) -> Result<AuditReport, AuditError> {
        let resolved: Vec<(ManifestEntry, SafeVersionList)> = stream::iter(entries)
            .map(|entry| async move {
                let safe = self.safe_versions(&entry.name).await?;
                Ok::<_, AuditError>((entry, safe))
            })
            .buffered(self.concurrency.get())
            .try_collect()
            .await?;

        let mut report = AuditReport::new(self.mode);
        for (entry, safe) in resolved {
            report.push(self.judge(entry, &safe));
        }

        info!(
            "Checked {} packages against {}: {} safe, {} replaced, {} violations",
            report.entries().len(),
            self.cutoff,
            report.safe(),
            report.replaced(),
            report.violations()
        );

        Ok(report)
    }

    /// Fetch a package's releases and reduce them to the safe versions
    async fn safe_versions(&self, package: &str) -> Result<SafeVersionList, AuditError> {
        let releases = self
            .registry
            .fetch_releases(package)
            .await
            .map_err(|source| AuditError::Registry {
                package: package.to_string(),
                source,
            })?;

        let safe = resolve_safe(&releases, &self.cutoff).map_err(|source| AuditError::Resolve {
            package: package.to_string(),
            source,
        })?;

        debug!(
            "{} of {} releases of {} are safe",
            safe.len(),
            releases.len(),
            package
        );

        Ok(safe)
    }

    /// Decide the verdict for one entry
    fn judge(&self, entry: ManifestEntry, safe: &SafeVersionList) -> EntryReport {
        let latest_safe = safe.latest().map(str::to_string);

        if safe.contains(&entry.version) {
            debug!("{} is safe", entry);
            return EntryReport {
                entry,
                verdict: AuditVerdict::safe(),
                latest_safe,
            };
        }

        let verdict = match (self.mode, latest_safe.as_deref()) {
            (AuditMode::Report, latest) => {
                error!(
                    "User requested unsafe version for package {}, last safe version: {}",
                    entry,
                    latest.unwrap_or("none")
                );
                AuditVerdict::unsafe_pin(None)
            }
            (AuditMode::Rewrite, Some(latest)) => {
                warn!(
                    "Changing version for package {} from {} to last safe: {}",
                    entry.name, entry.version, latest
                );
                AuditVerdict::unsafe_pin(Some(latest.to_string()))
            }
            (AuditMode::Rewrite, None) => {
                error!(
                    "Cannot change version for package {}: no release was published before {}",
                    entry.name, self.cutoff
                );
                AuditVerdict::unsafe_pin(None)
            }
        };

        EntryReport {
            entry,
            verdict,
            latest_safe,
        }
    }
}
