//! Audit outcome per entry and for the whole manifest

use std::process::ExitCode;

use crate::config::AuditMode;
use crate::parser::types::ManifestEntry;

/// Verdict for one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditVerdict {
    /// The pinned version is one of the safe versions
    pub is_safe: bool,
    /// Version the entry is rewritten to (rewrite mode only)
    pub replacement_version: Option<String>,
}

impl AuditVerdict {
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            replacement_version: None,
        }
    }

    pub fn unsafe_pin(replacement_version: Option<String>) -> Self {
        Self {
            is_safe: false,
            replacement_version,
        }
    }
}

/// Audit result of one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// Entry as read from the manifest
    pub entry: ManifestEntry,
    pub verdict: AuditVerdict,
    /// Highest version published before the cutoff, if any
    pub latest_safe: Option<String>,
}

impl EntryReport {
    /// Unsafe and left unchanged
    pub fn is_violation(&self) -> bool {
        !self.verdict.is_safe && self.verdict.replacement_version.is_none()
    }

    /// The entry as it is written back to the manifest
    pub fn rendered(&self) -> ManifestEntry {
        match &self.verdict.replacement_version {
            Some(version) => self.entry.with_version(version),
            None => self.entry.clone(),
        }
    }
}

/// Final status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    /// No violations, or every unsafe pin was replaced
    Success,
    /// At least one unsafe pin was left in place
    Violations,
}

impl AuditStatus {
    /// Process exit code for this status
    pub fn code(&self) -> u8 {
        match self {
            AuditStatus::Success => 0,
            AuditStatus::Violations => 2,
        }
    }
}

impl From<AuditStatus> for ExitCode {
    fn from(status: AuditStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Audit results for a whole manifest, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    mode: AuditMode,
    entries: Vec<EntryReport>,
}

impl AuditReport {
    pub fn new(mode: AuditMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: EntryReport) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[EntryReport] {
        &self.entries
    }

    /// Number of unsafe pins left in place
    pub fn violations(&self) -> usize {
        self.entries.iter().filter(|e| e.is_violation()).count()
    }

    /// Number of unsafe pins replaced by a safe version
    pub fn replaced(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.verdict.replacement_version.is_some())
            .count()
    }

    pub fn safe(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict.is_safe).count()
    }

    pub fn status(&self) -> AuditStatus {
        if self.violations() > 0 {
            AuditStatus::Violations
        } else {
            AuditStatus::Success
        }
    }

    /// Full manifest text to write back.
    ///
    /// Only produced in rewrite mode, and only when every entry is safe or
    /// replaced; the manifest is never written partially.
    pub fn rewritten_manifest(&self) -> Option<String> {
        if self.mode != AuditMode::Rewrite || self.violations() > 0 {
            return None;
        }

        Some(
            self.entries
                .iter()
                .map(|e| format!("{}\n", e.rendered()))
                .collect(),
        )
    }
}
