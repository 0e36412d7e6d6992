//! Dependency audit layer
//!
//! Combines the manifest entries with the safe versions of each package and
//! turns them into verdicts.
//!
//! # Modules
//!
//! - [`auditor`]: Fetches, resolves and classifies every entry
//! - [`report`]: Per-entry verdicts, exit status and rewritten manifest
//! - [`error`]: Errors that abort an audit

pub mod auditor;
pub mod error;
pub mod report;

pub use auditor::Auditor;
pub use error::AuditError;
pub use report::{AuditReport, AuditStatus, AuditVerdict, EntryReport};
