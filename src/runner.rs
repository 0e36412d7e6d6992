//! Runs one audit from configuration to exit status

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::audit::{AuditStatus, Auditor};
use crate::config::AuditConfig;
use crate::manifest;
use crate::parser::error::ParseError;
use crate::parser::requirements_txt::RequirementsTxtParser;
use crate::version::registries::PypiRegistry;
use crate::version::registry::Registry;

/// Audit the configured manifest against PyPI
pub async fn run(config: &AuditConfig) -> anyhow::Result<AuditStatus> {
    let registry = PypiRegistry::new(&config.registry_url)
        .context("Failed to create PyPI registry client")?;

    run_with_registry(config, Arc::new(registry)).await
}

/// Audit the configured manifest against the given registry.
///
/// The whole manifest is read and parsed before any registry lookup, and it
/// is rewritten only after every entry has been audited.
pub async fn run_with_registry(
    config: &AuditConfig,
    registry: Arc<dyn Registry>,
) -> anyhow::Result<AuditStatus> {
    let path = manifest::resolve_path(&config.manifest_path)?;
    let content = manifest::read(&path)?;

    let entries = RequirementsTxtParser::new()
        .entries(&content)
        .collect::<Result<Vec<_>, ParseError>>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    info!(
        "Auditing {} packages from {} against {}",
        entries.len(),
        path.display(),
        config.cutoff
    );

    let auditor =
        Auditor::new(registry, config.cutoff, config.mode).with_concurrency(config.concurrency);
    let report = auditor.audit(entries).await?;

    if let Some(rewritten) = report.rewritten_manifest() {
        manifest::write(&path, &rewritten)?;
    }

    Ok(report.status())
}
