use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{
    AuditConfig, AuditMode, DEFAULT_CONCURRENCY, DEFAULT_MANIFEST_PATH, DEFAULT_PYPI_REGISTRY,
};
use crate::logging::LogOptions;
use crate::version::cutoff::Cutoff;

#[derive(Debug, Parser)]
#[command(name = "pydep-check")]
#[command(
    version,
    about = "Command line tool for checking Python 3 dependencies publish date"
)]
pub struct Cli {
    /// Path to requirements.txt, or a directory containing it
    #[arg(short, long, default_value = DEFAULT_MANIFEST_PATH)]
    pub path: PathBuf,

    /// Last safe date for packages (e.g. 23/02/2022 or 2022-02-23)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Rewrite unsafe versions in the file to the last safe one
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub handle: bool,

    /// Base URL of the package index
    #[arg(long, default_value = DEFAULT_PYPI_REGISTRY)]
    pub registry_url: String,

    /// Number of packages looked up at the same time
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub jobs: NonZeroUsize,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Build the audit settings, falling back to the default cutoff when the
    /// date is missing or unparseable
    pub fn audit_config(&self) -> AuditConfig {
        AuditConfig {
            manifest_path: self.path.clone(),
            cutoff: self
                .date
                .as_deref()
                .map(Cutoff::parse_or_default)
                .unwrap_or_default(),
            mode: AuditMode::from_handle(self.handle),
            registry_url: self.registry_url.clone(),
            concurrency: self.jobs,
        }
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            json: self.log_json,
            file: self.log_file.clone(),
        }
    }
}
