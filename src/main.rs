use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use pydep_check::cli::Cli;
use pydep_check::logging;
use pydep_check::runner;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&cli.log_options())?;
    let config = cli.audit_config();

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(runner::run(&config));

    match result {
        Ok(status) => Ok(status.into()),
        Err(e) => {
            error!("{:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
