use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod exit_status;
pub mod logging;
pub mod report;
mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    logging::init(args.verbose, args.quiet);

    let summary = run::run(args)?;
    if summary.files_failed > 0 {
        tracing::debug!("{} file(s) could not be read", summary.files_failed);
    }
    if summary.files_unattributed > 0 {
        tracing::debug!(
            "{} file(s) reported without attribution",
            summary.files_unattributed
        );
    }

    Ok(ExitStatus::Success.into())
}
