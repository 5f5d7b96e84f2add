use anyhow::{Context, Result};

use super::{
    args::{Arguments, OutputFormat},
    report::{self, ReportSummary},
};
use crate::{
    config::ScanConfig,
    core::{BlameSource, GitBlame, ScanContext, attribute_annotations},
};

/// Run a full scan for the parsed arguments and print the report.
///
/// # Returns
/// - `Ok(ReportSummary)` once the report has been printed, even if some
///   files could not be read or attributed
/// - `Err` if the configuration is invalid or the root cannot be listed
pub fn run(args: Arguments) -> Result<ReportSummary> {
    let config = ScanConfig::from_extensions(&args.extensions)?;

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.get())
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let ctx = ScanContext::new(&args.path, &config)?;
    let outcome = ctx.collect_annotations();

    let git_blame = GitBlame;
    let blame_source: Option<&dyn BlameSource> = if args.no_blame {
        None
    } else {
        Some(&git_blame)
    };
    let attributed = attribute_annotations(&outcome.annotations, blame_source);

    let summary = ReportSummary::new(&outcome, &attributed);
    match args.format {
        OutputFormat::Text => report::print_text(&attributed, summary),
        OutputFormat::Json => report::print_json(&attributed, summary)?,
    }

    Ok(summary)
}
