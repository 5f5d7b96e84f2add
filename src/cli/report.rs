//! Report formatting and printing.
//!
//! Kept apart from the core so todoscan can be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::core::{AttributedAnnotation, AttributedReport, ScanOutcome};

/// Separator printed before every TODO in text output.
pub const SEPARATOR: &str = "===========================";

/// Counts shown alongside the annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    /// Files whose TODOs are reported without blame attribution.
    pub files_unattributed: usize,
}

impl ReportSummary {
    pub fn new(outcome: &ScanOutcome, report: &AttributedReport) -> Self {
        Self {
            files_scanned: outcome.files_scanned(),
            files_failed: outcome.failed_files.len(),
            files_unattributed: report.unattributed_files.len(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    todos: &'a [AttributedAnnotation],
    #[serde(flatten)]
    summary: ReportSummary,
}

/// Print the text report to stdout.
pub fn print_text(report: &AttributedReport, summary: ReportSummary) {
    let _ = write_text(report, summary, &mut io::stdout().lock());
}

/// Print the JSON report to stdout.
pub fn print_json(report: &AttributedReport, summary: ReportSummary) -> Result<()> {
    write_json(report, summary, &mut io::stdout().lock())
}

/// Write the text report to a custom writer.
pub fn write_text<W: Write>(
    report: &AttributedReport,
    summary: ReportSummary,
    writer: &mut W,
) -> io::Result<()> {
    for todo in &report.annotations {
        write_annotation(todo, writer)?;
    }

    let count = report.annotations.len();
    writeln!(
        writer,
        "{}",
        format!(
            "Found {} {} in {} {}",
            count,
            if count == 1 { "TODO" } else { "TODOs" },
            summary.files_scanned,
            if summary.files_scanned == 1 { "file" } else { "files" }
        )
        .bold()
    )
}

/// Write the JSON report to a custom writer.
pub fn write_json<W: Write>(
    report: &AttributedReport,
    summary: ReportSummary,
    writer: &mut W,
) -> Result<()> {
    let json = JsonReport {
        todos: &report.annotations,
        summary,
    };
    serde_json::to_writer_pretty(&mut *writer, &json)?;
    writeln!(writer)?;
    Ok(())
}

fn write_annotation<W: Write>(todo: &AttributedAnnotation, writer: &mut W) -> io::Result<()> {
    let annotation = &todo.annotation;

    writeln!(writer, "{}", SEPARATOR.dimmed())?;
    if let Some(attribution) = &todo.attribution {
        writeln!(writer, "{} {}", "TODO by:".bold(), attribution.committer)?;
        writeln!(
            writer,
            "{} {}",
            "Committed at:".bold(),
            attribution.committed_at
        )?;
    }
    writeln!(
        writer,
        "Found TODO in file '{}' starting at: {}, ending at: {}:",
        annotation.file_path.display().to_string().cyan(),
        annotation.line_start,
        annotation.line_end
    )?;
    writeln!(writer, "{}", "Content:".bold())?;
    writeln!(writer, "{}", annotation.content)?;
    writeln!(writer)
}
