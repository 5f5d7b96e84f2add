use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    config::ScanConfig,
    core::{
        annotation::{AllFileAnnotations, Annotation, AttributedAnnotation},
        blame::BlameSource,
        file_scanner::scan_files,
        scanner::scan_file,
    },
    error::ScanError,
};

/// Result of scanning every discovered file.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Annotations per successfully scanned file.
    pub annotations: AllFileAnnotations,

    /// Files that could not be read. They are absent from `annotations`.
    pub failed_files: Vec<PathBuf>,
}

impl ScanOutcome {
    pub fn files_scanned(&self) -> usize {
        self.annotations.len()
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.values().map(Vec::len).sum()
    }
}

/// Annotations after blame enrichment, in report order.
#[derive(Debug, Default)]
pub struct AttributedReport {
    pub annotations: Vec<AttributedAnnotation>,

    /// Files whose blame lookup failed; their annotations carry no attribution.
    pub unattributed_files: Vec<PathBuf>,
}

/// Orchestrates discovery, concurrent scanning and blame enrichment.
///
/// # Pipeline
///
/// 1. **Discovery**: [`ScanContext::new`] lists candidate files under the root
/// 2. **Scan**: [`ScanContext::collect_annotations`] scans files in parallel
/// 3. **Attribution**: [`attribute_annotations`] runs blame once per file,
///    sequentially, after every scan has finished
pub struct ScanContext {
    /// Canonicalized root directory.
    pub root_dir: PathBuf,

    /// All source files to scan, in discovery order.
    pub files: Vec<PathBuf>,
}

impl ScanContext {
    /// Resolve `root` and discover its source files.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Discovery`] if the root or any subdirectory
    /// cannot be listed.
    pub fn new(root: &Path, config: &ScanConfig) -> Result<Self, ScanError> {
        let root_dir = fs::canonicalize(root).map_err(|error| ScanError::Discovery {
            path: root.to_path_buf(),
            error,
        })?;

        let files = scan_files(&root_dir, config)?;
        tracing::debug!(
            "discovered {} file(s) under {}",
            files.len(),
            root_dir.display()
        );

        Ok(Self { root_dir, files })
    }

    /// Scan every discovered file on the rayon pool.
    ///
    /// Each worker owns its scanner state; results are merged sequentially
    /// once all workers have finished. A file that cannot be read is logged
    /// and skipped without affecting the others.
    pub fn collect_annotations(&self) -> ScanOutcome {
        let results: Vec<(PathBuf, Result<Vec<Annotation>, ScanError>)> = self
            .files
            .par_iter()
            .map(|path| (path.clone(), scan_file(path)))
            .collect();

        let mut outcome = ScanOutcome::default();
        for (path, result) in results {
            match result {
                Ok(annotations) => {
                    outcome.annotations.insert(path, annotations);
                }
                Err(err) => {
                    tracing::warn!("error occurred getting todos: {}", err);
                    outcome.failed_files.push(path);
                }
            }
        }

        outcome
    }
}

/// Attach blame attribution to every annotation.
///
/// Blame runs once per file that has annotations, strictly in path order.
/// Pass `None` to skip attribution entirely. A failed lookup is logged and
/// that file's annotations are returned without attribution.
pub fn attribute_annotations(
    annotations: &AllFileAnnotations,
    blame_source: Option<&dyn BlameSource>,
) -> AttributedReport {
    let mut report = AttributedReport::default();

    for (path, file_annotations) in annotations {
        if file_annotations.is_empty() {
            continue;
        }

        let blame = match blame_source.map(|source| source.blame(path)) {
            Some(Ok(blame)) => Some(blame),
            Some(Err(err)) => {
                tracing::warn!("{}", err);
                report.unattributed_files.push(path.clone());
                None
            }
            None => None,
        };

        let mut first_error = None;
        for annotation in file_annotations {
            let attribution = match &blame {
                Some(blame) => match blame.attribute(annotation.line_start) {
                    Ok(attribution) => Some(attribution),
                    Err(err) => {
                        first_error.get_or_insert(err);
                        None
                    }
                },
                None => None,
            };
            report.annotations.push(AttributedAnnotation {
                annotation: annotation.clone(),
                attribution,
            });
        }

        if let Some(err) = first_error {
            tracing::warn!("{}", err);
            report.unattributed_files.push(path.clone());
        }
    }

    report
}
