use std::{collections::BTreeMap, path::PathBuf};

use serde::Serialize;

use super::blame::Attribution;

/// A TODO comment found in a source file.
///
/// `line_start` and `line_end` are 1-based and inclusive, and
/// `line_start <= line_end` always holds. `content` is the raw text of every
/// contributing line joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub file_path: PathBuf,
    pub content: String,
    pub line_start: usize,
    pub line_end: usize,
}

/// An annotation together with its blame attribution, if one was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributedAnnotation {
    #[serde(flatten)]
    pub annotation: Annotation,
    #[serde(flatten)]
    pub attribution: Option<Attribution>,
}

/// Annotations for every successfully scanned file, keyed by path.
///
/// Files that were scanned but contain no TODOs map to an empty vector.
pub type AllFileAnnotations = BTreeMap<PathBuf, Vec<Annotation>>;
