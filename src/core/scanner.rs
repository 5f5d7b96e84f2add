//! Line-oriented TODO comment scanner.
//!
//! The scanner walks source text one line at a time and tracks whether it is
//! in plain code, a run of `//` line comments, or a `/* */` block comment.
//! Classification only looks at a line's leading content:
//!
//! - a line whose trimmed text starts with `//` is a line comment
//! - a line whose trimmed text starts with `/*` opens a block comment, which
//!   stays open until a line whose trimmed text ends with `*/`
//!
//! The first comment line containing [`TODO_MARKER`] opens an annotation. The
//! annotation keeps absorbing lines until its comment region ends: the first
//! line not starting with `//` for a line-comment run, or the line holding
//! `*/` (inclusive) for a block comment. Input that ends inside a comment
//! closes the annotation at the last line.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::annotation::Annotation;
use crate::error::ScanError;

/// Literal marker searched for inside comments. Matching is a plain
/// substring search, so `TODOLIST` matches too.
pub const TODO_MARKER: &str = "TODO";

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    Normal,
    LineComment,
    BlockComment,
}

/// An annotation that is still accumulating lines.
#[derive(Debug)]
struct PendingAnnotation {
    line_start: usize,
    line_end: usize,
    content: String,
}

impl PendingAnnotation {
    fn open(line_num: usize, text: &str) -> Self {
        Self {
            line_start: line_num,
            line_end: line_num,
            content: text.to_string(),
        }
    }

    fn push_line(&mut self, line_num: usize, text: &str) {
        self.content.push('\n');
        self.content.push_str(text);
        self.line_end = line_num;
    }
}

/// Incremental scanner state for one file.
///
/// Feed lines in order with [`AnnotationScanner::feed_line`] and call
/// [`AnnotationScanner::finish`] at end of input. Most callers want [`scan`].
pub struct AnnotationScanner {
    file_path: PathBuf,
    state: CommentState,
    line_num: usize,
    pending: Option<PendingAnnotation>,
    annotations: Vec<Annotation>,
}

impl AnnotationScanner {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            state: CommentState::Normal,
            line_num: 0,
            pending: None,
            annotations: Vec::new(),
        }
    }

    /// Process the next line of input (without its line terminator).
    pub fn feed_line(&mut self, line: &str) {
        // `str::lines` leaves a lone `\r` on an unterminated last line.
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.line_num += 1;
        let trimmed = line.trim();

        if self.state == CommentState::BlockComment {
            self.observe_comment_line(line);
            if trimmed.ends_with(BLOCK_CLOSE) {
                self.close_region();
            }
            return;
        }

        if trimmed.starts_with(LINE_COMMENT) {
            self.state = CommentState::LineComment;
            self.observe_comment_line(line);
            return;
        }

        // Anything else ends a pending line-comment run.
        self.close_region();

        if let Some(rest) = trimmed.strip_prefix(BLOCK_OPEN) {
            self.state = CommentState::BlockComment;
            self.observe_comment_line(line);
            if rest.ends_with(BLOCK_CLOSE) {
                self.close_region();
            }
        }
    }

    /// Flush any annotation left open at end of input and return all
    /// annotations in the order they were opened.
    pub fn finish(mut self) -> Vec<Annotation> {
        self.close_region();
        self.annotations
    }

    fn observe_comment_line(&mut self, line: &str) {
        if let Some(pending) = &mut self.pending {
            pending.push_line(self.line_num, line);
        } else if line.contains(TODO_MARKER) {
            self.pending = Some(PendingAnnotation::open(self.line_num, line));
        }
    }

    fn close_region(&mut self) {
        self.state = CommentState::Normal;
        if let Some(pending) = self.pending.take() {
            self.annotations.push(Annotation {
                file_path: self.file_path.clone(),
                content: pending.content,
                line_start: pending.line_start,
                line_end: pending.line_end,
            });
        }
    }
}

/// Extract every TODO annotation from `text`.
///
/// Never fails: unterminated block comments are closed at the last line.
pub fn scan(text: &str, file_path: impl Into<PathBuf>) -> Vec<Annotation> {
    let mut scanner = AnnotationScanner::new(file_path);
    for line in text.lines() {
        scanner.feed_line(line);
    }
    scanner.finish()
}

/// Read `path` and extract its TODO annotations.
///
/// Invalid UTF-8 is replaced rather than rejected, so the only failure is an
/// I/O error while reading.
pub fn scan_file(path: &Path) -> Result<Vec<Annotation>, ScanError> {
    let bytes = fs::read(path).map_err(|error| ScanError::FileRead {
        path: path.to_path_buf(),
        error,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(scan(&text, path))
}
