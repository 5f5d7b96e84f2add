//! Core scanning engine.
//!
//! - `annotation`: TODO record types and the per-file result map
//! - `scanner`: line-oriented comment parser producing annotations
//! - `file_scanner`: recursive source file discovery
//! - `blame`: `git blame` attribution
//! - `context`: orchestration of discovery, parallel scanning and attribution

pub mod annotation;
pub mod blame;
pub mod context;
pub mod file_scanner;
pub mod scanner;

pub use annotation::{AllFileAnnotations, Annotation, AttributedAnnotation};
pub use blame::{Attribution, BlameSource, FileBlame, GitBlame};
pub use context::{AttributedReport, ScanContext, ScanOutcome, attribute_annotations};
pub use scanner::{AnnotationScanner, TODO_MARKER, scan, scan_file};
