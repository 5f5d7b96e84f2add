//! todoscan - find TODO comments in source trees
//!
//! todoscan is a CLI tool and library that walks a directory tree, extracts
//! TODO annotations from `//` and `/* */` comments, and attributes each one
//! to its last committer with `git blame`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, logging, report output)
//! - `config`: Scan configuration (file extensions)
//! - `core`: Scanner, file discovery, blame and orchestration
//! - `error`: Error taxonomy shared by all layers

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
