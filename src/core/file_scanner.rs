use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{config::ScanConfig, error::ScanError};

/// Recursively list source files under `root`.
///
/// Hidden directories (name starting with `.`) are never entered, except the
/// root itself. Only regular files whose extension is listed in `config`
/// are returned, sorted by name at each directory level. Any directory that
/// cannot be listed aborts discovery with [`ScanError::Discovery`].
pub fn scan_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_dir(entry));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_scannable_file(entry.path(), config) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

fn is_scannable_file(path: &Path, config: &ScanConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.matches_extension(ext))
}
