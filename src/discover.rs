use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect every file under `root` whose name ends with `suffix`.
///
/// Matching is a plain suffix check (e.g., ".cpp", ".h"), order is
/// directory-walk order, and a missing root yields an empty list.
pub fn find_files(root: &Path, suffix: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(suffix))
        .map(|entry| entry.into_path())
        .collect()
}
