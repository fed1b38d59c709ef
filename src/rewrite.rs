use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};

use crate::error::Result;

/// Apply literal substring replacements to a file in place.
///
/// The file is read fully into memory, every `(old, new)` pair applied in
/// order, and the content written back unconditionally - a pair that matches
/// nothing is a silent no-op and the file is rewritten unchanged.
pub fn replace_in_file(path: &Path, replacements: &[(String, String)]) -> Result<()> {
    let mut content = fs::read_to_string(path)?;
    for (old, new) in replacements {
        content = content.replace(old.as_str(), new);
    }
    fs::write(path, content)?;
    Ok(())
}

/// Apply regex replacements to a file in place.
///
/// Every occurrence of each pattern is replaced with the paired literal text.
/// As with [`replace_in_file`], the file is written back even when nothing
/// matched.
pub fn regex_replace_in_file(path: &Path, substitutions: &[(Regex, String)]) -> Result<()> {
    let mut content = fs::read_to_string(path)?;
    for (pattern, replacement) in substitutions {
        content = pattern
            .replace_all(&content, NoExpand(replacement.as_str()))
            .into_owned();
    }
    fs::write(path, content)?;
    Ok(())
}
