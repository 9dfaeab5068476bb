//! Newline-delimited candidate file source.
//!
//! One candidate per line. Lines are trimmed of trailing whitespace, blank
//! lines are skipped, and file order is preserved.

use crate::SourceError;
use std::path::Path;

/// Load candidates from `path`.
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let candidates: Vec<String> = raw
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if candidates.is_empty() {
        return Err(SourceError::Empty(path.display().to_string()));
    }

    tracing::debug!(path = %path.display(), count = candidates.len(), "candidates loaded");
    Ok(candidates)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
