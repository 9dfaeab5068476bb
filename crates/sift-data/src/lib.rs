//! sift-data — candidate set sources for sift.
//!
//! Each source produces an ordered `Vec<String>` of candidates for the
//! search executor. Order matters: the executor presents matches in
//! candidate iteration order, so sources must preserve it.

pub mod file;

pub use file::from_file;

use thiserror::Error;

/// Failure loading a candidate set.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read candidate file: {0}")]
    Io(#[from] std::io::Error),
    /// A file yielding zero candidates is a misconfiguration, not an
    /// empty-but-valid set — a typeahead over nothing helps nobody.
    #[error("candidate file {0} contains no candidates")]
    Empty(String),
}

/// The embedded demo candidate set, used when no file is given.
pub fn builtin() -> Vec<String> {
    ["daniel0113", "rebeka", "kriszta", "Krisztián01"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_is_nonempty_and_ordered() {
        let set = builtin();
        assert_eq!(set.first().map(String::as_str), Some("daniel0113"));
        assert_eq!(set.len(), 4);
    }
}
