//! Prefix matcher — the synchronous lookup the timing controllers wrap.
//!
//! Matching is case-insensitive prefix comparison. Candidates keep their
//! original casing in the result, and candidate-set iteration order is
//! preserved (stable, never sorted).

/// Return every candidate whose lower-cased form starts with the lower-cased
/// `term`, in candidate order.
///
/// Total and synchronous: never fails. An empty `term` matches every
/// candidate; callers that want empty input to mean "no search" must check
/// before calling (the executor does).
pub fn prefix_matches(term: &str, candidates: &[String]) -> Vec<String> {
    let needle = term.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["daniel0113", "rebeka", "kriszta", "Krisztián01"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn matches_single_prefix() {
        assert_eq!(prefix_matches("dan", &candidates()), vec!["daniel0113"]);
    }

    #[test]
    fn matches_case_insensitively_preserving_casing() {
        // "kri" must hit both kriszta and Krisztián01, original casing intact
        assert_eq!(
            prefix_matches("kri", &candidates()),
            vec!["kriszta", "Krisztián01"]
        );
        assert_eq!(
            prefix_matches("KRI", &candidates()),
            vec!["kriszta", "Krisztián01"]
        );
    }

    #[test]
    fn preserves_candidate_order() {
        let set: Vec<String> = ["bbb", "abc", "aaa", "abd"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(prefix_matches("a", &set), vec!["abc", "aaa", "abd"]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(prefix_matches("zzz", &candidates()).is_empty());
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(prefix_matches("", &candidates()).len(), 4);
    }
}
