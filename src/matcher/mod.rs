//! # Fuzzy Matcher
//!
//! Approximate lookup of stored keys by sequence similarity. Similarity is
//! the classic ratio 2·LCS(a, b) / (|a| + |b|) over code points, where LCS
//! is the longest common subsequence length. Identical strings score 1.0,
//! fully disjoint strings 0.0.
//!
//! Candidates scoring below the cutoff are dropped; the survivors are
//! returned best-first, ties broken by original candidate order, capped at
//! `MAX_MATCHES`.

mod errors;

pub use errors::{MatchError, MatchResult};

/// Maximum number of matches returned
const MAX_MATCHES: usize = 5;

/// Minimum similarity (inclusive) for a candidate to be kept
const SIMILARITY_CUTOFF: f64 = 0.4;

/// Find the closest candidates to `query`.
///
/// Fails with `NoCandidates` only when `candidates` is empty; a result where
/// nothing clears the cutoff is an empty list, not an error.
pub fn close_matches(query: &str, candidates: &[String]) -> MatchResult<Vec<String>> {
    if candidates.is_empty() {
        return Err(MatchError::NoCandidates);
    }

    let query_chars: Vec<char> = query.chars().collect();

    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (similarity(&query_chars, candidate), candidate))
        .filter(|(score, _)| *score >= SIMILARITY_CUTOFF)
        .collect();

    // Stable sort keeps original candidate order among equal scores
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored
        .into_iter()
        .take(MAX_MATCHES)
        .map(|(_, candidate)| candidate.clone())
        .collect())
}

/// Sequence similarity of `query` (pre-split into chars) and `candidate`.
fn similarity(query_chars: &[char], candidate: &str) -> f64 {
    let candidate_chars: Vec<char> = candidate.chars().collect();
    let total = query_chars.len() + candidate_chars.len();
    if total == 0 {
        // Two empty strings are identical
        return 1.0;
    }

    let common = lcs_length(query_chars, &candidate_chars);
    2.0 * common as f64 / total as f64
}

/// Longest common subsequence length, O(n·m) dynamic programming with a
/// rolling single-row table.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_candidate_set_is_an_error() {
        assert_eq!(close_matches("anything", &[]).unwrap_err(), MatchError::NoCandidates);
    }

    #[test]
    fn test_exact_match_scores_first() {
        let cands = candidates(&["apple", "apply", "banana"]);
        let matches = close_matches("apple", &cands).unwrap();
        assert_eq!(matches[0], "apple");
    }

    #[test]
    fn test_transposed_query_finds_close_keys() {
        let cands = candidates(&["apple", "apply", "apricot"]);
        let matches = close_matches("appel", &cands).unwrap();

        assert!(!matches.is_empty());
        assert_eq!(matches[0], "apple");
        for m in &matches {
            assert!(cands.contains(m));
        }
    }

    #[test]
    fn test_cutoff_excludes_dissimilar_candidates() {
        let cands = candidates(&["apple", "zzzzzz"]);
        let matches = close_matches("apple", &cands).unwrap();
        assert_eq!(matches, vec!["apple"]);
    }

    #[test]
    fn test_no_candidate_clears_cutoff_returns_empty_not_error() {
        let cands = candidates(&["xyz", "qqq"]);
        let matches = close_matches("apple", &cands).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_at_most_five_matches() {
        let cands = candidates(&[
            "apple1", "apple2", "apple3", "apple4", "apple5", "apple6", "apple7",
        ]);
        let matches = close_matches("apple", &cands).unwrap();
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        // Equidistant candidates; stable sort preserves input order
        let cands = candidates(&["abcx", "abcy", "abcz"]);
        let matches = close_matches("abc", &cands).unwrap();
        assert_eq!(matches, vec!["abcx", "abcy", "abcz"]);
    }

    #[test]
    fn test_similarity_ratio_values() {
        let q: Vec<char> = "appel".chars().collect();
        // LCS("appel", "apple") = 4 -> 2*4/10
        assert!((similarity(&q, "apple") - 0.8).abs() < 1e-9);
        // LCS("appel", "appel") = 5 -> 1.0
        assert!((similarity(&q, "appel") - 1.0).abs() < 1e-9);
        assert_eq!(similarity(&q, ""), 0.0);
    }

    #[test]
    fn test_empty_query_against_empty_candidate() {
        let q: Vec<char> = Vec::new();
        assert_eq!(similarity(&q, ""), 1.0);
    }

    #[test]
    fn test_lcs_length_basics() {
        let a: Vec<char> = "abcde".chars().collect();
        let b: Vec<char> = "ace".chars().collect();
        assert_eq!(lcs_length(&a, &b), 3);
        assert_eq!(lcs_length(&a, &[]), 0);
    }
}
