//! # String Analyzer
//!
//! Pure derivation of per-string properties. `analyze` is total and
//! deterministic: the same input always produces the same record, and the
//! record is never mutated after creation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The immutable analysis result stored per unique string.
///
/// All fields are derived from `string` at creation time. `length` counts
/// Unicode code points, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// The original input, verbatim
    pub string: String,

    /// Count of characters (code points) in the original string
    pub length: usize,

    /// True iff the string, stripped of non-alphanumerics and lowercased,
    /// reads the same forward and backward
    pub is_palindrome: bool,

    /// Count of whitespace-separated tokens
    pub word_count: usize,

    /// Distinct characters appearing in the string (order not significant)
    pub unique_characters: BTreeSet<char>,

    /// Occurrence count per character, duplicates included
    pub frequency: BTreeMap<char, u64>,

    /// Lowercase hex SHA-256 digest of the UTF-8 bytes
    pub sha256: String,
}

/// Analyze a string and produce its derived-fields record.
pub fn analyze(value: &str) -> StringRecord {
    StringRecord {
        string: value.to_string(),
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        word_count: word_count(value),
        unique_characters: unique_characters(value),
        frequency: char_frequency(value),
        sha256: sha256_hex(value),
    }
}

/// Palindrome check over the alphanumeric characters only.
///
/// Non-alphanumerics (spaces, punctuation) are stripped before comparison.
/// An earlier revision stripped spaces only; that behavior is superseded.
fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Count of non-empty whitespace-separated tokens.
fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// The set of distinct characters in the string.
fn unique_characters(value: &str) -> BTreeSet<char> {
    value.chars().collect()
}

/// Per-character occurrence counts. The map's size equals the cardinality
/// of `unique_characters`.
fn char_frequency(value: &str) -> BTreeMap<char, u64> {
    let mut freq = BTreeMap::new();
    for ch in value.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}

/// SHA-256 over the UTF-8 bytes, rendered as lowercase hex.
fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
