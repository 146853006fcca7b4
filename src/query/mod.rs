//! # Query Engine
//!
//! Applies a conjunction of optional filters to the store's current
//! contents. Filters are evaluated in a fixed order (palindrome, then
//! length_gt, then word_count, then query) and each one narrows the previous
//! result set. Evaluation short-circuits with an error the moment an invalid
//! value is encountered; no partial results are returned on error.
//!
//! A second, natural-language mode matches a record if any one of four
//! keyword conditions holds (OR semantics).

mod errors;

use serde::Deserialize;

use crate::analyzer::StringRecord;

pub use errors::{QueryError, QueryResult};

/// Length above which a record counts as "long" in natural-language mode
const LONG_LENGTH: usize = 10;

/// Length at or below which a record counts as "short"
const SHORT_LENGTH: usize = 5;

/// Distinct-character count above which a record counts as "unique"
const UNIQUE_CHARS: usize = 5;

/// Recognized filter options, carried as the raw query-parameter text.
///
/// Values are parsed during evaluation so that unparseable text surfaces as
/// `InvalidFilterValue` rather than a generic extraction failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    /// Textual literal "true" or "false"
    #[serde(default)]
    pub is_palindrome: Option<String>,

    /// Keep records with `length` strictly greater than this integer
    #[serde(default)]
    pub length_gt: Option<String>,

    /// Keep records with `word_count` exactly equal to this integer
    #[serde(default)]
    pub word_count: Option<String>,

    /// Case-insensitive substring over `string` or `sha256`
    #[serde(default)]
    pub query: Option<String>,
}

impl FilterCriteria {
    /// Whether no filter option was supplied
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.length_gt.is_none()
            && self.word_count.is_none()
            && self.query.is_none()
    }
}

/// Apply all supplied filters (AND semantics) to `records`.
///
/// With no criteria the input is returned unfiltered.
pub fn filter(records: Vec<StringRecord>, criteria: &FilterCriteria) -> QueryResult<Vec<StringRecord>> {
    let mut filtered = records;

    if let Some(raw) = &criteria.is_palindrome {
        let expected = parse_bool_literal(raw)
            .ok_or_else(|| QueryError::InvalidFilterValue("is_palindrome".to_string()))?;
        filtered.retain(|r| r.is_palindrome == expected);
    }

    if let Some(raw) = &criteria.length_gt {
        let limit: i64 = raw
            .parse()
            .map_err(|_| QueryError::InvalidFilterValue("length_gt".to_string()))?;
        filtered.retain(|r| r.length as i64 > limit);
    }

    if let Some(raw) = &criteria.word_count {
        let count: i64 = raw
            .parse()
            .map_err(|_| QueryError::InvalidFilterValue("word_count".to_string()))?;
        filtered.retain(|r| r.word_count as i64 == count);
    }

    if let Some(text) = &criteria.query {
        let needle = text.to_lowercase();
        filtered.retain(|r| {
            r.string.to_lowercase().contains(&needle) || r.sha256.contains(&needle)
        });
    }

    Ok(filtered)
}

/// Apply the natural-language filter to `records`.
///
/// A record matches if any of these holds:
/// - the query mentions "palindrome" and the record is one
/// - the query mentions "long" and `length > 10`
/// - the query mentions "short" and `length <= 5`
/// - the query mentions "unique" and the record has more than 5 distinct
///   characters
pub fn filter_natural_language(
    records: Vec<StringRecord>,
    query: &str,
) -> QueryResult<Vec<StringRecord>> {
    if query.is_empty() {
        return Err(QueryError::MissingQuery);
    }

    let text = query.to_lowercase();
    let matched = records
        .into_iter()
        .filter(|r| {
            (text.contains("palindrome") && r.is_palindrome)
                || (text.contains("long") && r.length > LONG_LENGTH)
                || (text.contains("short") && r.length <= SHORT_LENGTH)
                || (text.contains("unique") && r.unique_characters.len() > UNIQUE_CHARS)
        })
        .collect();

    Ok(matched)
}

/// Strict boolean literal parse; anything but "true"/"false" is invalid.
fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
