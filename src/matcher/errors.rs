//! # Matcher Errors
//!
//! Error types for fuzzy matching.

use thiserror::Error;

/// Result type for matcher operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Fuzzy matching errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The candidate set was empty; nothing to match against
    #[error("No strings available")]
    NoCandidates,
}
