//! # Query Errors
//!
//! Error types for filter evaluation.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Filter evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A filter option was supplied with an unparseable value
    #[error("Invalid {0} value")]
    InvalidFilterValue(String),

    /// The natural-language endpoint was called without a query
    #[error("Missing 'query' parameter")]
    MissingQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_value_names_the_option() {
        let err = QueryError::InvalidFilterValue("length_gt".to_string());
        assert_eq!(err.to_string(), "Invalid length_gt value");
    }
}
