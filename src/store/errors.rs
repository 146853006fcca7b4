//! # Store Errors
//!
//! Error types for the string store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// String store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Insert of a value that is already a key
    #[error("Already exists")]
    AlreadyExists,

    /// Lookup or delete of a value that is not stored
    #[error("String not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::AlreadyExists.to_string(), "Already exists");
        assert_eq!(StoreError::NotFound.to_string(), "String not found");
    }
}
