//! # String Store
//!
//! In-memory map from string value to its analysis record. The string value
//! is the primary key; records are immutable once inserted, so the only
//! mutations are insert and delete.
//!
//! A single coarse `RwLock` guards the map. The store is shared across
//! concurrently-dispatched request handlers, so every mutation and every
//! iteration takes the lock for its full duration.

mod errors;

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::analyzer::{analyze, StringRecord};

pub use errors::{StoreError, StoreResult};

/// Thread-safe in-memory store of analyzed strings.
///
/// Enumeration order is the key order of the underlying `BTreeMap`, which is
/// deterministic; callers must not rely on any particular order beyond that.
pub struct StringStore {
    records: RwLock<BTreeMap<String, StringRecord>>,
}

impl StringStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Analyze `value` and insert its record.
    ///
    /// Fails with `AlreadyExists` if `value` is already a key; the existing
    /// record is left untouched.
    pub fn insert(&self, value: &str) -> StoreResult<StringRecord> {
        let mut records = self.records.write().unwrap();

        if records.contains_key(value) {
            return Err(StoreError::AlreadyExists);
        }

        let record = analyze(value);
        records.insert(value.to_string(), record.clone());
        Ok(record)
    }

    /// Look up the record for `value`.
    pub fn get(&self, value: &str) -> StoreResult<StringRecord> {
        let records = self.records.read().unwrap();
        records.get(value).cloned().ok_or(StoreError::NotFound)
    }

    /// Remove the record for `value`.
    pub fn delete(&self, value: &str) -> StoreResult<()> {
        let mut records = self.records.write().unwrap();
        match records.remove(value) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    /// All stored records, in deterministic key order.
    pub fn list(&self) -> Vec<StringRecord> {
        let records = self.records.read().unwrap();
        records.values().cloned().collect()
    }

    /// All stored string values, in deterministic key order.
    pub fn keys(&self) -> Vec<String> {
        let records = self.records.read().unwrap();
        records.keys().cloned().collect()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

impl Default for StringStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_get_round_trips() {
        let store = StringStore::new();
        let inserted = store.insert("hello").unwrap();
        let fetched = store.get("hello").unwrap();
        assert_eq!(inserted, fetched);
        assert_eq!(fetched, analyze("hello"));
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let store = StringStore::new();
        store.insert("hello world").unwrap();
        assert_eq!(
            store.insert("hello world").unwrap_err(),
            StoreError::AlreadyExists
        );
        // The original record survives the failed insert
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = StringStore::new();
        assert_eq!(store.get("nope").unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_delete_removes_record() {
        let store = StringStore::new();
        store.insert("hello").unwrap();
        store.delete("hello").unwrap();
        assert_eq!(store.get("hello").unwrap_err(), StoreError::NotFound);
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = StringStore::new();
        assert_eq!(store.delete("never inserted").unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_list_and_keys_are_order_insensitive_equal_sets() {
        let store = StringStore::new();
        for value in ["banana", "apple", "cherry"] {
            store.insert(value).unwrap();
        }

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["apple", "banana", "cherry"]);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_concurrent_inserts_keep_one_record_per_value() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(StringStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let _ = store.insert("contended");
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 1);
    }
}
