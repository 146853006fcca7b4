//! stringdb - An in-memory string analysis and lookup service
//!
//! Accepts text strings over HTTP, computes a fixed set of derived
//! properties for each, stores the results in memory, and supports
//! retrieval, filtered querying, fuzzy matching, and deletion.

pub mod analyzer;
pub mod cli;
pub mod http_server;
pub mod matcher;
pub mod observability;
pub mod query;
pub mod store;
