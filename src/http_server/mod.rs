//! # stringdb HTTP Server Module
//!
//! Axum-based HTTP API over the in-memory string store.
//!
//! # Endpoints
//!
//! - `/` - Service description
//! - `/strings` - Insert (POST) and list/filter (GET)
//! - `/strings/{value}` - Retrieve (GET) and delete (DELETE)
//! - `/strings/filter-by-natural-language` - Keyword filter
//! - `/strings/matches/{value}` - Fuzzy matching

pub mod config;
pub mod errors;
pub mod server;
pub mod string_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use string_routes::StringState;
