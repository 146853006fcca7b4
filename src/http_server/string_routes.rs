//! String HTTP Routes
//!
//! Endpoints for inserting, retrieving, querying, fuzzy-matching, and
//! deleting analyzed strings.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analyzer::StringRecord;
use crate::matcher;
use crate::observability::Logger;
use crate::query::{self, FilterCriteria};
use crate::store::StringStore;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// String store shared across handlers
pub struct StringState {
    pub store: StringStore,
}

impl StringState {
    pub fn new() -> Self {
        Self {
            store: StringStore::new(),
        }
    }
}

impl Default for StringState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<String>,
}

// ==================
// String Routes
// ==================

/// Create the string routes
pub fn string_routes(state: Arc<StringState>) -> Router {
    Router::new()
        .route("/strings", post(create_string_handler))
        .route("/strings", get(list_strings_handler))
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route("/strings/matches/{value}", get(find_matches_handler))
        .route("/strings/{value}", get(get_string_handler))
        .route("/strings/{value}", delete(delete_string_handler))
        .with_state(state)
}

/// Service description at the root path
pub fn root_routes() -> Router {
    Router::new().route("/", get(service_description_handler))
}

// ==================
// Handlers
// ==================

/// POST /strings - analyze and store a new string
async fn create_string_handler(
    State(state): State<Arc<StringState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    // An unparseable body is treated identically to a missing 'value' field
    let Json(body) = payload.map_err(|_| ApiError::MissingField)?;
    let value = body.get("value").ok_or(ApiError::MissingField)?;
    let value = value.as_str().ok_or(ApiError::WrongType)?;

    let record = state.store.insert(value)?;
    Logger::info(
        "string_inserted",
        &[("length", &record.length.to_string())],
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/{value} - retrieve the analysis of one string
async fn get_string_handler(
    State(state): State<Arc<StringState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    let record = state.store.get(&value)?;
    Ok(Json(record))
}

/// GET /strings - retrieve all strings, optionally filtered
async fn list_strings_handler(
    State(state): State<Arc<StringState>>,
    Query(criteria): Query<FilterCriteria>,
) -> ApiResult<Json<Vec<StringRecord>>> {
    let records = query::filter(state.store.list(), &criteria)?;
    Ok(Json(records))
}

/// GET /strings/filter-by-natural-language - keyword-driven filter
async fn natural_language_handler(
    State(state): State<Arc<StringState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> ApiResult<Json<Vec<StringRecord>>> {
    let text = params.query.unwrap_or_default();
    let records = query::filter_natural_language(state.store.list(), &text)?;
    Ok(Json(records))
}

/// DELETE /strings/{value} - delete a specific string
async fn delete_string_handler(
    State(state): State<Arc<StringState>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete(&value)?;
    Logger::info("string_deleted", &[]);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /strings/matches/{value} - find stored strings similar to a value
async fn find_matches_handler(
    State(state): State<Arc<StringState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<MatchesResponse>> {
    let matches = matcher::close_matches(&value, &state.store.keys())?;
    Ok(Json(MatchesResponse { matches }))
}

/// GET / - service description
async fn service_description_handler() -> Json<Value> {
    Json(json!({
        "service": "stringdb",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "In-memory string analysis and lookup service",
        "endpoints": {
            "POST /strings": "analyze and store a string",
            "GET /strings/{value}": "retrieve one analysis",
            "GET /strings": "list, with optional filters",
            "GET /strings/filter-by-natural-language": "keyword filter",
            "GET /strings/matches/{value}": "fuzzy match stored strings",
            "DELETE /strings/{value}": "delete a string",
        },
    }))
}
