//! Product catalog routes — the emulated third-party API surface.
//!
//! JSON Endpoints:
//! - `POST   /__reset`          — reinstall the seed records
//! - `GET    /products`         — fixed-window listing (`?limit=N`)
//! - `GET    /products/{id}`    — fetch one record by id
//! - `POST   /products/add`     — create a record from a partial payload
//! - `PUT    /products/{id}`    — shallow-merge update of one record
//! - `DELETE /products/{id}`    — remove one record
//!
//! The only failure the surface signals is 404 `{"message": "Not found"}`
//! for get/update/delete on an absent id. Everything else is defaulted
//! rather than rejected.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use stubmart_core::{CatalogStore, NewProduct, Product, ProductPage, ProductPatch};

#[derive(Clone)]
pub struct CatalogState {
    store: Arc<CatalogStore>,
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub ok: bool,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
}

fn not_found() -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError { message: "Not found".to_string() }))
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(store: Arc<CatalogStore>) -> Router {
    Router::new()
        .route("/__reset", post(reset_catalog))
        .route("/products", get(list_products))
        .route("/products/add", post(add_product))
        .route("/products/{id}", get(get_product).put(update_product).delete(delete_product))
        .with_state(CatalogState { store })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Reinstall the seed records, discarding everything else.
async fn reset_catalog(State(state): State<CatalogState>) -> Json<ResetResponse> {
    let total = state.store.reset();
    Json(ResetResponse { ok: true, total })
}

/// Fixed-window listing over the collection.
async fn list_products(
    State(state): State<CatalogState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductPage> {
    Json(state.store.list(parse_limit(query.limit.as_deref())))
}

async fn get_product(
    Path(raw_id): Path<String>,
    State(state): State<CatalogState>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(not_found());
    };
    state.store.get(id).map(Json).map_err(|_| not_found())
}

/// Create a record from the (mostly optional) add payload. Never fails:
/// missing fields fall back to fixed defaults.
async fn add_product(
    State(state): State<CatalogState>,
    Json(draft): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let record = state.store.add(draft);
    (StatusCode::CREATED, Json(record))
}

async fn update_product(
    Path(raw_id): Path<String>,
    State(state): State<CatalogState>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(not_found());
    };
    state.store.update(id, patch).map(Json).map_err(|_| not_found())
}

async fn delete_product(
    Path(raw_id): Path<String>,
    State(state): State<CatalogState>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ApiError>)> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(not_found());
    };
    state.store.remove(id).map(|()| Json(DeleteResponse { ok: true })).map_err(|_| not_found())
}

// An id that does not parse behaves like an id that is not in the
// collection, matching the emulated service.
fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

// Absent or unusable limits fall back to the store default; negative values
// clamp to zero like the emulated service's `Math.max(0, ...)`.
fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let raw = raw?;
    raw.trim().parse::<i64>().ok().map(|value| value.max(0) as usize)
}
