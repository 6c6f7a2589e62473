use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    db::LIST_LIMIT,
    error::{AppError, AppResult},
    models::{Product, ProductId},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Product>,
) -> AppResult<Json<Product>> {
    let start = Instant::now();
    let id = state.products.insert(&payload).await?;

    info!(
        id = %id,
        name = %payload.name,
        elapsed_ms = start.elapsed().as_millis(),
        "Created product"
    );

    Ok(Json(payload))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let start = Instant::now();
    let products = state.products.list(LIST_LIMIT).await?;

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok(Json(products))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Unknown ids are not an error: the store matches nothing and the submitted
/// payload is echoed back. An id that is not an ObjectId can match nothing, so
/// it gets the same treatment without a round trip to the store.
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<Product>,
) -> AppResult<Json<Product>> {
    let id = match raw_id.parse::<ProductId>() {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Update matched no product");
            return Ok(Json(payload));
        }
    };

    let start = Instant::now();
    let matched = state.products.update(id, &payload).await?;

    if matched == 0 {
        warn!(id = %id, "Update matched no product");
    } else {
        info!(
            id = %id,
            elapsed_ms = start.elapsed().as_millis(),
            "Updated product"
        );
    }

    Ok(Json(payload))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = match raw_id.parse::<ProductId>() {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Delete matched no product");
            return Err(not_found(&raw_id));
        }
    };

    let start = Instant::now();
    let deleted = state.products.delete(id).await?;

    if deleted != 1 {
        return Err(not_found(&raw_id));
    }

    info!(
        id = %id,
        elapsed_ms = start.elapsed().as_millis(),
        "Deleted product"
    );

    Ok(Json(json!({ "message": "Product deleted" })))
}

fn not_found(raw_id: &str) -> AppError {
    AppError::NotFound(format!("Product {} not found", raw_id))
}
