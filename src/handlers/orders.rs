use std::time::Instant;

use axum::{extract::State, Json};
use tracing::info;

use crate::{db::LIST_LIMIT, error::AppResult, models::Order, AppState};

/// Orders are stored as submitted; `product_id` is not looked up.
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<Order>,
) -> AppResult<Json<Order>> {
    let start = Instant::now();
    let id = state.orders.insert(&payload).await?;

    info!(
        id = %id,
        product_id = %payload.product_id,
        quantity = payload.quantity,
        elapsed_ms = start.elapsed().as_millis(),
        "Placed order"
    );

    Ok(Json(payload))
}

pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let start = Instant::now();
    let orders = state.orders.list(LIST_LIMIT).await?;

    info!(
        count = orders.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed orders"
    );

    Ok(Json(orders))
}
