use anyhow::Context;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson},
    Client,
};
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Order, Product, ProductId};

#[cfg(test)]
pub mod memory;
mod mongo;

pub use mongo::{MongoOrderRepository, MongoProductRepository};

pub const PRODUCTS: &str = "products";
pub const ORDERS: &str = "orders";

/// Upper bound on records returned by any listing.
pub const LIST_LIMIT: i64 = 1000;

// ── Repositories ──────────────────────────────────────────────────────────────

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product, returning the `_id` the store assigned. Only used
    /// for logging, so it is passed through as raw BSON.
    async fn insert(&self, product: &Product) -> AppResult<Bson>;

    /// At most `limit` products, in store order.
    async fn list(&self, limit: i64) -> AppResult<Vec<Product>>;

    /// Overwrite every field of the matching product. Returns the number of
    /// records matched, 0 when the id is unknown.
    async fn update(&self, id: ProductId, product: &Product) -> AppResult<u64>;

    /// Returns the number of records removed.
    async fn delete(&self, id: ProductId) -> AppResult<u64>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: &Order) -> AppResult<Bson>;

    async fn list(&self, limit: i64) -> AppResult<Vec<Order>>;
}

// ── Connection ────────────────────────────────────────────────────────────────

/// Build the shared client and make sure the server answers before we start
/// accepting requests.
pub async fn connect(config: &Config) -> anyhow::Result<Client> {
    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .context("MONGO_URL is not a valid connection string")?;

    client
        .database(&config.mongo_database)
        .run_command(doc! { "ping": 1 })
        .await
        .with_context(|| format!("MongoDB at {} did not answer ping", config.mongo_url))?;

    info!(database = %config.mongo_database, "MongoDB connection established.");
    Ok(client)
}
