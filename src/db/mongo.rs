use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::FindOptions,
    Collection, Database,
};
use tracing::instrument;

use super::{OrderRepository, ProductRepository, ORDERS, PRODUCTS};
use crate::error::AppResult;
use crate::models::{Order, Product, ProductId};

fn capped(limit: i64) -> FindOptions {
    FindOptions::builder().limit(limit).build()
}

fn id_filter(id: ProductId) -> Document {
    doc! { "_id": id.object_id() }
}

fn set_all_fields(product: &Product) -> Document {
    doc! {
        "$set": {
            "name": product.name.as_str(),
            "price": product.price,
        }
    }
}

// ── Products ──────────────────────────────────────────────────────────────────

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>(PRODUCTS),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn insert(&self, product: &Product) -> AppResult<Bson> {
        let result = self.collection.insert_one(product).await?;
        Ok(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> AppResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(doc! {})
            .with_options(capped(limit))
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self, product), fields(id = %id))]
    async fn update(&self, id: ProductId, product: &Product) -> AppResult<u64> {
        let result = self
            .collection
            .update_one(id_filter(id), set_all_fields(product))
            .await?;
        Ok(result.matched_count)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ProductId) -> AppResult<u64> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count)
    }
}

// ── Orders ────────────────────────────────────────────────────────────────────

pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Order>(ORDERS),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, order), fields(product_id = %order.product_id))]
    async fn insert(&self, order: &Order) -> AppResult<Bson> {
        let result = self.collection.insert_one(order).await?;
        Ok(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> AppResult<Vec<Order>> {
        let cursor = self
            .collection
            .find(doc! {})
            .with_options(capped(limit))
            .await?;
        let orders: Vec<Order> = cursor.try_collect().await?;
        Ok(orders)
    }
}
