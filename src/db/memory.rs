//! In-process stand-in for MongoDB used by handler tests.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use tokio::sync::Mutex;

use super::{OrderRepository, ProductRepository};
use crate::error::AppResult;
use crate::models::{Order, Product, ProductId};

/// Negative limits return nothing rather than wrapping.
fn capacity(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[derive(Default)]
pub struct MemoryStore {
    products: Mutex<Vec<(ProductId, Product)>>,
    orders: Mutex<Vec<(ObjectId, Order)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn insert(&self, product: &Product) -> AppResult<Bson> {
        let oid = ObjectId::new();
        self.products
            .lock()
            .await
            .push((ProductId::from(oid), product.clone()));
        Ok(Bson::ObjectId(oid))
    }

    async fn list(&self, limit: i64) -> AppResult<Vec<Product>> {
        let products = self.products.lock().await;
        Ok(products
            .iter()
            .take(capacity(limit))
            .map(|(_, p)| p.clone())
            .collect())
    }

    async fn update(&self, id: ProductId, product: &Product) -> AppResult<u64> {
        let mut products = self.products.lock().await;
        match products.iter_mut().find(|(pid, _)| *pid == id) {
            Some((_, stored)) => {
                *stored = product.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ProductId) -> AppResult<u64> {
        let mut products = self.products.lock().await;
        let before = products.len();
        if let Some(pos) = products.iter().position(|(pid, _)| *pid == id) {
            products.remove(pos);
        }
        Ok((before - products.len()) as u64)
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn insert(&self, order: &Order) -> AppResult<Bson> {
        let id = ObjectId::new();
        self.orders.lock().await.push((id, order.clone()));
        Ok(Bson::ObjectId(id))
    }

    async fn list(&self, limit: i64) -> AppResult<Vec<Order>> {
        let orders = self.orders.lock().await;
        Ok(orders
            .iter()
            .take(capacity(limit))
            .map(|(_, o)| o.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn negative_limit_lists_nothing() {
        let store = MemoryStore::new();
        ProductRepository::insert(
            &store,
            &Product {
                name: "Burger".to_string(),
                price: 5.99,
            },
        )
        .await
        .unwrap();
        OrderRepository::insert(
            &store,
            &Order {
                product_id: "x".to_string(),
                quantity: 1,
            },
        )
        .await
        .unwrap();

        assert!(ProductRepository::list(&store, -1).await.unwrap().is_empty());
        assert!(OrderRepository::list(&store, -1).await.unwrap().is_empty());
        assert_eq!(ProductRepository::list(&store, 1).await.unwrap().len(), 1);
    }
}
