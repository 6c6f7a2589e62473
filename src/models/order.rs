use serde::{Deserialize, Serialize};

/// An order line. `product_id` is a free-form reference and is never
/// checked against the `products` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub product_id: String,
    pub quantity: i64,
}
