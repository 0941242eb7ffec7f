use serde::{Deserialize, Serialize};

/// A single cart entry, stored under its product id.
///
/// Quantity is deliberately signed: the quantity widget does not clamp, so
/// whatever it holds at "add to cart" time is persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: f64,
}

impl CartLine {
    pub fn new(product_id: impl Into<String>, quantity: i32, unit_price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            unit_price,
        }
    }
}

/// Notification delivered to listeners after a line has been written to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAddedEvent {
    pub product_id: String,
    pub quantity: i32,
}
