use serde::{Deserialize, Serialize};

/// Persisted line item of an order (GET `/order-details/order/:id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub subtotal: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for PUT `/order-details/:id`.
///
/// Both `quantity` and `subtotal` travel to the server; their mutual
/// consistency is the edit form's job (see `line_edit`), the API accepts
/// them as sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailUpdate {
    pub product_id: String,
    pub quantity: f64,
    pub subtotal: f64,
}

impl OrderDetailUpdate {
    pub fn from_detail(d: &OrderDetail) -> Self {
        Self {
            product_id: d.product_id.clone(),
            quantity: d.quantity,
            subtotal: d.subtotal,
        }
    }
}
