use crate::enums::UnitOfMeasure;
use serde::{Deserialize, Serialize};

/// Product record as returned by the API.
///
/// `price` is a snapshot; price history is owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit_of_measure: UnitOfMeasure,
    pub price: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for POST/PUT `/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: String,
    pub description: String,
    pub unit_of_measure: UnitOfMeasure,
    pub price: f64,
}

impl Default for ProductData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            unit_of_measure: UnitOfMeasure::Unit,
            price: 0.0,
        }
    }
}

impl ProductData {
    pub fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            unit_of_measure: p.unit_of_measure,
            price: p.price,
        }
    }
}
