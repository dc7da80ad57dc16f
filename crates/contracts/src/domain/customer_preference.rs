use crate::enums::Weekday;
use serde::{Deserialize, Serialize};

/// Standing purchase preference used to batch-generate future orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPreference {
    pub id: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub preferred_purchase_day: Weekday,
    pub quantity: f64,
}

/// Payload for POST/PUT `/customer-preferences`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceData {
    pub customer_id: String,
    pub product_id: String,
    pub preferred_purchase_day: Weekday,
    pub quantity: f64,
}

impl PreferenceData {
    pub fn from_preference(p: &CustomerPreference) -> Self {
        Self {
            customer_id: p.customer_id.clone(),
            product_id: p.product_id.clone(),
            preferred_purchase_day: p.preferred_purchase_day,
            quantity: p.quantity,
        }
    }
}
