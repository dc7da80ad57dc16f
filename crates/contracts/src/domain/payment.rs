use crate::domain::order::Order;
use crate::enums::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Completed payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub customer_id: String,
    pub amount: f64,
    pub payment_date: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Payload for POST `/payments` — one payment settles one order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub order_id: String,
    pub payment_method: PaymentMethod,
    pub payment_date: String,
}

/// Per-customer aggregate in the pending-payments summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPendingPayment {
    pub customer_id: String,
    pub customer_name: String,
    pub total_pending_amount: f64,
}

/// Envelope of GET `/payments/pending-payments`.
///
/// Without a `customerId` filter the summary rows carry the data; with
/// one, `orders` holds that customer's unpaid orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPaymentsResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub customer_pending_payment: Vec<CustomerPendingPayment>,
    #[serde(default)]
    pub total_pending_amount: f64,
    #[serde(default)]
    pub total_records: u64,
}
