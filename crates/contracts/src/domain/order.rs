use crate::enums::{OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

/// One product line of an order.
///
/// The API ships orders with parallel `products[]` / `quantity[]` /
/// `subtotal[]` arrays; the client model zips them into line structs at
/// the serde boundary so index-alignment mistakes cannot reach UI code.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: String,
    pub quantity: f64,
    /// Present only on endpoints that return per-line subtotals
    pub subtotal: Option<f64>,
}

/// Order record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrderWire", into = "OrderWire")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub order_date: String,
    pub total_amount: f64,
    pub lines: Vec<OrderLine>,
    pub generated: bool,
    pub status: OrderStatus,
    pub payment_method: Option<PaymentMethod>,
    /// Client-side marker set after a payment was registered in this
    /// session; the canonical state lives behind the API.
    pub paid: bool,
}

impl Order {
    pub fn product_names(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.product.as_str()).collect()
    }
}

/// Wire shape with parallel arrays. A short `quantity`/`subtotal` tail is
/// padded with defaults rather than dropped, so a malformed record still
/// renders every product name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderWire {
    id: String,
    customer_id: String,
    #[serde(default)]
    customer_name: String,
    order_date: String,
    #[serde(default)]
    total_amount: f64,
    #[serde(default)]
    products: Vec<String>,
    #[serde(default)]
    quantity: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtotal: Option<Vec<f64>>,
    #[serde(default)]
    generated: bool,
    status: OrderStatus,
    #[serde(default)]
    payment_method: Option<PaymentMethod>,
    #[serde(default)]
    paid: bool,
}

impl From<OrderWire> for Order {
    fn from(w: OrderWire) -> Self {
        let lines = w
            .products
            .into_iter()
            .enumerate()
            .map(|(i, product)| OrderLine {
                product,
                quantity: w.quantity.get(i).copied().unwrap_or_default(),
                subtotal: w.subtotal.as_ref().and_then(|s| s.get(i).copied()),
            })
            .collect();
        Self {
            id: w.id,
            customer_id: w.customer_id,
            customer_name: w.customer_name,
            order_date: w.order_date,
            total_amount: w.total_amount,
            lines,
            generated: w.generated,
            status: w.status,
            payment_method: w.payment_method,
            paid: w.paid,
        }
    }
}

impl From<Order> for OrderWire {
    fn from(o: Order) -> Self {
        let has_subtotals = o.lines.iter().any(|l| l.subtotal.is_some());
        let subtotal = has_subtotals.then(|| {
            o.lines
                .iter()
                .map(|l| l.subtotal.unwrap_or_default())
                .collect()
        });
        Self {
            id: o.id,
            customer_id: o.customer_id,
            customer_name: o.customer_name,
            order_date: o.order_date,
            total_amount: o.total_amount,
            products: o.lines.iter().map(|l| l.product.clone()).collect(),
            quantity: o.lines.iter().map(|l| l.quantity).collect(),
            subtotal,
            generated: o.generated,
            status: o.status,
            payment_method: o.payment_method,
            paid: o.paid,
        }
    }
}

/// Line of a new order being composed (POST `/orders` payload)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderLine {
    pub product_id: String,
    pub quantity: f64,
}

/// Payload for POST `/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: String,
    pub order_date: String,
    pub order_details: Vec<NewOrderLine>,
}

/// Payload for PUT `/orders?id=` (status transitions happen server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_arrays_zip_into_lines() {
        let json = r#"{
            "id": "o1",
            "customerId": "c1",
            "customerName": "Ana",
            "orderDate": "2026-03-02",
            "totalAmount": 55.0,
            "products": ["Milk", "Cheese"],
            "quantity": [2.0, 1.5],
            "subtotal": [10.0, 45.0],
            "status": "Pending"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].product, "Milk");
        assert_eq!(order.lines[0].quantity, 2.0);
        assert_eq!(order.lines[1].subtotal, Some(45.0));
        assert!(!order.paid);
    }

    #[test]
    fn short_quantity_tail_is_padded() {
        let json = r#"{
            "id": "o2",
            "customerId": "c1",
            "orderDate": "2026-03-02",
            "products": ["Milk", "Cheese", "Bread"],
            "quantity": [2.0],
            "status": "Completed"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.lines.len(), 3);
        assert_eq!(order.lines[0].quantity, 2.0);
        assert_eq!(order.lines[1].quantity, 0.0);
        assert_eq!(order.lines[2].subtotal, None);
    }

    #[test]
    fn lines_split_back_into_parallel_arrays() {
        let order = Order {
            id: "o3".into(),
            customer_id: "c2".into(),
            customer_name: "Bob".into(),
            order_date: "2026-03-09".into(),
            total_amount: 30.0,
            lines: vec![
                OrderLine {
                    product: "Milk".into(),
                    quantity: 3.0,
                    subtotal: Some(30.0),
                },
            ],
            generated: false,
            status: OrderStatus::Pending,
            payment_method: Some(PaymentMethod::Pix),
            paid: false,
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["products"], serde_json::json!(["Milk"]));
        assert_eq!(value["quantity"], serde_json::json!([3.0]));
        assert_eq!(value["subtotal"], serde_json::json!([30.0]));
        assert_eq!(value["paymentMethod"], serde_json::json!("Pix"));
    }
}
