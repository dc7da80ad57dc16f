use crate::shared::icons::icon;
use contracts::domain::Order;
use contracts::enums::Weekday;
use leptos::prelude::*;

/// The one localStorage key of the app: hands the selected orders from
/// the list page to the print page.
const PRINT_ORDERS_KEY: &str = "bizflow.print_orders";

pub fn store_print_orders(orders: &[Order]) -> Result<(), String> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage is not available".to_string())?;
    let payload = serde_json::to_string(orders).map_err(|e| format!("{e}"))?;
    storage
        .set_item(PRINT_ORDERS_KEY, &payload)
        .map_err(|_| "failed to store print payload".to_string())
}

fn load_print_orders() -> Vec<Order> {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return Vec::new();
    };
    let Ok(Some(payload)) = storage.get_item(PRINT_ORDERS_KEY) else {
        return Vec::new();
    };
    serde_json::from_str(&payload).unwrap_or_default()
}

/// Delivery-run order: by date, then by customer name
fn sort_orders(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        a.order_date
            .cmp(&b.order_date)
            .then_with(|| a.customer_name.cmp(&b.customer_name))
    });
}

#[component]
pub fn PrintOrders() -> impl IntoView {
    let mut orders = load_print_orders();
    sort_orders(&mut orders);
    let orders = StoredValue::new(orders);

    let handle_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="page page--print">
            <div class="page__header no-print">
                <div class="page__header-left">
                    <h1 class="page__title">"Print orders"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=handle_print>
                        {icon("printer")}
                        "Print"
                    </button>
                </div>
            </div>

            {move || {
                let list = orders.get_value();
                if list.is_empty() {
                    return view! {
                        <div class="table__empty">"Nothing selected for printing"</div>
                    }
                    .into_any();
                }
                view! {
                    <table class="print-table">
                        <thead>
                            <tr>
                                <th>"Day"</th>
                                <th>"Customer"</th>
                                <th>"Product"</th>
                                <th>"Quantity"</th>
                                <th>"Done"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .flat_map(|order| {
                                    let day = Weekday::from_iso_date(&order.order_date)
                                        .map(|d| d.code())
                                        .unwrap_or("-");
                                    let customer = order.customer_name.clone();
                                    order
                                        .lines
                                        .iter()
                                        .map(|line| {
                                            let quantity = if line.quantity > 0.0 {
                                                line.quantity.to_string()
                                            } else {
                                                "-".to_string()
                                            };
                                            view! {
                                                <tr>
                                                    <td>{day}</td>
                                                    <td>{customer.clone()}</td>
                                                    <td>{line.product.clone()}</td>
                                                    <td>{quantity}</td>
                                                    <td>
                                                        <input type="checkbox" />
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OrderStatus;

    fn order(id: &str, date: &str, customer: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "customerId": "c1",
            "customerName": customer,
            "orderDate": date,
            "totalAmount": 0.0,
            "products": [],
            "quantity": [],
            "status": "Pending"
        }))
        .unwrap()
    }

    #[test]
    fn sorts_by_date_then_customer() {
        let mut orders = vec![
            order("o1", "2026-03-10", "Bob"),
            order("o2", "2026-03-09", "Zoe"),
            order("o3", "2026-03-10", "Ana"),
        ];
        sort_orders(&mut orders);
        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o3", "o1"]);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }
}
