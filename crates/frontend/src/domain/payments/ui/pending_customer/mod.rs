use crate::config::ApiConfig;
use crate::layout::toast_service::ToastService;
use crate::layout::Modal;
use crate::shared::api::ApiClient;
use crate::shared::batch::run_batch;
use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::format::{format_currency, format_quantity};
use crate::shared::icons::icon;
use contracts::domain::{Customer, NewPayment, Order, PendingPaymentsResponse};
use contracts::enums::PaymentMethod;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{BTreeMap, HashMap, HashSet};
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummaryRow {
    pub product: String,
    pub total_quantity: f64,
    pub total_amount: f64,
}

/// Aggregate pending orders per product name. Lines without a subtotal
/// contribute quantity only; rows come out sorted by product name.
fn product_summary(orders: &[Order]) -> Vec<ProductSummaryRow> {
    let mut summary: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for order in orders {
        for line in &order.lines {
            let entry = summary.entry(line.product.clone()).or_insert((0.0, 0.0));
            entry.0 += line.quantity;
            entry.1 += line.subtotal.unwrap_or(0.0);
        }
    }
    summary
        .into_iter()
        .map(|(product, (total_quantity, total_amount))| ProductSummaryRow {
            product,
            total_quantity,
            total_amount,
        })
        .collect()
}

fn order_key(order: &Order) -> String {
    order.id.clone()
}

/// Unpaid orders of one customer: register payments one by one or settle
/// everything through the pay-all dialog.
#[component]
pub fn CustomerPendingPayments(customer_id: String) -> impl IntoView {
    let api = ApiClient::from_context();
    let config = expect_context::<ApiConfig>();
    let language = StoredValue::new(config.language.clone());
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let customer_id = StoredValue::new(customer_id);
    let orders = RwSignal::new(Vec::<Order>::new());
    let (customer, set_customer) = signal::<Option<String>>(None);
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // Per-order method picked in the table
    let payment_methods = RwSignal::new(HashMap::<String, String>::new());
    let (show_pay_all, set_show_pay_all) = signal(false);
    let (pay_date, set_pay_date) = signal(today_iso());
    let (pay_method, set_pay_method) = signal(PaymentMethod::Cash.code().to_string());
    let (processing, set_processing) = signal(false);
    let failed_rows = RwSignal::new(HashSet::<String>::new());
    let issued = StoredValue::new(0_u64);

    {
        let api = api.clone();
        spawn_local(async move {
            match api
                .get_json::<Customer>(&format!("/customers/{}", customer_id.get_value()))
                .await
            {
                Ok(c) => set_customer.set(Some(c.name)),
                Err(e) => log::warn!("failed to load customer: {e}"),
            }
        });
    }

    let fetch_pending = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let seq = issued.get_value() + 1;
            issued.set_value(seq);
            set_loading.set(true);
            let start = start_date.get_untracked();
            let end = end_date.get_untracked();
            spawn_local(async move {
                let mut path = format!(
                    "/payments/pending-payments?customerId={}",
                    urlencoding::encode(&customer_id.get_value())
                );
                if !start.is_empty() {
                    path.push_str(&format!("&startDate={}", urlencoding::encode(&start)));
                }
                if !end.is_empty() {
                    path.push_str(&format!("&endDate={}", urlencoding::encode(&end)));
                }
                let result = api.get_json::<PendingPaymentsResponse>(&path).await;
                if issued.get_value() != seq {
                    log::debug!("dropping stale pending-payments response");
                    return;
                }
                set_loading.set(false);
                match result {
                    Ok(response) => {
                        orders.set(response.orders);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    {
        let fetch_pending = fetch_pending.clone();
        Effect::new(move |_| {
            let _ = start_date.get();
            let _ = end_date.get();
            fetch_pending();
        });
    }

    let register_payment = {
        let api = api.clone();
        move |order_id: String| {
            let Some(method) = payment_methods
                .get_untracked()
                .get(&order_id)
                .and_then(|m| PaymentMethod::from_code(m))
            else {
                toasts.info("Select a payment method first");
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let payload = NewPayment {
                    order_id: order_id.clone(),
                    payment_method: method,
                    payment_date: today_iso(),
                };
                match api
                    .post_json::<NewPayment, serde_json::Value>("/payments", &payload)
                    .await
                {
                    Ok(_) => {
                        toasts.success("Payment registered");
                        orders.update(|list| {
                            if let Some(order) = list.iter_mut().find(|o| o.id == order_id) {
                                order.paid = true;
                            }
                        });
                    }
                    Err(e) => toasts.error(e),
                }
            });
        }
    };

    // Pay-all batch: continue past failures, mark each order by outcome
    let pay_all = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let unpaid: Vec<Order> = orders
                .get_untracked()
                .into_iter()
                .filter(|o| !o.paid)
                .collect();
            if unpaid.is_empty() {
                toasts.info("Nothing left to pay");
                return;
            }
            let Some(method) = PaymentMethod::from_code(&pay_method.get_untracked()) else {
                toasts.info("Select a payment method first");
                return;
            };
            let date = pay_date.get_untracked();
            let api = api.clone();
            set_processing.set(true);
            spawn_local(async move {
                let report = run_batch(&unpaid, order_key, |order| {
                    let api = api.clone();
                    let payload = NewPayment {
                        order_id: order.id.clone(),
                        payment_method: method,
                        payment_date: date.clone(),
                    };
                    async move {
                        api.post_json::<NewPayment, serde_json::Value>("/payments", &payload)
                            .await
                            .map(|_| ())
                    }
                })
                .await;
                set_processing.set(false);

                let paid_ids: HashSet<String> = report.succeeded_keys().into_iter().collect();
                orders.update(|list| {
                    for order in list.iter_mut() {
                        if paid_ids.contains(&order.id) {
                            order.paid = true;
                        }
                    }
                });
                failed_rows.set(
                    report
                        .failed()
                        .iter()
                        .map(|item| item.key.clone())
                        .collect(),
                );
                if report.all_succeeded() {
                    toasts.success("All payments registered");
                    set_show_pay_all.set(false);
                } else {
                    toasts.error(format!("Registering payments: {}", report.summary()));
                }
            });
        }
    });

    let summary = Signal::derive(move || product_summary(&orders.get()));
    let total_amount =
        Signal::derive(move || orders.get().iter().map(|o| o.total_amount).sum::<f64>());
    let has_orders = Signal::derive(move || !orders.get().is_empty());

    let on_close_modal = Callback::new(move |_| set_show_pay_all.set(false));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || customer.get().unwrap_or_else(|| "Pending payments".to_string())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <span class="page__total">
                        {move || {
                            format!(
                                "Total: {}",
                                format_currency(&language.get_value(), total_amount.get()),
                            )
                        }}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !has_orders.get())
                        on_click=move |_| set_show_pay_all.set(true)
                    >
                        {icon("payments")}
                        " Pay all orders"
                    </Button>
                </div>
            </div>

            <div class="page__toolbar">
                <label>"Start"</label>
                <DateInput
                    value=start_date
                    on_change=Callback::new(move |date: String| set_start_date.set(date))
                />
                <label>"End"</label>
                <DateInput
                    value=end_date
                    on_change=Callback::new(move |date: String| set_end_date.set(date))
                />
            </div>

            {move || {
                let rows = summary.get();
                if rows.is_empty() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div class="summary-box">
                        <h3 class="summary-box__title">"Product summary"</h3>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell">"Total quantity"</th>
                                    <th class="table__header-cell">"Total amount"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let amount = format_currency(
                                            &language.get_value(),
                                            row.total_amount,
                                        );
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.product}</td>
                                                <td class="table__cell">
                                                    {format_quantity(row.total_quantity)}
                                                </td>
                                                <td class="table__cell">{amount}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            {move || {
                let list = orders.get();
                if list.is_empty() && !loading.get() {
                    return view! { <div class="table__empty">"No pending payments"</div> }
                        .into_any();
                }
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Order date"</th>
                                    <th class="table__header-cell">"Products"</th>
                                    <th class="table__header-cell">"Total amount"</th>
                                    <th class="table__header-cell">"Payment method"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|order| {
                                        let id = order.id.clone();
                                        let id_for_method = id.clone();
                                        let id_for_method_change = id.clone();
                                        let id_for_register = id.clone();
                                        let id_for_failed = id.clone();
                                        let paid = order.paid;
                                        let date = format_date(&language.get_value(), &order.order_date);
                                        let products = order
                                            .lines
                                            .iter()
                                            .map(|l| l.product.clone())
                                            .collect::<Vec<_>>()
                                            .join(", ");
                                        let amount = format_currency(
                                            &language.get_value(),
                                            order.total_amount,
                                        );
                                        let register_payment = register_payment.clone();
                                        view! {
                                            <tr
                                                class="table__row"
                                                class:table__row--failed=move || {
                                                    failed_rows.get().contains(&id_for_failed)
                                                }
                                            >
                                                <td class="table__cell">{date}</td>
                                                <td class="table__cell">{products}</td>
                                                <td class="table__cell">{amount}</td>
                                                <td class="table__cell">
                                                    <select
                                                        disabled=paid
                                                        prop:value=move || {
                                                            payment_methods
                                                                .get()
                                                                .get(&id_for_method)
                                                                .cloned()
                                                                .unwrap_or_default()
                                                        }
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            payment_methods.update(|m| {
                                                                m.insert(id_for_method_change.clone(), value);
                                                            });
                                                        }
                                                    >
                                                        <option value="">"Select method"</option>
                                                        {PaymentMethod::all()
                                                            .into_iter()
                                                            .map(|method| {
                                                                view! {
                                                                    <option value=method.code()>
                                                                        {method.code()}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </td>
                                                <td class="table__cell">
                                                    {if paid {
                                                        view! {
                                                            <span class="badge badge--success">
                                                                {icon("check-circle")}
                                                            </span>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        view! {
                                                            <span class="badge badge--neutral">"Pending"</span>
                                                        }
                                                        .into_any()
                                                    }}
                                                </td>
                                                <td class="table__cell">
                                                    <button
                                                        class="icon-button"
                                                        title="Register payment"
                                                        disabled=paid
                                                        on:click=move |_| register_payment(id_for_register.clone())
                                                    >
                                                        {icon("save")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            <Modal is_open=show_pay_all on_close=on_close_modal title="Pay all orders">
                <div class="modal-form">
                    <div class="modal-form__row">
                        <span>"Total amount"</span>
                        <span>
                            {move || format_currency(&language.get_value(), total_amount.get())}
                        </span>
                    </div>
                    <div class="form-group">
                        <label>"Payment date"</label>
                        <DateInput
                            value=pay_date
                            on_change=Callback::new(move |date: String| set_pay_date.set(date))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Payment method"</label>
                        <select
                            prop:value=move || pay_method.get()
                            on:change=move |ev| set_pay_method.set(event_target_value(&ev))
                        >
                            {PaymentMethod::all()
                                .into_iter()
                                .map(|method| {
                                    view! {
                                        <option
                                            value=method.code()
                                            selected=move || pay_method.get() == method.code()
                                        >
                                            {method.code()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Order date"</th>
                                <th class="table__header-cell">"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || orders.get()
                                key=|order| order.id.clone()
                                children=move |order| {
                                    let date = format_date(&language.get_value(), &order.order_date);
                                    let amount = format_currency(
                                        &language.get_value(),
                                        order.total_amount,
                                    );
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{date}</td>
                                            <td class="table__cell">{amount}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || processing.get())
                        on_click=move |_| pay_all.run(())
                    >
                        {move || if processing.get() { "Processing..." } else { "Save" }}
                    </Button>
                </div>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(json: serde_json::Value) -> Order {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn summary_aggregates_by_product_name() {
        let orders = vec![
            order(serde_json::json!({
                "id": "o1",
                "customerId": "c1",
                "orderDate": "2026-03-02",
                "totalAmount": 40.0,
                "products": ["Milk", "Cheese"],
                "quantity": [2.0, 1.0],
                "subtotal": [10.0, 30.0],
                "status": "Pending"
            })),
            order(serde_json::json!({
                "id": "o2",
                "customerId": "c1",
                "orderDate": "2026-03-09",
                "totalAmount": 20.0,
                "products": ["Milk"],
                "quantity": [4.0],
                "subtotal": [20.0],
                "status": "Pending"
            })),
        ];
        let summary = product_summary(&orders);
        assert_eq!(summary.len(), 2);
        // BTreeMap order: Cheese before Milk
        assert_eq!(summary[0].product, "Cheese");
        assert_eq!(summary[0].total_quantity, 1.0);
        assert_eq!(summary[0].total_amount, 30.0);
        assert_eq!(summary[1].product, "Milk");
        assert_eq!(summary[1].total_quantity, 6.0);
        assert_eq!(summary[1].total_amount, 30.0);
    }

    #[test]
    fn summary_tolerates_missing_subtotals() {
        let orders = vec![order(serde_json::json!({
            "id": "o1",
            "customerId": "c1",
            "orderDate": "2026-03-02",
            "totalAmount": 0.0,
            "products": ["Bread"],
            "quantity": [2.0],
            "status": "Pending"
        }))];
        let summary = product_summary(&orders);
        assert_eq!(summary[0].total_quantity, 2.0);
        assert_eq!(summary[0].total_amount, 0.0);
    }
}
