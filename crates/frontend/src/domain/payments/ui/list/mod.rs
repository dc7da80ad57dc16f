use crate::config::ApiConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::ApiClient;
use crate::shared::components::customer_select::CustomerSelect;
use crate::shared::format::format_currency;
use crate::shared::icons::icon;
use contracts::domain::{Customer, CustomerPendingPayment, PendingPaymentsResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pending payments grouped by customer; a row opens that customer's
/// unpaid orders.
#[component]
pub fn PendingPaymentsSummary() -> impl IntoView {
    let api = ApiClient::from_context();
    let config = expect_context::<ApiConfig>();
    let language = StoredValue::new(config.language.clone());
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let (rows, set_rows) = signal::<Vec<CustomerPendingPayment>>(Vec::new());
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (selected_customer, set_selected_customer) = signal(String::new());
    let (total_pending, set_total_pending) = signal(0.0_f64);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let issued = StoredValue::new(0_u64);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let seq = issued.get_value() + 1;
            issued.set_value(seq);
            set_loading.set(true);
            let customer_id = selected_customer.get_untracked();
            spawn_local(async move {
                let path = if customer_id.is_empty() {
                    "/payments/pending-payments".to_string()
                } else {
                    format!(
                        "/payments/pending-payments?customerId={}",
                        urlencoding::encode(&customer_id)
                    )
                };
                let result = api.get_json::<PendingPaymentsResponse>(&path).await;
                if issued.get_value() != seq {
                    log::debug!("dropping stale pending-payments response");
                    return;
                }
                set_loading.set(false);
                match result {
                    Ok(response) => {
                        set_total_pending.set(response.total_pending_amount);
                        // The summary doubles as the customer source for
                        // the filter select
                        if customer_id.is_empty() {
                            let customer_list = response
                                .customer_pending_payment
                                .iter()
                                .map(|row| Customer {
                                    customer_id: row.customer_id.clone(),
                                    name: row.customer_name.clone(),
                                    email: String::new(),
                                    phone_number: String::new(),
                                    address: String::new(),
                                    created_at: String::new(),
                                    updated_at: String::new(),
                                })
                                .collect();
                            set_customers.set(customer_list);
                        }
                        set_rows.set(response.customer_pending_payment);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    {
        let fetch = fetch.clone();
        Effect::new(move |_| {
            let _ = selected_customer.get();
            fetch();
        });
    }

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pending payments"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__total">
                        {move || {
                            format!(
                                "Total pending: {}",
                                format_currency(&language.get_value(), total_pending.get()),
                            )
                        }}
                    </span>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            tabs_store.open_tab("payments_completed", "Completed payments")
                        }
                    >
                        {icon("check-circle")}
                        "Completed payments"
                    </button>
                </div>
            </div>

            <div class="page__toolbar">
                <CustomerSelect
                    customers=customers
                    value=selected_customer
                    on_change=Callback::new(move |id: String| set_selected_customer.set(id))
                />
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            {move || {
                let list = rows.get();
                if list.is_empty() && !loading.get() {
                    return view! { <div class="table__empty">"No pending payments"</div> }
                        .into_any();
                }
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell">"Pending amount"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.customer_id.clone();
                                        let name = row.customer_name.clone();
                                        let amount = format_currency(
                                            &language.get_value(),
                                            row.total_pending_amount,
                                        );
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{name.clone()}</td>
                                                <td class="table__cell">{amount}</td>
                                                <td class="table__cell">
                                                    <button
                                                        class="icon-button"
                                                        title="Open pending orders"
                                                        on:click=move |_| {
                                                            tabs_store.open_tab(
                                                                &format!("payments_pending_{}", id),
                                                                &format!("Pending: {}", name),
                                                            );
                                                        }
                                                    >
                                                        {icon("eye")}
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
        </div>
    }
}
