use crate::shared::api::ApiClient;
use crate::shared::components::customer_select::CustomerSelect;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::entity_table::{Column, EntityTable};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_ctrl::{ListController, ListState};
use contracts::domain::{Customer, Payment};
use contracts::list::SortDirection;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("Payment date", |p: &Payment| {
            Some(p.payment_date.split('T').next().unwrap_or("").to_string())
        }),
        Column::new("Order", |p: &Payment| Some(p.order_id.clone())),
        Column::new("Amount", |p: &Payment| Some(format!("{:.2}", p.amount))),
        Column::new("Method", |p: &Payment| {
            Some(p.payment_method.code().to_string())
        }),
        Column::new("Status", |p: &Payment| Some(p.status.clone())),
        Column::new("Transaction", |p: &Payment| {
            Some(p.transaction_id.clone())
        }),
    ]
}

/// Completed payments, server-paginated with customer and date filters.
#[component]
pub fn CompletedPayments() -> impl IntoView {
    let api = ApiClient::from_context();

    let ctrl = ListController::<Payment>::new(
        ListState::new().sorted_by("PaymentDate", SortDirection::Desc),
    );
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_json::<Vec<Customer>>("/customers").await {
                Ok(list) => set_customers.set(list),
                Err(e) => log::warn!("failed to load customers: {e}"),
            }
        });
    }

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let seq = ctrl.begin_fetch();
            spawn_local(async move {
                let query = ctrl.state.with_untracked(|s| s.to_query());
                let result = api.fetch_page::<Payment>("/payments", &query).await;
                ctrl.apply_page(seq, result);
            });
        }
    };

    Effect::new(move |_| {
        let _ = ctrl.state.with(|s| s.version());
        fetch();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Completed payments"</h1>
                </div>
                <div class="page__header-right">
                    <PaginationControls
                        current_page=Signal::derive(move || ctrl.state.with(|s| s.page()))
                        total_pages=Signal::derive(move || ctrl.total_pages())
                        total_count=Signal::derive(move || ctrl.total_records.get())
                        page_size=Signal::derive(move || ctrl.state.with(|s| s.page_size()))
                        on_page_change=Callback::new(move |page| {
                            ctrl.state.update(|s| s.set_page(page))
                        })
                        on_page_size_change=Callback::new(move |size| {
                            ctrl.state.update(|s| s.set_page_size(size))
                        })
                    />
                </div>
            </div>

            <div class="page__toolbar">
                <CustomerSelect
                    customers=customers
                    value=Signal::derive(move || {
                        ctrl.state.with(|s| s.filter("customerId").to_string())
                    })
                    on_change=Callback::new(move |id: String| {
                        ctrl.state.update(|s| s.set_filter("customerId", &id));
                    })
                />
                <label>"Start"</label>
                <DateInput
                    value=Signal::derive(move || {
                        ctrl.state.with(|s| s.filter("startDate").to_string())
                    })
                    on_change=Callback::new(move |date: String| {
                        ctrl.state.update(|s| s.set_filter("startDate", &date));
                    })
                />
                <label>"End"</label>
                <DateInput
                    value=Signal::derive(move || {
                        ctrl.state.with(|s| s.filter("endDate").to_string())
                    })
                    on_change=Callback::new(move |date: String| {
                        ctrl.state.update(|s| s.set_filter("endDate", &date));
                    })
                />
            </div>

            {move || ctrl.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || ctrl.loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            <EntityTable
                items=Signal::derive(move || ctrl.items.get())
                columns=columns()
                row_key=|p: &Payment| p.id.clone()
                empty_message="No completed payments"
            />
        </div>
    }
}
