use crate::config::ApiConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::shared::api::ApiClient;
use crate::shared::components::customer_select::CustomerSelect;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_currency, format_quantity};
use crate::shared::icons::icon;
use crate::shared::list_ctrl::{ListController, ListState};
use contracts::domain::{Customer, Order, OrderStatusUpdate};
use contracts::enums::OrderStatus;
use contracts::list::SortDirection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};

fn row_key(order: &Order) -> String {
    order.id.clone()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let api = ApiClient::from_context();
    let config = expect_context::<ApiConfig>();
    let language = StoredValue::new(config.language.clone());
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let ctrl = ListController::<Order>::new(
        ListState::new().sorted_by("OrderDate", SortDirection::Desc),
    );
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let is_filter_expanded = RwSignal::new(true);
    // Per-row pending status selections, applied on save
    let editable_status = RwSignal::new(HashMap::<String, String>::new());
    let print_selection = RwSignal::new(HashSet::<String>::new());

    // Customer names come from a separate fetch; orders may arrive with a
    // bare customerId
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
                let result = api.fetch_page::<Order>("/orders", &query).await;
                ctrl.apply_page(seq, result);
            });
        }
    };

    // One refetch per tracked state change
    {
        let fetch = fetch.clone();
        Effect::new(move |_| {
            let _ = ctrl.state.with(|s| s.version());
            fetch();
        });
    }

    let customer_name = move |order: &Order| -> String {
        if !order.customer_name.is_empty() {
            return order.customer_name.clone();
        }
        let id = order.customer_id.clone();
        customers
            .get()
            .iter()
            .find(|c| c.customer_id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    };

    let save_status = {
        let api = api.clone();
        move |order: Order| {
            let Some(new_status) = editable_status
                .get_untracked()
                .get(&order.id)
                .and_then(|s| OrderStatus::from_code(s))
            else {
                toasts.info("Select a status first");
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let path = format!("/orders?id={}", urlencoding::encode(&order.id));
                match api
                    .put_json(&path, &OrderStatusUpdate { status: new_status })
                    .await
                {
                    Ok(()) => {
                        let mut updated = order.clone();
                        updated.status = new_status;
                        ctrl.apply_updated(&order.id, updated, row_key);
                        toasts.success("Order status updated");
                    }
                    Err(e) => toasts.error(e),
                }
            });
        }
    };

    let generate_orders = {
        let api = api.clone();
        let fetch = fetch.clone();
        move || {
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.post_empty("/orders/generate-orders").await {
                    Ok(()) => {
                        toasts.success("Orders generated from customer preferences");
                        fetch();
                    }
                    Err(e) => toasts.error(e),
                }
            });
        }
    };

    let toggle_print = move |id: String| {
        print_selection.update(|s| {
            if !s.remove(&id) {
                s.insert(id);
            }
        });
    };

    let toggle_all_print = move || {
        let visible: Vec<String> = ctrl.items.get_untracked().iter().map(row_key).collect();
        print_selection.update(|s| {
            if s.len() == visible.len() && !visible.is_empty() {
                s.clear();
            } else {
                *s = visible.into_iter().collect();
            }
        });
    };

    let open_print = move || {
        let selected: Vec<Order> = ctrl
            .items
            .get_untracked()
            .into_iter()
            .filter(|o| print_selection.get_untracked().contains(&o.id))
            .collect();
        if selected.is_empty() {
            toasts.info("Select orders to print first");
            return;
        }
        if let Err(e) = super::print::store_print_orders(&selected) {
            toasts.error(e);
            return;
        }
        tabs_store.open_tab("orders_print", "Print orders");
    };

    let active_filters_count = Signal::derive(move || ctrl.state.with(|s| s.active_filter_count()));

    let sort_indicator = move |column: &'static str| {
        ctrl.state.with(|s| {
            if s.sort_column() == Some(column) {
                match s.sort_direction() {
                    SortDirection::Asc => " ↑",
                    SortDirection::Desc => " ↓",
                }
            } else {
                ""
            }
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=move |_| generate_orders()>
                        {icon("refresh")}
                        "Generate orders"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| open_print()
                        disabled=move || print_selection.get().is_empty()
                    >
                        {icon("printer")}
                        {move || format!("Print ({})", print_selection.get().len())}
                    </button>
                    <button
                        class="button button--primary"
                        on:click=move |_| tabs_store.open_tab("orders_new", "New order")
                    >
                        {icon("plus")}
                        "New order"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    pagination_controls=move || {
                        view! {
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
                        }
                        .into_any()
                    }
                    filter_content=move || {
                        view! {
                            <div class="filter-panel__row">
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
                                <select
                                    prop:value=move || {
                                        let current = ctrl
                                            .state
                                            .with(|s| s.filter("status").to_string());
                                        if current.is_empty() { "All".to_string() } else { current }
                                    }
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        let value = if value == "All" { String::new() } else { value };
                                        ctrl.state.update(|s| s.set_filter("status", &value));
                                    }
                                >
                                    <option value="All">"All statuses"</option>
                                    {OrderStatus::all()
                                        .into_iter()
                                        .map(|status| {
                                            view! {
                                                <option value=status.code()>{status.code()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        }
                        .into_any()
                    }
                />

                {move || ctrl.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || ctrl.loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

                {move || {
                    let orders = ctrl.items.get();
                    if orders.is_empty() && !ctrl.loading.get() {
                        return view! { <div class="table__empty">"No orders found"</div> }.into_any();
                    }
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| ctrl.state.update(|s| s.toggle_sort("CustomerName"))
                                        >
                                            "Customer" {move || sort_indicator("CustomerName")}
                                        </th>
                                        <th class="table__header-cell">"Products"</th>
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| ctrl.state.update(|s| s.toggle_sort("OrderDate"))
                                        >
                                            "Order date" {move || sort_indicator("OrderDate")}
                                        </th>
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| ctrl.state.update(|s| s.toggle_sort("Status"))
                                        >
                                            "Status" {move || sort_indicator("Status")}
                                        </th>
                                        <th class="table__header-cell">"Amount"</th>
                                        <th class="table__header-cell">"Actions"</th>
                                        <th class="table__header-cell table__header-cell--checkbox">
                                            <span
                                                class="table__print-all"
                                                title="Select all for print"
                                                on:click=move |_| toggle_all_print()
                                            >
                                                {icon("printer")}
                                            </span>
                                        </th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {orders
                                        .into_iter()
                                        .map(|order| {
                                            let id = order.id.clone();
                                            let id_for_status = id.clone();
                                            let id_for_print = id.clone();
                                            let id_for_checked = id.clone();
                                            let id_for_details = id.clone();
                                            let order_for_save = order.clone();
                                            let name = customer_name(&order);
                                            let lines = order.lines.clone();
                                            let date = format_date(&language.get_value(), &order.order_date);
                                            let amount = format_currency(&language.get_value(), order.total_amount);
                                            let status = order.status;
                                            let save_status = save_status.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{name}</td>
                                                    <td class="table__cell">
                                                        {lines
                                                            .into_iter()
                                                            .map(|line| {
                                                                view! {
                                                                    <div class="table__product-line">
                                                                        {line.product}
                                                                        " × "
                                                                        {format_quantity(line.quantity)}
                                                                    </div>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </td>
                                                    <td class="table__cell">{date}</td>
                                                    <td class="table__cell">{status.code()}</td>
                                                    <td class="table__cell">{amount}</td>
                                                    <td class="table__cell">
                                                        <div class="table__actions">
                                                            <select
                                                                class="table__status-select"
                                                                prop:value=move || {
                                                                    editable_status
                                                                        .get()
                                                                        .get(&id_for_status)
                                                                        .cloned()
                                                                        .unwrap_or_default()
                                                                }
                                                                on:change={
                                                                    let id = id.clone();
                                                                    move |ev| {
                                                                        let value = event_target_value(&ev);
                                                                        editable_status.update(|m| {
                                                                            m.insert(id.clone(), value);
                                                                        });
                                                                    }
                                                                }
                                                            >
                                                                <option value="">"Select status"</option>
                                                                {OrderStatus::all()
                                                                    .into_iter()
                                                                    .map(|s| {
                                                                        view! {
                                                                            <option value=s.code()>{s.code()}</option>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </select>
                                                            <button
                                                                class="icon-button"
                                                                title="Save status"
                                                                on:click=move |_| save_status(order_for_save.clone())
                                                            >
                                                                {icon("save")}
                                                            </button>
                                                            <button
                                                                class="icon-button"
                                                                title="View details"
                                                                on:click=move |_| {
                                                                    tabs_store.open_tab(
                                                                        &format!("order_details_edit_{}", id_for_details),
                                                                        "Order details",
                                                                    );
                                                                }
                                                            >
                                                                {icon("eye")}
                                                            </button>
                                                        </div>
                                                    </td>
                                                    <td class="table__cell table__cell--checkbox">
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=move || {
                                                                print_selection.get().contains(&id_for_checked)
                                                            }
                                                            on:change=move |_| toggle_print(id_for_print.clone())
                                                        />
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
        </div>
    }
}
