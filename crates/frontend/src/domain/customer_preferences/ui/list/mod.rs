use crate::domain::customer_preferences::ui::details::PreferenceDetails;
use crate::layout::toast_service::ToastService;
use crate::layout::Modal;
use crate::shared::api::ApiClient;
use crate::shared::batch::run_batch;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::today_iso;
use crate::shared::format::format_quantity;
use crate::shared::icons::icon;
use crate::shared::list_utils::apply_removed;
use contracts::domain::{CustomerPreference, NewOrder, NewOrderLine};
use contracts::enums::Weekday;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn preference_key(preference: &CustomerPreference) -> String {
    preference.id.clone()
}

#[component]
pub fn PreferenceList() -> impl IntoView {
    let api = ApiClient::from_context();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let items = RwSignal::new(Vec::<CustomerPreference>::new());
    let (loading, set_loading) = signal(false);
    let (generating, set_generating) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (day_filter, set_day_filter) = signal(String::new());
    let (show_details, set_show_details) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api
                    .get_json::<Vec<CustomerPreference>>("/customer-preferences")
                    .await
                {
                    Ok(preferences) => {
                        items.set(preferences);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        }
    };
    fetch();

    // Filtered by customer name and weekday, ordered by delivery day —
    // this list is small and unpaginated, so sorting stays client-side
    let visible = Signal::derive(move || {
        let term = search.get().trim().to_lowercase();
        let day = day_filter.get();
        let mut list: Vec<CustomerPreference> = items
            .get()
            .into_iter()
            .filter(|p| term.is_empty() || p.customer_name.to_lowercase().contains(&term))
            .filter(|p| day.is_empty() || p.preferred_purchase_day.code() == day)
            .collect();
        list.sort_by_key(|p| p.preferred_purchase_day.order_index());
        list
    });

    let remove = {
        let api = api.clone();
        move |id: String| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this preference?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete(&format!("/customer-preferences/{}", id)).await {
                    Ok(()) => {
                        // Confirmed server-side; drop the row without a
                        // refetch
                        items.update(|list| {
                            apply_removed(list, &id, |p: &CustomerPreference| p.id.clone())
                        });
                    }
                    Err(e) => toasts.error(e),
                }
            });
        }
    };

    // One order per (filtered) preference, continue on error
    let generate_orders = {
        let api = api.clone();
        move || {
            let preferences = visible.get_untracked();
            if preferences.is_empty() {
                toasts.info("No preferences to generate orders from");
                return;
            }
            let api = api.clone();
            set_generating.set(true);
            spawn_local(async move {
                let order_date = today_iso();
                let report = run_batch(&preferences, preference_key, |preference| {
                    let api = api.clone();
                    let payload = NewOrder {
                        customer_id: preference.customer_id.clone(),
                        order_date: order_date.clone(),
                        order_details: vec![NewOrderLine {
                            product_id: preference.product_id.clone(),
                            quantity: preference.quantity,
                        }],
                    };
                    async move {
                        api.post_json::<NewOrder, serde_json::Value>("/orders", &payload)
                            .await
                            .map(|_| ())
                    }
                })
                .await;
                set_generating.set(false);
                if report.all_succeeded() {
                    toasts.success("Orders generated");
                } else {
                    toasts.error(format!("Generating orders: {}", report.summary()));
                }
            });
        }
    };

    let open_details = move |id: Option<String>| {
        set_editing_id.set(id);
        set_show_details.set(true);
    };

    let fetch_for_saved = fetch.clone();
    let on_saved = Callback::new(move |_| {
        set_show_details.set(false);
        fetch_for_saved();
    });
    let on_close = Callback::new(move |_| set_show_details.set(false));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customer preferences"</h1>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        disabled=move || generating.get()
                        on:click=move |_| generate_orders()
                    >
                        {icon("refresh")}
                        {move || if generating.get() { "Generating..." } else { "Generate orders" }}
                    </button>
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New preference"
                    </button>
                </div>
            </div>

            <div class="page__toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |term| set_search.set(term))
                    placeholder="Search by customer..."
                />
                <select
                    prop:value=move || {
                        let day = day_filter.get();
                        if day.is_empty() { "All".to_string() } else { day }
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_day_filter.set(if value == "All" { String::new() } else { value });
                    }
                >
                    <option value="All">"All days"</option>
                    {Weekday::all()
                        .into_iter()
                        .map(|day| view! { <option value=day.code()>{day.code()}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            {move || {
                let list = visible.get();
                if list.is_empty() && !loading.get() {
                    return view! { <div class="table__empty">"No preferences found"</div> }
                        .into_any();
                }
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell">"Day"</th>
                                    <th class="table__header-cell">"Quantity"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|preference| {
                                        let id_for_edit = preference.id.clone();
                                        let id_for_remove = preference.id.clone();
                                        let remove = remove.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{preference.customer_name.clone()}</td>
                                                <td class="table__cell">{preference.product_name.clone()}</td>
                                                <td class="table__cell">
                                                    {preference.preferred_purchase_day.code()}
                                                </td>
                                                <td class="table__cell">
                                                    {format_quantity(preference.quantity)}
                                                </td>
                                                <td class="table__cell">
                                                    <div class="table__actions">
                                                        <button
                                                            class="icon-button"
                                                            title="Edit"
                                                            on:click=move |_| {
                                                                open_details(Some(id_for_edit.clone()))
                                                            }
                                                        >
                                                            {icon("eye")}
                                                        </button>
                                                        <button
                                                            class="icon-button"
                                                            title="Delete"
                                                            on:click=move |_| remove(id_for_remove.clone())
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                    </div>
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

            <Modal is_open=show_details on_close=on_close title="Customer preference">
                {move || {
                    view! {
                        <PreferenceDetails
                            id=editing_id.get()
                            on_saved=on_saved
                            on_cancel=on_close
                        />
                    }
                }}
            </Modal>
        </div>
    }
}
