use crate::config::ApiConfig;
use crate::layout::toast_service::ToastService;
use crate::shared::api::ApiClient;
use crate::shared::batch::run_batch;
use crate::shared::format::format_currency;
use crate::shared::icons::icon;
use crate::shared::list_utils::apply_removed;
use contracts::domain::{OrderDetail, OrderDetailUpdate};
use contracts::line_edit::LineEdit;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

fn detail_key(detail: &OrderDetail) -> String {
    detail.id.clone()
}

/// Line-item editor of one order. Quantity and subtotal are both
/// editable; each keystroke back-derives the other through the line
/// reconciliation rules.
#[component]
pub fn OrderDetailsEdit(order_id: String) -> impl IntoView {
    let api = ApiClient::from_context();
    let config = expect_context::<ApiConfig>();
    let language = StoredValue::new(config.language.clone());
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let details = RwSignal::new(Vec::<OrderDetail>::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // Rows whose last bulk save failed; cleared on the next attempt
    let failed_rows = RwSignal::new(HashSet::<String>::new());

    {
        let api = api.clone();
        let order_id = order_id.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api
                .get_json::<Vec<OrderDetail>>(&format!("/order-details/order/{}", order_id))
                .await
            {
                Ok(list) => {
                    details.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    }

    let edit_quantity = move |id: String, quantity: f64| {
        details.update(|list| {
            if let Some(detail) = list.iter_mut().find(|d| d.id == id) {
                let mut line = LineEdit::new(detail.quantity, detail.unit_price, detail.subtotal);
                line.edit_quantity(quantity);
                detail.quantity = line.quantity;
                detail.subtotal = line.subtotal;
            }
        });
    };

    let edit_subtotal = move |id: String, subtotal: f64| {
        details.update(|list| {
            if let Some(detail) = list.iter_mut().find(|d| d.id == id) {
                let mut line = LineEdit::new(detail.quantity, detail.unit_price, detail.subtotal);
                line.edit_subtotal(subtotal);
                detail.quantity = line.quantity;
                detail.subtotal = line.subtotal;
            }
        });
    };

    let remove_line = Callback::new({
        let api = api.clone();
        move |id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Remove this product from the order?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete(&format!("/order-details/{}", id)).await {
                    Ok(()) => {
                        // The row leaves the list only after the server
                        // confirmed the delete
                        details.update(|list| {
                            apply_removed(list, &id, |d: &OrderDetail| d.id.clone())
                        });
                    }
                    Err(e) => toasts.error(e),
                }
            });
        }
    });

    // Bulk save: one PUT per line, continue on error, report per item
    let save_all = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let lines = details.get_untracked();
            if lines.is_empty() {
                return;
            }
            set_saving.set(true);
            spawn_local(async move {
                let report = run_batch(&lines, detail_key, |detail| {
                    let api = api.clone();
                    let path = format!("/order-details/{}", detail.id);
                    let payload = OrderDetailUpdate::from_detail(detail);
                    async move { api.put_json(&path, &payload).await }
                })
                .await;
                set_saving.set(false);
                failed_rows.set(
                    report
                        .failed()
                        .iter()
                        .map(|item| item.key.clone())
                        .collect(),
                );
                if report.all_succeeded() {
                    toasts.success("Order details saved");
                } else {
                    toasts.error(format!("Saving order details: {}", report.summary()));
                }
            });
        }
    };

    let total = Signal::derive(move || details.get().iter().map(|d| d.subtotal).sum::<f64>());
    let customer_name =
        Signal::derive(move || details.get().first().map(|d| d.customer_name.clone()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Order details"</h1>
                    {move || {
                        customer_name
                            .get()
                            .filter(|name| !name.is_empty())
                            .map(|name| view! { <span class="page__subtitle">{name}</span> })
                    }}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get() || loading.get())
                        on_click=move |_| save_all()
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save changes" }}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            // Keyed rows: a keystroke patches its own inputs without
            // rebuilding the table
            <Show
                when=move || !details.get().is_empty() || loading.get()
                fallback=|| view! { <div class="table__empty">"This order has no line items"</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Unit price"</th>
                                <th class="table__header-cell">"Subtotal"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || details.get()
                                key=|detail| detail.id.clone()
                                children=move |detail| {
                                    let id_for_quantity = detail.id.clone();
                                    let id_for_quantity_read = detail.id.clone();
                                    let id_for_subtotal = detail.id.clone();
                                    let id_for_subtotal_read = detail.id.clone();
                                    let id_for_remove = detail.id.clone();
                                    let id_for_failed = detail.id.clone();
                                    let unit_price = format_currency(
                                        &language.get_value(),
                                        detail.unit_price,
                                    );
                                    let remove_line = remove_line.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--failed=move || {
                                                failed_rows.get().contains(&id_for_failed)
                                            }
                                        >
                                            <td class="table__cell">{detail.product_name.clone()}</td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    class="table__number-input"
                                                    min="0"
                                                    prop:value=move || {
                                                        details.with(|list| {
                                                            list.iter()
                                                                .find(|d| d.id == id_for_quantity_read)
                                                                .map(|d| d.quantity.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let quantity = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(0.0);
                                                        edit_quantity(id_for_quantity.clone(), quantity);
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">{unit_price}</td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    class="table__number-input"
                                                    prop:value=move || {
                                                        details.with(|list| {
                                                            list.iter()
                                                                .find(|d| d.id == id_for_subtotal_read)
                                                                .map(|d| d.subtotal.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let subtotal = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(0.0);
                                                        edit_subtotal(id_for_subtotal.clone(), subtotal);
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="icon-button"
                                                    title="Remove product"
                                                    on:click=move |_| remove_line.run(id_for_remove.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            <div class="page__footer">
                <span class="page__total">
                    {move || format!("Total: {}", format_currency(&language.get_value(), total.get()))}
                </span>
            </div>
        </div>
    }
}
