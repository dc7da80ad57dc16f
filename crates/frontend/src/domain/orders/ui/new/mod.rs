use crate::config::ApiConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::shared::api::ApiClient;
use crate::shared::components::customer_select::CustomerSelect;
use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::today_iso;
use crate::shared::format::format_currency;
use crate::shared::icons::icon;
use contracts::domain::{Customer, NewOrder, NewOrderLine, Order, Product};
use contracts::line_edit::LineEdit;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Line of the order being composed; the key survives product renames and
/// keeps row identity stable for the renderer.
#[derive(Clone, PartialEq)]
struct DraftLine {
    key: String,
    product_id: String,
    product_name: String,
    edit: LineEdit,
}

#[component]
pub fn OrderCreate() -> impl IntoView {
    let api = ApiClient::from_context();
    let config = expect_context::<ApiConfig>();
    let language = StoredValue::new(config.language.clone());
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (customer_id, set_customer_id) = signal(String::new());
    let (product_pick, set_product_pick) = signal(String::new());
    let (order_date, set_order_date) = signal(today_iso());
    let lines = RwSignal::new(Vec::<DraftLine>::new());
    let (saving, set_saving) = signal(false);

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_json::<Vec<Customer>>("/customers").await {
                Ok(list) => set_customers.set(list),
                Err(e) => log::warn!("failed to load customers: {e}"),
            }
        });
    }
    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_json::<Vec<Product>>("/products").await {
                Ok(list) => set_products.set(list),
                Err(e) => log::warn!("failed to load products: {e}"),
            }
        });
    }

    // Adding an already-present product bumps its quantity instead of
    // duplicating the line
    let add_product = move |product_id: String| {
        let Some(product) = products
            .get_untracked()
            .into_iter()
            .find(|p| p.product_id == product_id)
        else {
            return;
        };
        lines.update(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
                let quantity = line.edit.quantity + 1.0;
                line.edit.edit_quantity(quantity);
            } else {
                let mut edit = LineEdit::new(0.0, product.price, 0.0);
                edit.edit_quantity(1.0);
                lines.push(DraftLine {
                    key: uuid::Uuid::new_v4().to_string(),
                    product_id: product.product_id.clone(),
                    product_name: product.name.clone(),
                    edit,
                });
            }
        });
    };

    let total = Signal::derive(move || {
        lines
            .get()
            .iter()
            .map(|line| line.edit.subtotal)
            .sum::<f64>()
    });

    let save = {
        let api = api.clone();
        move || {
            let selected_customer = customer_id.get_untracked();
            if selected_customer.is_empty() {
                toasts.info("Select a customer first");
                return;
            }
            let draft_lines = lines.get_untracked();
            if draft_lines.is_empty() {
                toasts.info("Add at least one product");
                return;
            }
            let payload = NewOrder {
                customer_id: selected_customer,
                order_date: order_date.get_untracked(),
                order_details: draft_lines
                    .iter()
                    .map(|line| NewOrderLine {
                        product_id: line.product_id.clone(),
                        quantity: line.edit.quantity,
                    })
                    .collect(),
            };
            let api = api.clone();
            set_saving.set(true);
            spawn_local(async move {
                match api.post_json::<NewOrder, Order>("/orders", &payload).await {
                    Ok(order) => {
                        toasts.success("Order created");
                        tabs_store.close_tab("orders_new");
                        tabs_store.open_tab(
                            &format!("order_details_edit_{}", order.id),
                            "Order details",
                        );
                    }
                    Err(e) => toasts.error(e),
                }
                set_saving.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"New order"</h1>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=move |_| save()
                    >
                        {icon("save")}
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label>"Customer"</label>
                    <CustomerSelect
                        customers=customers
                        value=customer_id
                        on_change=Callback::new(move |id: String| set_customer_id.set(id))
                    />
                </div>

                <div class="form-group">
                    <label>"Order date"</label>
                    <DateInput
                        value=order_date
                        on_change=Callback::new(move |date: String| set_order_date.set(date))
                    />
                </div>

                <div class="form-group">
                    <label>"Add product"</label>
                    <select
                        prop:value=move || product_pick.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if !value.is_empty() {
                                add_product(value);
                            }
                            // Snap back to the placeholder so the same
                            // product can be added again
                            set_product_pick.set(String::new());
                        }
                    >
                        <option value="">"Select a product..."</option>
                        <For
                            each=move || products.get()
                            key=|product| product.product_id.clone()
                            children=move |product| {
                                view! {
                                    <option value=product.product_id.clone()>
                                        {product.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
            </div>

            // Rows are keyed so a keystroke patches one input instead of
            // rebuilding the table (and dropping focus)
            <Show
                when=move || !lines.get().is_empty()
                fallback=|| view! { <div class="table__empty">"No products added yet"</div> }
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
                                each=move || lines.get()
                                key=|line| line.key.clone()
                                children=move |line| {
                                    let key_for_quantity = line.key.clone();
                                    let key_for_quantity_read = line.key.clone();
                                    let key_for_subtotal = line.key.clone();
                                    let key_for_subtotal_read = line.key.clone();
                                    let key_for_remove = line.key.clone();
                                    let unit_price = format_currency(
                                        &language.get_value(),
                                        line.edit.unit_price,
                                    );
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{line.product_name.clone()}</td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    class="table__number-input"
                                                    min="0"
                                                    prop:value=move || {
                                                        lines.with(|lines| {
                                                            lines
                                                                .iter()
                                                                .find(|l| l.key == key_for_quantity_read)
                                                                .map(|l| l.edit.quantity.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let quantity = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(0.0);
                                                        lines.update(|lines| {
                                                            if let Some(l) = lines
                                                                .iter_mut()
                                                                .find(|l| l.key == key_for_quantity)
                                                            {
                                                                l.edit.edit_quantity(quantity);
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">{unit_price}</td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    class="table__number-input"
                                                    prop:value=move || {
                                                        lines.with(|lines| {
                                                            lines
                                                                .iter()
                                                                .find(|l| l.key == key_for_subtotal_read)
                                                                .map(|l| l.edit.subtotal.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let subtotal = event_target_value(&ev)
                                                            .parse()
                                                            .unwrap_or(0.0);
                                                        lines.update(|lines| {
                                                            if let Some(l) = lines
                                                                .iter_mut()
                                                                .find(|l| l.key == key_for_subtotal)
                                                            {
                                                                l.edit.edit_subtotal(subtotal);
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="icon-button"
                                                    title="Remove"
                                                    on:click=move |_| {
                                                        lines.update(|lines| {
                                                            lines.retain(|l| l.key != key_for_remove);
                                                        });
                                                    }
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
