use super::view_model::PreferenceDetailsViewModel;
use crate::shared::api::ApiClient;
use crate::shared::components::customer_select::CustomerSelect;
use crate::shared::format::format_quantity;
use contracts::enums::Weekday;
use leptos::prelude::*;

#[component]
pub fn PreferenceDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PreferenceDetailsViewModel::new(ApiClient::from_context());
    vm.load_reference_data();
    vm.load_if_needed(id);

    let vm_for_title = vm.clone();
    let vm_for_error = vm.clone();
    let vm_for_save = vm.clone();
    let vm_for_valid = vm.clone();
    let vm_for_customer = vm.clone();
    let form = vm.form;
    let customers = vm.customers;
    let products = vm.products;
    let existing = vm.customer_preferences;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || {
                        if vm_for_title.is_edit_mode() { "Edit preference" } else { "New preference" }
                    }}
                </h3>
            </div>

            {move || vm_for_error.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label>"Customer"</label>
                    <CustomerSelect
                        customers=Signal::derive(move || customers.get())
                        value=Signal::derive(move || form.get().customer_id)
                        on_change=Callback::new(move |id: String| {
                            form.update(|f| f.customer_id = id.clone());
                            vm_for_customer.load_customer_preferences(id);
                        })
                    />
                </div>

                <div class="form-group">
                    <label>"Product"</label>
                    <select
                        prop:value=move || form.get().product_id
                        on:change=move |ev| {
                            form.update(|f| f.product_id = event_target_value(&ev));
                        }
                    >
                        <option value="">"Select a product..."</option>
                        <For
                            each=move || products.get()
                            key=|product| product.product_id.clone()
                            children=move |product| {
                                let id = product.product_id.clone();
                                view! {
                                    <option
                                        value=id.clone()
                                        selected=move || form.get().product_id == id
                                    >
                                        {product.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <label>"Preferred purchase day"</label>
                    <select
                        prop:value=move || form.get().preferred_purchase_day.code().to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.preferred_purchase_day =
                                    Weekday::from_code(&value).unwrap_or(Weekday::Monday);
                            });
                        }
                    >
                        {Weekday::all()
                            .into_iter()
                            .map(|day| {
                                view! {
                                    <option
                                        value=day.code()
                                        selected=move || form.get().preferred_purchase_day == day
                                    >
                                        {day.code()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Quantity"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.5"
                        prop:value=move || form.get().quantity.to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                            form.update(|f| f.quantity = parsed);
                        }
                    />
                </div>
            </div>

            {move || {
                let list = existing.get();
                if list.is_empty() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div class="details-context">
                        <h4>"Current preferences of this customer"</h4>
                        <ul>
                            {list
                                .into_iter()
                                .map(|p| {
                                    view! {
                                        <li>
                                            {p.product_name}
                                            " — "
                                            {format_quantity(p.quantity)}
                                            " on "
                                            {p.preferred_purchase_day.code()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                }
                .into_any()
            }}

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm_for_valid.saving.get()
                    on:click=move |_| vm_for_save.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
