use contracts::domain::Customer;
use leptos::prelude::*;

/// The one customer selector used across pages: a plain select over the
/// loaded customers with an empty "all/none" option. Emits the selected
/// customer id, empty string on clear.
#[component]
pub fn CustomerSelect(
    #[prop(into)] customers: Signal<Vec<Customer>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or("Select a customer...");

    view! {
        <select
            class="customer-select"
            prop:value=move || value.get()
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        >
            <option value="">{placeholder}</option>
            <For
                each=move || customers.get()
                key=|customer| customer.customer_id.clone()
                children=move |customer| {
                    let id = customer.customer_id.clone();
                    view! {
                        <option value=id.clone() selected=move || value.get() == id>
                            {customer.name.clone()}
                        </option>
                    }
                }
            />
        </select>
    }
}
