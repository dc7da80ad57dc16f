use crate::domain::customers::ui::details::{CustomerDetails, CustomerMutation};
use crate::layout::Modal;
use crate::shared::api::ApiClient;
use crate::shared::components::entity_table::{Column, EntityTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_utils::{apply_created, apply_removed, apply_updated, matches_search};
use contracts::domain::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("Name", |c: &Customer| Some(c.name.clone())),
        Column::new("Email", |c: &Customer| Some(c.email.clone())),
        Column::new("Phone", |c: &Customer| Some(c.phone_number.clone())),
        Column::new("Address", |c: &Customer| Some(c.address.clone())),
    ]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let api = ApiClient::from_context();
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (show_details, set_show_details) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_json::<Vec<Customer>>("/customers").await {
                    Ok(customers) => {
                        set_items.set(customers);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        }
    };
    fetch();

    let visible = Signal::derive(move || {
        let term = search.get();
        let cols = columns();
        items
            .get()
            .into_iter()
            .filter(|customer| matches_search(&cols, customer, &term))
            .collect::<Vec<_>>()
    });

    let open_details = move |id: Option<String>| {
        set_editing_id.set(id);
        set_show_details.set(true);
    };

    // Optimistic list patches keyed by customer id; the canonical list
    // is only refetched on explicit refresh
    let on_saved = Callback::new(move |mutation: CustomerMutation| {
        set_show_details.set(false);
        set_items.update(|list| match mutation {
            CustomerMutation::Created(customer) => apply_created(list, customer),
            CustomerMutation::Updated { id, data } => {
                let merged = list.iter().find(|c| c.customer_id == id).map(|prior| {
                    let mut updated = prior.clone();
                    updated.name = data.name;
                    updated.email = data.email;
                    updated.phone_number = data.phone_number;
                    updated.address = data.address;
                    updated
                });
                if let Some(updated) = merged {
                    apply_updated(list, &id, updated, |c: &Customer| c.customer_id.clone());
                }
            }
            CustomerMutation::Deleted(id) => {
                apply_removed(list, &id, |c: &Customer| c.customer_id.clone())
            }
        });
    });
    let on_close = Callback::new(move |_| set_show_details.set(false));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New customer"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |term| set_search.set(term))
                    placeholder="Search by name..."
                />
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="page__loading">"Loading..."</div> })}

            <EntityTable
                items=visible
                columns=columns()
                row_key=|c: &Customer| c.customer_id.clone()
                empty_message="No customers found"
                on_row_click=Callback::new(move |id: String| open_details(Some(id)))
            />

            <Modal is_open=show_details on_close=on_close title="Customer">
                {move || {
                    view! {
                        <CustomerDetails
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
