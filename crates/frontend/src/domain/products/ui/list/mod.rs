use crate::domain::products::ui::details::ProductDetails;
use crate::layout::Modal;
use crate::shared::api::ApiClient;
use crate::shared::components::entity_table::{Column, EntityTable};
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_utils::matches_search;
use contracts::domain::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("Name", |p: &Product| Some(p.name.clone())),
        Column::new("Description", |p: &Product| Some(p.description.clone())),
        Column::new("Unit", |p: &Product| {
            Some(p.unit_of_measure.code().to_string())
        }),
        // Formatted price is not a search target; plain number keeps the
        // column searchable as text
        Column::new("Price", |p: &Product| Some(format!("{:.2}", p.price))),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let api = ApiClient::from_context();
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
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
                match api.get_json::<Vec<Product>>("/products").await {
                    Ok(products) => {
                        set_items.set(products);
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
            .filter(|product| matches_search(&cols, product, &term))
            .collect::<Vec<_>>()
    });

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
                    <h1 class="page__title">"Products"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New product"
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
                row_key=|p: &Product| p.product_id.clone()
                empty_message="No products found"
                on_row_click=Callback::new(move |id: String| open_details(Some(id)))
            />

            <Modal is_open=show_details on_close=on_close title="Product">
                {move || {
                    view! {
                        <ProductDetails
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
