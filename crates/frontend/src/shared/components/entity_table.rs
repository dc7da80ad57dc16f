use leptos::prelude::*;

/// One column of a generic entity table: header text plus an accessor
/// producing the cell content. `None` renders as an empty cell.
pub struct Column<T> {
    pub header: &'static str,
    pub accessor: fn(&T) -> Option<String>,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, accessor: fn(&T) -> Option<String>) -> Self {
        Self { header, accessor }
    }
}

// fn pointers are Copy no matter what T is; a derive would bound T
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Column<T> {}

/// Generic list renderer: one row per record in fetch order, one cell per
/// column. Entity-agnostic — pages describe themselves through column
/// accessors and a row-key function.
#[component]
pub fn EntityTable<T>(
    #[prop(into)] items: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    row_key: fn(&T) -> String,
    #[prop(optional)] empty_message: Option<&'static str>,
    #[prop(optional, into)] on_row_click: Option<Callback<String>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);

    view! {
        {move || {
            let rows = items.get();
            if rows.is_empty() {
                let message = empty_message.unwrap_or("No data found");
                return view! { <div class="table__empty">{message}</div> }.into_any();
            }
            view! {
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {columns
                                    .get_value()
                                    .iter()
                                    .map(|column| {
                                        view! { <th class="table__header-cell">{column.header}</th> }
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let key = row_key(&row);
                                    let cells = columns
                                        .get_value()
                                        .iter()
                                        .map(|column| {
                                            let cell = (column.accessor)(&row).unwrap_or_default();
                                            view! { <td class="table__cell">{cell}</td> }
                                        })
                                        .collect_view();
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--clickable=on_row_click.is_some()
                                            on:click=move |_| {
                                                if let Some(cb) = on_row_click {
                                                    cb.run(key.clone());
                                                }
                                            }
                                        >
                                            {cells}
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
    }
}
