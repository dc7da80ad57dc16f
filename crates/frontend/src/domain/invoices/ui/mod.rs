use crate::layout::toast_service::ToastService;
use crate::shared::api::ApiClient;
use crate::shared::components::customer_select::CustomerSelect;
use crate::shared::components::date_input::DateInput;
use crate::shared::download::{invoice_filename, save_bytes};
use crate::shared::icons::icon;
use contracts::domain::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Invoice generation: pick a customer and a period, download the PDF the
/// backend renders. The file is named `{customer}_{start}_{end}.pdf`.
#[component]
pub fn InvoiceGenerator() -> impl IntoView {
    let api = ApiClient::from_context();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (customer_id, set_customer_id) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (generating, set_generating) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_json::<Vec<Customer>>("/customers").await {
                Ok(list) => set_customers.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let generate = {
        let api = api.clone();
        move || {
            let selected = customer_id.get_untracked();
            let start = start_date.get_untracked();
            let end = end_date.get_untracked();
            if selected.is_empty() || start.is_empty() || end.is_empty() {
                toasts.info("Fill in customer and both dates");
                return;
            }
            let customer_name = customers
                .get_untracked()
                .iter()
                .find(|c| c.customer_id == selected)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "invoice".to_string());
            let api = api.clone();
            set_generating.set(true);
            set_error.set(None);
            spawn_local(async move {
                let path = format!(
                    "/invoices/generate-invoice?customerId={}&startDate={}&endDate={}&language={}",
                    urlencoding::encode(&selected),
                    urlencoding::encode(&start),
                    urlencoding::encode(&end),
                    urlencoding::encode(api.language()),
                );
                match api.get_bytes(&path).await {
                    Ok(bytes) => {
                        let filename = invoice_filename(&customer_name, &start, &end);
                        match save_bytes(&bytes, "application/pdf", &filename) {
                            Ok(()) => toasts.success("Invoice generated"),
                            Err(e) => {
                                set_error.set(Some(e.clone()));
                                toasts.error(e);
                            }
                        }
                    }
                    Err(e) => {
                        set_error.set(Some(e.clone()));
                        toasts.error(e);
                    }
                }
                set_generating.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Invoices"</h1>
                </div>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label>"Customer"</label>
                    <CustomerSelect
                        customers=customers
                        value=customer_id
                        on_change=Callback::new(move |id: String| {
                            set_customer_id.set(id);
                            set_error.set(None);
                        })
                    />
                </div>

                <div class="form-group">
                    <label>"Start"</label>
                    <DateInput
                        value=start_date
                        on_change=Callback::new(move |date: String| set_start_date.set(date))
                    />
                </div>

                <div class="form-group">
                    <label>"End"</label>
                    <DateInput
                        value=end_date
                        on_change=Callback::new(move |date: String| set_end_date.set(date))
                    />
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || generating.get()
                        on:click=move |_| generate()
                    >
                        {icon("download")}
                        {move || if generating.get() { "Generating..." } else { "Generate invoice" }}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        </div>
    }
}
