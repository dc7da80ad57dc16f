//! Single source of truth for the tab.key → view mapping.

use crate::domain::customer_preferences::ui::list::PreferenceList;
use crate::domain::customers::ui::list::CustomerList;
use crate::domain::invoices::ui::InvoiceGenerator;
use crate::domain::order_details::ui::edit::OrderDetailsEdit;
use crate::domain::orders::ui::list::OrderList;
use crate::domain::orders::ui::new::OrderCreate;
use crate::domain::orders::ui::print::PrintOrders;
use crate::domain::payments::ui::completed::CompletedPayments;
use crate::domain::payments::ui::list::PendingPaymentsSummary;
use crate::domain::payments::ui::pending_customer::CustomerPendingPayments;
use crate::domain::products::ui::list::ProductList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Renders a tab's content by key. Unknown keys get a placeholder so a
/// stale URL never panics the shell.
pub fn render_tab_content(key: &str, _tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "customers" => view! { <CustomerList /> }.into_any(),
        "products" => view! { <ProductList /> }.into_any(),
        "preferences" => view! { <PreferenceList /> }.into_any(),
        "orders" => view! { <OrderList /> }.into_any(),
        "orders_new" => view! { <OrderCreate /> }.into_any(),
        "orders_print" => view! { <PrintOrders /> }.into_any(),
        "payments" => view! { <PendingPaymentsSummary /> }.into_any(),
        "payments_completed" => view! { <CompletedPayments /> }.into_any(),
        "invoices" => view! { <InvoiceGenerator /> }.into_any(),
        k if k.starts_with("order_details_edit_") => {
            let id = k.strip_prefix("order_details_edit_").unwrap().to_string();
            view! { <OrderDetailsEdit order_id=id /> }.into_any()
        }
        k if k.starts_with("payments_pending_") => {
            let id = k.strip_prefix("payments_pending_").unwrap().to_string();
            view! { <CustomerPendingPayments customer_id=id /> }.into_any()
        }
        _ => view! {
            <div class="page">
                <div class="alert alert--error">{format!("Unknown page: {}", key)}</div>
            </div>
        }
        .into_any(),
    }
}
