use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("orders", "Orders", "orders"),
    ("customers", "Customers", "customers"),
    ("products", "Products", "products"),
    ("preferences", "Preferences", "calendar"),
    ("payments", "Payments", "payments"),
    ("payments_completed", "Completed payments", "check-circle"),
    ("invoices", "Invoices", "invoices"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"BizFlow"</div>
            <ul class="sidebar__menu">
                {NAV_ITEMS
                    .iter()
                    .map(|(key, title, icon_name)| {
                        let is_active = move || {
                            tabs_store.active.get().as_deref() == Some(*key)
                        };
                        view! {
                            <li
                                class="sidebar__item"
                                class:sidebar__item--active=is_active
                                on:click=move |_| tabs_store.open_tab(key, title)
                            >
                                {icon(icon_name)}
                                <span class="sidebar__label">{*title}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
