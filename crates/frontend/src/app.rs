use crate::config::ApiConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::layout::{Shell, ToastHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One config instance for the whole app; fetch helpers read it from
    // context instead of a module-level constant.
    provide_context(ApiConfig::from_window());
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    tabs_store.init_router_integration();

    view! {
        <Shell />
        <ToastHost />
    }
}
