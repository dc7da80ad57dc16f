pub mod global_context;
pub mod modal;
pub mod registry;
pub mod sidebar;
pub mod tabs;
pub mod toast_service;

pub use modal::Modal;
pub use toast_service::ToastHost;

use leptos::prelude::*;
use sidebar::Sidebar;
use tabs::TabStrip;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  TabStrip                    |
/// |           |  active tab content          |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-layout__center">
                <TabStrip />
            </div>
        </div>
    }
}
