use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::registry::render_tab_content;
use leptos::prelude::*;

/// Tab strip plus the content of every opened tab.
///
/// Content components are created once per open and toggled with a CSS
/// class, so list state survives switching tabs; a closed tab's component
/// is dropped and refetches from scratch on the next open.
#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key = tab.key.clone();
                        let key_for_activate = key.clone();
                        let key_for_close = key.clone();
                        let key_for_active_check = key.clone();
                        let is_active = move || {
                            tabs_store.active.get().as_ref() == Some(&key_for_active_check)
                        };
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=is_active
                                on:click=move |_| tabs_store.activate_tab(&key_for_activate)
                            >
                                <span class="tabs__title">{tab.title.clone()}</span>
                                <span
                                    class="tabs__close"
                                    on:click=move |e| {
                                        e.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    "×"
                                </span>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}

#[component]
fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active_check = tab_key.clone();
    let is_active =
        move || tabs_store.active.get().as_ref() == Some(&key_for_active_check);

    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
