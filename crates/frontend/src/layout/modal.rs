use leptos::prelude::*;

/// Overlay modal driven by the owning page's open signal; the backdrop
/// and the close button both emit `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if is_open.get() {
                let title = title.clone();
                view! {
                    <div class="modal-overlay" on:click=move |_| on_close.run(())>
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            <div class="modal-content__header">
                                <h2 class="modal-content__title">{title}</h2>
                                <button class="modal-content__close" on:click=move |_| on_close.run(())>
                                    "×"
                                </button>
                            </div>
                            {children()}
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
