use leptos::prelude::*;

/// Native date picker bound to a wire-format `yyyy-mm-dd` value; the
/// browser renders it in the user's locale.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=value
            on:input=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        />
    }
}
