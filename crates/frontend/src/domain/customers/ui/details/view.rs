use super::view_model::{CustomerDetailsViewModel, CustomerMutation};
use crate::shared::api::ApiClient;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(
    id: Option<String>,
    on_saved: Callback<CustomerMutation>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(ApiClient::from_context());
    vm.load_if_needed(id);

    let vm_for_title = vm.clone();
    let vm_for_error = vm.clone();
    let vm_for_save = vm.clone();
    let vm_for_delete = vm.clone();
    let vm_for_delete_show = vm.clone();
    let vm_for_valid = vm.clone();
    let form = vm.form;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || {
                        if vm_for_title.is_edit_mode() { "Edit customer" } else { "New customer" }
                    }}
                </h3>
            </div>

            {move || vm_for_error.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Customer name"
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        placeholder="name@example.com"
                    />
                </div>

                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value=move || form.get().phone_number
                        on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="address">"Address"</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || form.get().address
                        on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || !vm_for_valid.is_form_valid() || vm_for_valid.saving.get()
                    on:click=move |_| vm_for_save.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                {move || {
                    vm_for_delete_show.is_edit_mode().then(|| {
                        let vm = vm_for_delete.clone();
                        view! {
                            <button
                                class="button button--danger"
                                on:click=move |_| {
                                    let confirmed = web_sys::window()
                                        .map(|w| {
                                            w.confirm_with_message("Delete this customer?")
                                                .unwrap_or(false)
                                        })
                                        .unwrap_or(false);
                                    if confirmed {
                                        vm.delete_command(on_saved);
                                    }
                                }
                            >
                                "Delete"
                            </button>
                        }
                    })
                }}
            </div>
        </div>
    }
}
