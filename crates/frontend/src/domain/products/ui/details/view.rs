use super::view_model::ProductDetailsViewModel;
use crate::shared::api::ApiClient;
use contracts::enums::UnitOfMeasure;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(ApiClient::from_context());
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
                        if vm_for_title.is_edit_mode() { "Edit product" } else { "New product" }
                    }}
                </h3>
            </div>

            {move || vm_for_error.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Product name"
                    />
                </div>

                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <input
                        type="text"
                        id="product-description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-unit">"Unit of measure"</label>
                    <select
                        id="product-unit"
                        prop:value=move || form.get().unit_of_measure.code().to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.unit_of_measure = UnitOfMeasure::from_code(&value)
                                    .unwrap_or(UnitOfMeasure::Unit);
                            });
                        }
                    >
                        {UnitOfMeasure::all()
                            .into_iter()
                            .map(|unit| {
                                view! {
                                    <option
                                        value=unit.code()
                                        selected=move || form.get().unit_of_measure == unit
                                    >
                                        {unit.code()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="product-price">"Price"</label>
                    <input
                        type="number"
                        id="product-price"
                        min="0"
                        step="0.01"
                        prop:value=move || form.get().price.to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                            form.update(|f| f.price = parsed);
                        }
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
                                            w.confirm_with_message("Delete this product?")
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
