use super::model;
use crate::shared::api::ApiClient;
use contracts::domain::{Customer, CustomerData};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Outcome of a details-form mutation, consumed by the list page to
/// patch its rows without a refetch.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomerMutation {
    Created(Customer),
    Updated { id: String, data: CustomerData },
    Deleted(String),
}

/// ViewModel for the customer details form
#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub api: ApiClient,
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<CustomerData>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            id: RwSignal::new(None),
            form: RwSignal::new(CustomerData::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        let f = self.form.get();
        !f.name.trim().is_empty() && !f.email.trim().is_empty()
    }

    /// Load form data from the server if an id is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        self.id.set(id.clone());
        let Some(existing_id) = id else {
            self.form.set(CustomerData::default());
            return;
        };
        let api = self.api.clone();
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match model::fetch_by_id(&api, &existing_id).await {
                Ok(customer) => form.set(CustomerData::from_customer(&customer)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<CustomerMutation>) {
        let current = self.form.get();
        if current.name.trim().is_empty() {
            self.error.set(Some("Name is required".to_string()));
            return;
        }
        if current.email.trim().is_empty() {
            self.error.set(Some("Email is required".to_string()));
            return;
        }

        let api = self.api.clone();
        let id = self.id.get();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(existing_id) => model::update(&api, &existing_id, &current)
                    .await
                    .map(|()| CustomerMutation::Updated {
                        id: existing_id,
                        data: current,
                    }),
                None => model::create(&api, &current)
                    .await
                    .map(CustomerMutation::Created),
            };
            saving.set(false);
            match result {
                Ok(mutation) => on_saved.run(mutation),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Delete the loaded customer; only available in edit mode
    pub fn delete_command(&self, on_saved: Callback<CustomerMutation>) {
        let Some(id) = self.id.get() else {
            return;
        };
        let api = self.api.clone();
        let error = self.error;
        spawn_local(async move {
            match model::remove(&api, &id).await {
                Ok(()) => on_saved.run(CustomerMutation::Deleted(id)),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
