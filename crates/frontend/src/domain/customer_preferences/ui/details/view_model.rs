use super::model;
use crate::shared::api::ApiClient;
use contracts::domain::{Customer, CustomerPreference, PreferenceData, Product};
use contracts::enums::Weekday;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn empty_form() -> PreferenceData {
    PreferenceData {
        customer_id: String::new(),
        product_id: String::new(),
        preferred_purchase_day: Weekday::Monday,
        quantity: 1.0,
    }
}

#[derive(Clone)]
pub struct PreferenceDetailsViewModel {
    pub api: ApiClient,
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<PreferenceData>,
    pub customers: RwSignal<Vec<Customer>>,
    pub products: RwSignal<Vec<Product>>,
    /// Existing preferences of the selected customer, shown as context
    pub customer_preferences: RwSignal<Vec<CustomerPreference>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PreferenceDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            id: RwSignal::new(None),
            form: RwSignal::new(empty_form()),
            customers: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
            customer_preferences: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn load_reference_data(&self) {
        let api = self.api.clone();
        let customers = self.customers;
        let products = self.products;
        spawn_local(async move {
            match model::fetch_customers(&api).await {
                Ok(list) => customers.set(list),
                Err(e) => log::warn!("failed to load customers: {e}"),
            }
            match model::fetch_products(&api).await {
                Ok(list) => products.set(list),
                Err(e) => log::warn!("failed to load products: {e}"),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        self.id.set(id.clone());
        let Some(existing_id) = id else {
            self.form.set(empty_form());
            return;
        };
        let api = self.api.clone();
        let form = self.form;
        let error = self.error;
        let this = self.clone();
        spawn_local(async move {
            match model::fetch_by_id(&api, &existing_id).await {
                Ok(preference) => {
                    form.set(PreferenceData::from_preference(&preference));
                    this.load_customer_preferences(preference.customer_id);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Refresh the context list shown under the form
    pub fn load_customer_preferences(&self, customer_id: String) {
        if customer_id.is_empty() {
            self.customer_preferences.set(Vec::new());
            return;
        }
        let api = self.api.clone();
        let target = self.customer_preferences;
        spawn_local(async move {
            match model::fetch_for_customer(&api, &customer_id).await {
                Ok(list) => target.set(list),
                Err(e) => log::warn!("failed to load customer preferences: {e}"),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();
        if current.customer_id.is_empty() {
            self.error.set(Some("Select a customer".to_string()));
            return;
        }
        if current.product_id.is_empty() {
            self.error.set(Some("Select a product".to_string()));
            return;
        }
        if current.quantity <= 0.0 {
            self.error
                .set(Some("Quantity must be greater than zero".to_string()));
            return;
        }

        let api = self.api.clone();
        let id = self.id.get();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            let result = match &id {
                Some(existing_id) => model::update(&api, existing_id, &current).await,
                None => model::create(&api, &current).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
