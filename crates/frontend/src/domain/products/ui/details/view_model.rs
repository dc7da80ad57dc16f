use super::model;
use crate::shared::api::ApiClient;
use contracts::domain::ProductData;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub api: ApiClient,
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<ProductData>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            id: RwSignal::new(None),
            form: RwSignal::new(ProductData::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        let f = self.form.get();
        !f.name.trim().is_empty() && f.price >= 0.0
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        self.id.set(id.clone());
        let Some(existing_id) = id else {
            self.form.set(ProductData::default());
            return;
        };
        let api = self.api.clone();
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match model::fetch_by_id(&api, &existing_id).await {
                Ok(product) => form.set(ProductData::from_product(&product)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();
        if current.name.trim().is_empty() {
            self.error.set(Some("Name is required".to_string()));
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

    pub fn delete_command(&self, on_saved: Callback<()>) {
        let Some(id) = self.id.get() else {
            return;
        };
        let api = self.api.clone();
        let error = self.error;
        spawn_local(async move {
            match model::remove(&api, &id).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
