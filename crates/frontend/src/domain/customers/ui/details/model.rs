use crate::shared::api::ApiClient;
use contracts::domain::{Customer, CustomerData};

pub async fn fetch_by_id(api: &ApiClient, id: &str) -> Result<Customer, String> {
    api.get_json(&format!("/customers/{}", id)).await
}

pub async fn create(api: &ApiClient, data: &CustomerData) -> Result<Customer, String> {
    api.post_json("/customers", data).await
}

pub async fn update(api: &ApiClient, id: &str, data: &CustomerData) -> Result<(), String> {
    api.put_json(&format!("/customers/{}", id), data).await
}

pub async fn remove(api: &ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/customers/{}", id)).await
}
