use crate::shared::api::ApiClient;
use contracts::domain::{Product, ProductData};

pub async fn fetch_by_id(api: &ApiClient, id: &str) -> Result<Product, String> {
    api.get_json(&format!("/products/{}", id)).await
}

pub async fn create(api: &ApiClient, data: &ProductData) -> Result<Product, String> {
    api.post_json("/products", data).await
}

pub async fn update(api: &ApiClient, id: &str, data: &ProductData) -> Result<(), String> {
    api.put_json(&format!("/products/{}", id), data).await
}

pub async fn remove(api: &ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/products/{}", id)).await
}
