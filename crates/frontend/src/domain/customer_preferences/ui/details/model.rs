use crate::shared::api::ApiClient;
use contracts::domain::{Customer, CustomerPreference, PreferenceData, Product};

pub async fn fetch_by_id(api: &ApiClient, id: &str) -> Result<CustomerPreference, String> {
    api.get_json(&format!("/customer-preferences/{}", id)).await
}

/// All preferences of one customer
pub async fn fetch_for_customer(
    api: &ApiClient,
    customer_id: &str,
) -> Result<Vec<CustomerPreference>, String> {
    api.get_json(&format!("/customer-preferences/{}/customer", customer_id))
        .await
}

pub async fn create(api: &ApiClient, data: &PreferenceData) -> Result<CustomerPreference, String> {
    api.post_json("/customer-preferences", data).await
}

pub async fn update(api: &ApiClient, id: &str, data: &PreferenceData) -> Result<(), String> {
    api.put_json(&format!("/customer-preferences/{}", id), data)
        .await
}

pub async fn fetch_customers(api: &ApiClient) -> Result<Vec<Customer>, String> {
    api.get_json("/customers").await
}

pub async fn fetch_products(api: &ApiClient) -> Result<Vec<Product>, String> {
    api.get_json("/products").await
}
