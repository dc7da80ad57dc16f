//! Remote collection fetcher and mutation calls.
//!
//! One `ApiClient` per call site, built from the injected [`ApiConfig`].
//! Every request is bounded by the configured timeout through an
//! `AbortController`; a non-2xx status or a network/abort failure becomes
//! a single user-facing message string. No retries. A successful list
//! fetch replaces the whole visible page, it never merges.

use crate::config::ApiConfig;
use contracts::list::{ListQuery, Paged};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Build a client from the config provided at mount
    pub fn from_context() -> Self {
        Self::new(expect_context::<ApiConfig>())
    }

    pub fn language(&self) -> &str {
        &self.config.language
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Abort signal armed to fire after the configured timeout. The
    /// returned timer handle cancels the abort when dropped, so callers
    /// keep it alive across the await.
    fn timeout_signal(
        &self,
    ) -> (
        Option<web_sys::AbortSignal>,
        Option<gloo_timers::callback::Timeout>,
    ) {
        match web_sys::AbortController::new() {
            Ok(controller) => {
                let signal = controller.signal();
                let timer =
                    gloo_timers::callback::Timeout::new(self.config.timeout_ms, move || {
                        controller.abort();
                    });
                (Some(signal), Some(timer))
            }
            Err(_) => (None, None),
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, String> {
        let (signal, _timer) = self.timeout_signal();
        let request = builder
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| format!("Bad request: {e}"))?;
        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        if !response.ok() {
            return Err(error_message(&response).await);
        }
        Ok(response)
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, String> {
        let (signal, _timer) = self.timeout_signal();
        let request = builder
            .abort_signal(signal.as_ref())
            .json(body)
            .map_err(|e| format!("Bad request: {e}"))?;
        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        if !response.ok() {
            return Err(error_message(&response).await);
        }
        Ok(response)
    }

    /// GET one page of a list resource
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &ListQuery,
    ) -> Result<Paged<T>, String> {
        let url = format!("{}?{}", self.url(resource), query.to_query_string());
        let response = self.send(Request::get(&url)).await?;
        response
            .json::<Paged<T>>()
            .await
            .map_err(|e| format!("Malformed response: {e}"))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self.send(Request::get(&self.url(path))).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Malformed response: {e}"))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self.send_json(Request::post(&self.url(path)), body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Malformed response: {e}"))
    }

    /// POST whose response body the caller does not need
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), String> {
        self.send_json(Request::post(&self.url(path)), body).await?;
        Ok(())
    }

    /// POST without a body (e.g. `/orders/generate-orders`)
    pub async fn post_empty(&self, path: &str) -> Result<(), String> {
        self.send(Request::post(&self.url(path))).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), String> {
        self.send_json(Request::put(&self.url(path)), body).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), String> {
        self.send(Request::delete(&self.url(path))).await?;
        Ok(())
    }

    /// GET a binary body (the invoice PDF)
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, String> {
        let response = self.send(Request::get(&self.url(path))).await?;
        response
            .binary()
            .await
            .map_err(|e| format!("Malformed response: {e}"))
    }
}

/// Prefer the API's own `{ "message": ... }` error body, fall back to the
/// bare status code.
async fn error_message(response: &Response) -> String {
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    format!("HTTP {}", response.status())
}
