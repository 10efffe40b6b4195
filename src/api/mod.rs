use crate::config::Config;
use crate::core::{Outcome, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Reusable API client for the OrangeHRM REST surface.
///
/// Holds a base URL, a request timeout and a mutable header map seeded with
/// JSON content negotiation. Each verb is a single-request passthrough:
/// transport errors are logged and returned as [`Outcome::Failed`], HTTP
/// error statuses are returned untouched. No retries, no backoff.
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    headers: BTreeMap<String, String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client against the configured API base URL.
    pub fn new() -> Result<Self> {
        Self::with_base_url(Config::global().api.base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let timeout = Duration::from_secs(Config::global().api.timeout_secs);
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        Ok(Self {
            base_url: base_url.into(),
            timeout,
            headers,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The current header map, in deterministic key order.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Single-header accessor.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Set a header; a repeated key overwrites the previous value.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        tracing::info!("Set header: {key}");
        self.headers.insert(key, value.into());
    }

    /// Sugar for a Bearer-scheme Authorization header.
    pub fn set_authorization(&mut self, token: &str) {
        self.set_header("Authorization", format!("Bearer {token}"));
    }

    pub async fn get(&self, endpoint: &str, params: Option<&[(&str, &str)]>) -> Outcome<Response> {
        let url = self.url_for(endpoint);
        let mut request = self.http.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }
        self.send("GET", &url, request).await
    }

    pub async fn post<T: Serialize>(&self, endpoint: &str, json: Option<&T>) -> Outcome<Response> {
        let url = self.url_for(endpoint);
        let mut request = self.http.post(&url);
        if let Some(json) = json {
            request = request.json(json);
        }
        self.send("POST", &url, request).await
    }

    pub async fn put<T: Serialize>(&self, endpoint: &str, json: Option<&T>) -> Outcome<Response> {
        let url = self.url_for(endpoint);
        let mut request = self.http.put(&url);
        if let Some(json) = json {
            request = request.json(json);
        }
        self.send("PUT", &url, request).await
    }

    pub async fn delete(&self, endpoint: &str) -> Outcome<Response> {
        let url = self.url_for(endpoint);
        let request = self.http.delete(&url);
        self.send("DELETE", &url, request).await
    }

    // Plain concatenation: endpoints are expected to carry their leading
    // slash, the base URL must not end with one.
    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(&self, method: &str, url: &str, request: RequestBuilder) -> Outcome<Response> {
        let request = request.headers(self.header_map()).timeout(self.timeout);
        match request.send().await {
            Ok(response) => {
                tracing::info!("{method} {url} - Status: {}", response.status());
                Outcome::Ok(response)
            }
            Err(e) => {
                tracing::error!("{method} request failed: {e}");
                Outcome::failed(e.to_string())
            }
        }
    }

    // A header that cannot be represented on the wire is skipped with a
    // warning; `set_header` itself stays infallible.
    fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (key, value) in &self.headers {
            match (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    map.insert(name, value);
                }
                _ => tracing::warn!("Skipping unrepresentable header: {key}"),
            }
        }
        map
    }
}
