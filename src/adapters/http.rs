use crate::domain::ports::HttpClient;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// reqwest-backed client bound to one origin for its whole lifetime.
///
/// Each call is a single attempt: no retries and no client-side timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.is_empty() || endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    async fn execute(
        &self,
        method: &str,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<serde_json::Value> {
        tracing::debug!("{} {}", method, self.url_for(endpoint));

        let response = request
            .send()
            .await
            .map_err(|e| AppError::request(method, endpoint, e))?;

        tracing::debug!("{} {} -> {}", method, endpoint, response.status());

        let response = response
            .error_for_status()
            .map_err(|e| AppError::request(method, endpoint, e))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::request(method, endpoint, e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl HttpClient for ApiClient {
    async fn get(&self, endpoint: &str) -> Result<serde_json::Value> {
        let request = self.client.get(self.url_for(endpoint));
        self.execute("GET", endpoint, request).await
    }

    async fn post(&self, endpoint: &str, payload: &str) -> Result<serde_json::Value> {
        let request = self
            .client
            .post(self.url_for(endpoint))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(payload.to_string());
        self.execute("POST", endpoint, request).await
    }
}
