use crate::utils::error::Result;
use async_trait::async_trait;

/// Request capability against a fixed origin. Endpoints are paths relative to
/// that origin, e.g. `/breeds/list/all`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, endpoint: &str) -> Result<serde_json::Value>;
    async fn post(&self, endpoint: &str, payload: &str) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn page_title(&self) -> &str;
}
