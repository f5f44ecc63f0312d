use crate::core::{BreedListResponse, HttpClient};
use crate::utils::error::{AppError, Result};

pub const BREED_LIST_ENDPOINT: &str = "/breeds/list/all";

pub struct BreedFetcher<H: HttpClient> {
    client: H,
}

impl<H: HttpClient> BreedFetcher<H> {
    pub fn new(client: H) -> Self {
        Self { client }
    }

    /// Fetches the catalog and returns the breed names in map order.
    pub async fn fetch_breeds(&self) -> Result<Vec<String>> {
        let payload = self.client.get(BREED_LIST_ENDPOINT).await?;
        let response = decode_breed_list(payload)?;

        if let Some(status) = response.status.as_deref() {
            if status != "success" {
                tracing::warn!("Breed list reported status '{}'", status);
            }
        }

        let breeds = response.breed_names();
        tracing::debug!("Fetched {} breeds", breeds.len());
        Ok(breeds)
    }
}

/// Checks the payload shape. `message` must be an object of string arrays.
pub fn decode_breed_list(payload: serde_json::Value) -> Result<BreedListResponse> {
    if !payload.is_object() {
        return Err(AppError::FormatError {
            endpoint: BREED_LIST_ENDPOINT.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }

    serde_json::from_value(payload).map_err(|e| AppError::FormatError {
        endpoint: BREED_LIST_ENDPOINT.to_string(),
        reason: e.to_string(),
    })
}
