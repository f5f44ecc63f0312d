use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder body shown on every breed card.
pub const PLACEHOLDER_CONTENT: &str = "Breed info goes here.";

/// Payload of `GET /breeds/list/all`.
///
/// `message` maps each breed to its sub-breeds. The map is ordered, so breed
/// names come out alphabetically regardless of the order in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedListResponse {
    pub message: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BreedListResponse {
    pub fn breed_names(&self) -> Vec<String> {
        self.message.keys().cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub title: String,
    pub content: String,
}
