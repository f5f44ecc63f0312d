pub mod board;
pub mod fetcher;
pub mod projector;

pub use crate::domain::model::{BreedListResponse, DisplayRecord, PLACEHOLDER_CONTENT};
pub use crate::domain::ports::{ConfigProvider, HttpClient};
pub use crate::utils::error::Result;
