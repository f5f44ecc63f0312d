pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ApiClient;
pub use config::Settings;
pub use crate::core::{board::BreedBoard, fetcher::BreedFetcher, projector::project};
pub use domain::model::DisplayRecord;
pub use domain::ports::HttpClient;
pub use utils::error::{AppError, Result};
