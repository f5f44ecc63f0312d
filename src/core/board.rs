use crate::core::fetcher::BreedFetcher;
use crate::core::projector::project;
use crate::core::{DisplayRecord, HttpClient};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct BoardState {
    breeds: Vec<String>,
    updated_at: Option<DateTime<Utc>>,
}

/// Owns the breed list shown on the page.
///
/// The list starts empty and is only ever swapped as a whole when a fetch
/// succeeds. Overlapping refreshes are not deduplicated or cancelled; the
/// last one to complete wins.
pub struct BreedBoard<H: HttpClient> {
    fetcher: BreedFetcher<H>,
    state: RwLock<BoardState>,
}

impl<H: HttpClient> BreedBoard<H> {
    pub fn new(fetcher: BreedFetcher<H>) -> Self {
        Self {
            fetcher,
            state: RwLock::new(BoardState::default()),
        }
    }

    pub fn with_client(client: H) -> Self {
        Self::new(BreedFetcher::new(client))
    }

    /// Fetches the catalog and replaces the held list.
    ///
    /// On failure the error is logged and returned, and the previous list is
    /// left untouched.
    pub async fn refresh(&self) -> Result<Vec<DisplayRecord>> {
        let breeds = match self.fetcher.fetch_breeds().await {
            Ok(breeds) => breeds,
            Err(e) => {
                tracing::error!("Error fetching breeds: {}", e);
                return Err(e);
            }
        };

        let cards = project(&breeds);
        let mut state = self.state.write().await;
        state.breeds = breeds;
        state.updated_at = Some(Utc::now());
        tracing::info!("Board now holds {} breeds", state.breeds.len());

        Ok(cards)
    }

    pub async fn breeds(&self) -> Vec<String> {
        self.state.read().await.breeds.clone()
    }

    pub async fn cards(&self) -> Vec<DisplayRecord> {
        project(&self.state.read().await.breeds)
    }

    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.updated_at
    }
}
