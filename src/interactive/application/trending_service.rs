use crate::api::TrendStoreClient;
use crate::interactive::constants::TRENDING_LIMIT;
use crate::schemas::{MovieSummary, TrendingEntry};
use std::sync::Arc;
use tracing::{debug, warn};

/// Wraps the trend counter store for the controller's two secondary
/// operations: refreshing the trending list and recording a search.
///
/// The store is optional; without one, both operations become no-ops. All
/// failures are logged and swallowed; they must never disturb the primary
/// fetch cycle.
pub struct TrendingService {
    client: Option<Arc<TrendStoreClient>>,
    limit: usize,
}

impl TrendingService {
    pub fn new(client: Option<Arc<TrendStoreClient>>) -> Self {
        if client.is_none() {
            debug!("no trend store configured; trending features disabled");
        }
        Self {
            client,
            limit: TRENDING_LIMIT,
        }
    }

    /// Fetch the current top entries. Returns `None` on failure or when no
    /// store is configured, in which case the caller keeps its previous list.
    pub async fn refresh(&self) -> Option<Vec<TrendingEntry>> {
        let client = self.client.as_ref()?;
        match client.top_entries(self.limit).await {
            Ok(entries) => Some(entries),
            Err(err) => {
                warn!(%err, "trending refresh failed; keeping previous list");
                None
            }
        }
    }

    /// Record a completed search, keyed by the query text, using the
    /// top-ranked result. Only called for non-empty queries that returned at
    /// least one result.
    pub async fn record(&self, query: &str, top_result: &MovieSummary) {
        let Some(client) = self.client.as_ref() else {
            return;
        };
        if let Err(err) = client.record_search(query, top_result).await {
            warn!(%query, %err, "failed to record search count");
        }
    }
}
