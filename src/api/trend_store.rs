use crate::api::error::FetchError;
use crate::schemas::{CounterListResponse, MovieSummary, TrendingEntry};
use serde_json::json;
use tracing::{debug, error};

/// Header carrying the store's API key.
const API_KEY_HEADER: &str = "x-api-key";

/// The movie a completed search should be counted against: the top-ranked
/// result, and only when the query was non-empty and produced at least one
/// result. Discover listings (empty query) are never counted.
pub fn record_candidate<'a>(query: &str, results: &'a [MovieSummary]) -> Option<&'a MovieSummary> {
    if query.is_empty() {
        return None;
    }
    results.first()
}

#[derive(Debug, Clone)]
pub struct TrendStoreConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Client for the trend counter store: a key-value counter service addressed
/// by query text, tracking how often each search has been issued.
///
/// Both operations are secondary to the main fetch cycle: callers log
/// failures and move on, they never surface them to the primary view.
pub struct TrendStoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TrendStoreClient {
    pub fn new(config: TrendStoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Upsert-by-query: bump the counter for `query` if a document exists,
    /// otherwise create one with count=1 caching the top result's title and
    /// poster.
    pub async fn record_search(
        &self,
        query: &str,
        top_result: &MovieSummary,
    ) -> Result<(), FetchError> {
        let listing = self.list_counters(&[("query", query)]).await?;
        let existing = listing.documents.into_iter().find(|d| d.query == query);

        match existing {
            Some(doc) => {
                debug!(%query, count = doc.count + 1, "incrementing search counter");
                let response = self
                    .http
                    .patch(format!("{}/counters/{}", self.base_url, doc.id))
                    .header(API_KEY_HEADER, &self.api_key)
                    .json(&json!({ "count": doc.count + 1 }))
                    .send()
                    .await
                    .map_err(FetchError::from)?;
                Self::check_status(response).await
            }
            None => {
                debug!(%query, movie_id = top_result.id, "creating search counter");
                let response = self
                    .http
                    .post(format!("{}/counters", self.base_url))
                    .header(API_KEY_HEADER, &self.api_key)
                    .json(&json!({
                        "query": query,
                        "count": 1,
                        "movie_id": top_result.id,
                        "title": top_result.title,
                        "poster_url": top_result.poster_url(),
                    }))
                    .send()
                    .await
                    .map_err(FetchError::from)?;
                Self::check_status(response).await
            }
        }
    }

    /// Current top searches, descending by count, at most `limit` entries.
    pub async fn top_entries(&self, limit: usize) -> Result<Vec<TrendingEntry>, FetchError> {
        let limit_param = limit.to_string();
        let listing = self
            .list_counters(&[("order", "count_desc"), ("limit", &limit_param)])
            .await?;

        let mut entries: Vec<TrendingEntry> = listing
            .documents
            .into_iter()
            .map(TrendingEntry::from)
            .collect();
        // The store is asked for descending order; enforce it locally as well
        // so the trending list never depends on server-side sorting.
        entries.sort_by(|a, b| b.search_count.cmp(&a.search_count));
        entries.truncate(limit);
        Ok(entries)
    }

    async fn list_counters(
        &self,
        params: &[(&str, &str)],
    ) -> Result<CounterListResponse, FetchError> {
        let response = self
            .http
            .get(format!("{}/counters", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "trend store listing failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn check_status(response: reqwest::Response) -> Result<(), FetchError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            error!(status = status.as_u16(), "trend store write failed");
            Err(FetchError::Status(status.as_u16()))
        }
    }
}
