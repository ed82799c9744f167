use serde::{Deserialize, Serialize};

/// One popular search, as surfaced to the trending list.
///
/// Sourced from the trend counter store, top-N by descending search count.
/// The list is replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingEntry {
    pub external_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub search_count: u64,
}

/// One counter document in the trend store, keyed by query text.
///
/// The store caches the top result's title and poster at creation time so the
/// trending list can render without another metadata round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterDocument {
    pub id: String,
    pub query: String,
    pub count: u64,
    pub movie_id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CounterListResponse {
    #[serde(default)]
    pub documents: Vec<CounterDocument>,
    #[serde(default)]
    pub total: u64,
}

impl From<CounterDocument> for TrendingEntry {
    fn from(doc: CounterDocument) -> Self {
        Self {
            external_id: doc.movie_id,
            title: doc.title,
            poster_url: doc.poster_url,
            search_count: doc.count,
        }
    }
}
