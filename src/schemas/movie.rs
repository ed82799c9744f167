use serde::{Deserialize, Serialize};

/// Base URL for poster images served by the metadata provider's CDN.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One movie as returned in the metadata API's results array.
///
/// Entries are replaced wholesale on every fetch cycle and never mutated
/// locally, so everything stays plain owned data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(rename = "vote_average", default)]
    pub rating: Option<f64>,
    #[serde(rename = "original_language", default)]
    pub language: Option<String>,
}

impl MovieSummary {
    /// Four-digit release year, if the API provided a date.
    ///
    /// The API sends an empty string for unreleased titles, which is treated
    /// the same as a missing field. Dates too short or not ASCII in the year
    /// position also yield `None` rather than a slice panic.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|date| date.get(..4))
    }

    /// Full poster URL, or `None` when the movie has no poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{IMAGE_BASE_URL}{path}"))
    }
}

/// Wire envelope for both the search and discover endpoints.
///
/// The API can signal an internal failure inside a 200 body via the
/// `success`/`status_message` pair, so those are carried alongside the
/// results array.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_message: Option<String>,
}
