use crate::api::error::{FetchError, GENERIC_FETCH_MESSAGE};
use crate::schemas::{MovieListResponse, MovieSummary};
use reqwest::header::ACCEPT;
use tracing::{debug, error};

/// Default base URL for the movie metadata API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone)]
pub struct MetadataConfig {
    pub base_url: String,
    pub api_token: String,
}

impl MetadataConfig {
    pub fn new(api_token: String) -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Read-only client for the movie metadata API.
///
/// Two endpoints: search-by-text and discover-sorted-by-popularity. Bearer
/// token auth, JSON responses. No retries; a failed request is reported once
/// and it is up to the caller to trigger a new fetch.
pub struct MetadataClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl MetadataClient {
    pub fn new(config: MetadataConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token,
        }
    }

    /// Fetch the result list for a settled query: search when the query is
    /// non-empty, otherwise the popularity-sorted discover listing.
    pub async fn fetch(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        if query.is_empty() {
            self.discover().await
        } else {
            self.search(query).await
        }
    }

    /// Text search. The query is sent as a URL parameter and percent-escaped
    /// by the HTTP client.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        debug!(%query, "searching movies");
        let request = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .query(&[("query", query)]);
        self.fetch_movie_list(request).await
    }

    /// Default listing for the empty query: discover, most popular first.
    pub async fn discover(&self) -> Result<Vec<MovieSummary>, FetchError> {
        debug!("fetching discover listing");
        let request = self
            .http
            .get(format!("{}/discover/movie", self.base_url))
            .query(&[("sort_by", "popularity.desc")]);
        self.fetch_movie_list(request).await
    }

    async fn fetch_movie_list(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<MovieSummary>, FetchError> {
        let response = request
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %detail, "metadata request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: MovieListResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        // A 200 body can still carry the API's internal failure flag.
        if body.success == Some(false) {
            let message = body
                .status_message
                .unwrap_or_else(|| GENERIC_FETCH_MESSAGE.to_string());
            error!(%message, "metadata api flagged failure");
            return Err(FetchError::Api(message));
        }

        Ok(body.results)
    }
}
