pub mod api;
pub mod formatters;
pub mod interactive;
pub mod logging;
pub mod schemas;

pub use api::{
    record_candidate, FetchError, MetadataClient, MetadataConfig, TrendStoreClient,
    TrendStoreConfig,
};
pub use formatters::{format_movie_result, format_trending_entry};
pub use interactive::InteractiveSearch;
pub use schemas::{MovieListResponse, MovieSummary, TrendingEntry};
