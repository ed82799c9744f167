pub mod error;
pub mod metadata;
pub mod trend_store;

#[cfg(test)]
mod metadata_test;

pub use error::FetchError;
pub use metadata::{MetadataClient, MetadataConfig};
pub use trend_store::{record_candidate, TrendStoreClient, TrendStoreConfig};
