use crate::api::MetadataClient;
use crate::interactive::domain::models::{FetchRequest, FetchResponse};
use std::sync::Arc;
use tracing::error;

/// Executes fetch requests against the metadata API on behalf of the
/// controller.
///
/// Every request produces a response carrying the request's id, error or not,
/// so the controller always leaves the Loading state once the response for
/// the latest id arrives.
pub struct FetchService {
    client: Arc<MetadataClient>,
}

impl FetchService {
    pub fn new(client: Arc<MetadataClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, request: FetchRequest) -> FetchResponse {
        let outcome = self.client.fetch(&request.query).await;
        if let Err(err) = &outcome {
            // Detail stays in the log; the user only sees the generic message.
            error!(query = %request.query, %err, "movie fetch failed");
        }
        FetchResponse {
            id: request.id,
            query: request.query,
            outcome,
        }
    }
}
