use crate::api::FetchError;
use crate::schemas::{MovieSummary, TrendingEntry};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Help,
}

/// Lifecycle of the primary fetch. Exactly one state is active at a time;
/// transitions are strictly Idle/Success/Error -> Loading -> Success | Error.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success,
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

// Fetch request and response for the worker channel. The id is a generation
// counter: responses whose id is not the latest are discarded, so the newest
// fetch always wins regardless of network ordering.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub id: u64,
    pub query: String,
    pub outcome: Result<Vec<MovieSummary>, FetchError>,
}

/// Work items handled by the background worker thread.
#[derive(Clone, Debug)]
pub enum WorkerRequest {
    Fetch(FetchRequest),
    RefreshTrending,
}

/// Successful trending refresh. Failed refreshes send nothing, which leaves
/// the previous trending list intact.
#[derive(Clone, Debug)]
pub struct TrendingUpdate {
    pub entries: Vec<TrendingEntry>,
}
