use crate::api::FetchError;
use crate::schemas::{MovieSummary, TrendingEntry};

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    FetchCompleted(Result<Vec<MovieSummary>, FetchError>),
    SelectResult(usize),
    ScrollUp,
    ScrollDown,

    // Trending events
    TrendingRefreshed(Vec<TrendingEntry>),

    // Mode changes
    ShowHelp,
    CloseHelp,
}
