use crate::interactive::constants::DEBOUNCE_MS;
use crate::interactive::domain::models::{FetchRequest, FetchResponse};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::{MovieSummary, TrendingEntry};

// Re-export Mode and RequestState alongside the state they govern
pub use crate::interactive::domain::models::{Mode, RequestState};

/// All mutable state of the search-driven list controller. Owned exclusively
/// by the event loop and mutated only through [`AppState::update`],
/// [`AppState::begin_fetch`], and [`AppState::apply_fetch_response`].
pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub trending: TrendingState,
    pub ui: UiState,
}

pub struct SearchState {
    /// Live query, updated synchronously on every keystroke.
    pub query: String,
    /// The settled value of the last debounce window. Only this variant
    /// triggers network activity; it always lags the live query.
    pub debounced_query: String,
    pub results: Vec<MovieSummary>,
    pub selected_index: usize,
    pub request_state: RequestState,
    /// Generation counter for in-flight fetches. Responses with a stale id
    /// are discarded, so the latest fetch always determines visible state.
    pub current_fetch_id: u64,
}

pub struct TrendingState {
    pub entries: Vec<TrendingEntry>,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                debounced_query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                request_state: RequestState::Idle,
                current_fetch_id: 0,
            },
            trending: TrendingState {
                entries: Vec::new(),
            },
            ui: UiState { message: None },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                // Synchronous, no network side effect; the fetch happens only
                // once the debounce window goes quiet.
                self.search.query = q;
                self.ui.message = Some("typing...".to_string());
                Command::ScheduleFetch(DEBOUNCE_MS)
            }
            Message::FetchCompleted(outcome) => {
                match outcome {
                    Ok(results) => {
                        self.search.results = results;
                        self.search.selected_index = 0;
                        self.search.request_state = RequestState::Success;
                        self.ui.message = None;
                    }
                    Err(err) => {
                        // Never show a partial list next to an error.
                        self.search.results.clear();
                        self.search.selected_index = 0;
                        self.search.request_state = RequestState::Error(err.user_message());
                        self.ui.message = None;
                    }
                }
                Command::None
            }
            Message::TrendingRefreshed(entries) => {
                // Replaced wholesale; failed refreshes never reach this point.
                self.trending.entries = entries;
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::ScrollUp => {
                self.search.selected_index = self.search.selected_index.saturating_sub(1);
                Command::None
            }
            Message::ScrollDown => {
                if self.search.selected_index + 1 < self.search.results.len() {
                    self.search.selected_index += 1;
                }
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
        }
    }

    /// Start a new fetch cycle for the settled query: enter Loading, clear
    /// any prior error, and hand out the request tagged with a fresh id.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.search.current_fetch_id += 1;
        self.search.debounced_query = self.search.query.clone();
        self.search.request_state = RequestState::Loading;
        self.ui.message = Some("fetching...".to_string());
        FetchRequest {
            id: self.search.current_fetch_id,
            query: self.search.debounced_query.clone(),
        }
    }

    /// Apply a worker response, discarding it when a newer fetch has been
    /// started since.
    pub fn apply_fetch_response(&mut self, response: FetchResponse) -> Command {
        if response.id != self.search.current_fetch_id {
            tracing::debug!(
                stale_id = response.id,
                current_id = self.search.current_fetch_id,
                "discarding stale fetch response"
            );
            return Command::None;
        }
        self.update(Message::FetchCompleted(response.outcome))
    }
}
