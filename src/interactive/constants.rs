//! Constants for the interactive TUI module

// Timing constants
/// Quiet period after the last keystroke before a fetch fires, in
/// milliseconds.
pub const DEBOUNCE_MS: u64 = 500;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the trending side panel
pub const TRENDING_PANEL_WIDTH: u16 = 34;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Trending list
/// How many top searches the trending list shows
pub const TRENDING_LIMIT: usize = 5;
