use std::time::Duration;

/// Where a debounced search expression is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Re-query the data source with the expression.
    Remote,
    /// Filter the already fetched items on the client.
    #[default]
    Local,
}

/// Construction-time settings of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub search_mode: SearchMode,
    pub debounce_window: Duration,
    /// Non-empty search input shorter than this is never forwarded.
    pub min_search_len: Option<usize>,
    /// Route segment used when navigating to an item's detail view.
    pub detail_kind: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Local,
            debounce_window: Duration::from_millis(300),
            min_search_len: None,
            detail_kind: "adminboarddetail".to_string(),
        }
    }
}

impl BoardConfig {
    /// Board that re-queries the backend on every debounced search.
    pub fn remote() -> Self {
        Self {
            search_mode: SearchMode::Remote,
            ..Self::default()
        }
    }

    /// Table toolbar flavour: remote search, 500 ms window, three-char minimum.
    pub fn toolbar() -> Self {
        Self {
            search_mode: SearchMode::Remote,
            debounce_window: Duration::from_millis(500),
            min_search_len: Some(3),
            ..Self::default()
        }
    }
}
