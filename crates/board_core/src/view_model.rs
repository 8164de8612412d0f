use crate::{Item, SortKey, StatusFilter};

/// Where the result set stands with respect to fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultPhase {
    /// Nothing received for the current query shape.
    #[default]
    Empty,
    /// A fetch for the current query is in flight.
    Loading,
    /// Data received; `exhausted` when no further page exists.
    Loaded { exhausted: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub search_text: String,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub sort_menu_open: bool,
    pub items: Vec<Item>,
    pub phase: ResultPhase,
    pub page: u32,
    pub total_pages: Option<u32>,
    pub load_more_visible: bool,
    pub is_error: bool,
    pub dirty: bool,
}
