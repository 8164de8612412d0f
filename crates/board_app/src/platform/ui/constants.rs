pub const HEADER_TITLE: &str = "App Release Admin Board";
pub const SEARCH_PLACEHOLDER: &str = "Search by app name or provider";
pub const TAB_OPEN: &str = "Open Requests";
pub const TAB_ALL: &str = "All";
pub const SORT_NEW_FIRST: &str = "New first";
pub const SORT_TITLE: &str = "App title";
pub const LOAD_MORE: &str = "Load More";
