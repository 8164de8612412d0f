use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Status tab of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    InReview,
    All,
}

impl StatusFilter {
    /// Value sent as `statusId` to the backend.
    pub fn as_wire(self) -> &'static str {
        match self {
            StatusFilter::InReview => "InReview",
            StatusFilter::All => "All",
        }
    }
}

/// Sort option offered in the sort popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Newest,
    TitleAsc,
}

impl SortKey {
    /// Value sent as `sorting` to the backend.
    pub fn as_wire(self) -> &'static str {
        match self {
            SortKey::Newest => "DateDesc",
            SortKey::TitleAsc => "NameAsc",
        }
    }
}

/// Parameters of one request against the data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query {
    pub page: u32,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub search: String,
}

impl Query {
    pub fn fingerprint(&self) -> QueryFingerprint {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        QueryFingerprint(hasher.finish())
    }
}

/// Tag attached to an outstanding fetch. A response is only applied while
/// its fingerprint equals the fingerprint of the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryFingerprint(u64);

impl QueryFingerprint {
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Paging, sorting and filtering parameters of the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQueryState {
    query: Query,
}

impl ListQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn fingerprint(&self) -> QueryFingerprint {
        self.query.fingerprint()
    }

    pub fn set_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
        self.query.page = 0;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.query.page = 0;
    }

    /// Remote search only; local search never reaches the query.
    pub fn set_search(&mut self, expr: impl Into<String>) {
        self.query.search = expr.into();
        self.query.page = 0;
    }

    pub fn next_page(&mut self) {
        self.query.page = self.query.page.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_changes_reset_page() {
        let mut state = ListQueryState::new();
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 2);

        state.set_filter(StatusFilter::All);
        assert_eq!(state.page(), 0);

        state.next_page();
        state.set_sort(SortKey::TitleAsc);
        assert_eq!(state.page(), 0);

        state.next_page();
        state.set_search("acme");
        assert_eq!(state.page(), 0);
        assert_eq!(state.query().search, "acme");
        assert_eq!(state.query().status, StatusFilter::All);
        assert_eq!(state.query().sort, SortKey::TitleAsc);
    }

    #[test]
    fn next_page_keeps_other_fields() {
        let mut state = ListQueryState::new();
        state.set_filter(StatusFilter::All);
        state.set_search("x");
        state.next_page();
        let query = state.query();
        assert_eq!(query.page, 1);
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.sort, SortKey::Newest);
        assert_eq!(query.search, "x");
    }

    #[test]
    fn fingerprint_tracks_every_parameter() {
        let base = Query::default();
        let paged = Query { page: 1, ..base.clone() };
        let filtered = Query {
            status: StatusFilter::All,
            ..base.clone()
        };
        let sorted = Query {
            sort: SortKey::TitleAsc,
            ..base.clone()
        };
        let searched = Query {
            search: "a".to_string(),
            ..base.clone()
        };

        assert_eq!(base.fingerprint(), Query::default().fingerprint());
        for other in [paged, filtered, sorted, searched] {
            assert_ne!(base.fingerprint(), other.fingerprint());
        }
    }

    #[test]
    fn wire_values_match_backend_names() {
        assert_eq!(StatusFilter::InReview.as_wire(), "InReview");
        assert_eq!(StatusFilter::All.as_wire(), "All");
        assert_eq!(SortKey::Newest.as_wire(), "DateDesc");
        assert_eq!(SortKey::TitleAsc.as_wire(), "NameAsc");
    }
}
