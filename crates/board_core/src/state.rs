use crate::item::local_filter;
use crate::view_model::{BoardViewModel, ResultPhase};
use crate::{
    BoardConfig, Effect, Item, ListQueryState, Page, QueryFingerprint, ResultAccumulator,
    SearchDebouncer, SearchMode, SortKey, StatusFilter,
};

/// Everything the board controller owns. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    config: BoardConfig,
    query: ListQueryState,
    results: ResultAccumulator,
    debouncer: SearchDebouncer,
    /// Text currently in the search box.
    search_text: String,
    /// Expression applied by the local filter.
    local_expr: String,
    displayed: Vec<Item>,
    is_loading: bool,
    is_error: bool,
    sort_menu_open: bool,
    dirty: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardState {
    pub fn new(config: BoardConfig) -> Self {
        let mut debouncer = SearchDebouncer::new(config.debounce_window);
        if let Some(min_len) = config.min_search_len {
            debouncer = debouncer.with_min_len(min_len);
        }
        Self {
            config,
            query: ListQueryState::new(),
            results: ResultAccumulator::new(),
            debouncer,
            search_text: String::new(),
            local_expr: String::new(),
            displayed: Vec::new(),
            is_loading: false,
            is_error: false,
            sort_menu_open: false,
            dirty: false,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn view(&self) -> BoardViewModel {
        let total_pages = self.results.total_pages();
        let page = self.query.page();
        let phase = if self.is_loading {
            ResultPhase::Loading
        } else if total_pages.is_none() && self.results.is_empty() {
            ResultPhase::Empty
        } else {
            ResultPhase::Loaded {
                exhausted: !has_more_pages(total_pages, page),
            }
        };
        let load_more_visible = !self.is_loading
            && !self.is_error
            && !self.results.is_empty()
            && has_more_pages(total_pages, page);

        BoardViewModel {
            search_text: self.search_text.clone(),
            status: self.query.query().status,
            sort: self.query.query().sort,
            sort_menu_open: self.sort_menu_open,
            items: self.displayed.clone(),
            phase,
            page,
            total_pages,
            load_more_visible,
            is_error: self.is_error,
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Marks the current query as in flight and returns the fetch effect for it.
    pub(crate) fn dispatch_fetch(&mut self) -> Effect {
        self.is_loading = true;
        self.is_error = false;
        self.mark_dirty();
        let query = self.query.query().clone();
        Effect::Fetch {
            fingerprint: query.fingerprint(),
            query,
        }
    }

    pub(crate) fn set_filter(&mut self, status: StatusFilter) {
        self.query.set_filter(status);
        self.reset_results();
    }

    pub(crate) fn set_sort(&mut self, sort: SortKey) {
        self.query.set_sort(sort);
        self.reset_results();
    }

    pub(crate) fn next_page(&mut self) {
        self.query.next_page();
    }

    pub(crate) fn set_sort_menu(&mut self, open: bool) {
        if self.sort_menu_open != open {
            self.sort_menu_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn type_search(&mut self, text: String, now: std::time::Instant) {
        self.debouncer.input(&text, now);
        if self.search_text != text {
            self.search_text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn submit_search(&mut self) -> String {
        self.debouncer.submit(&self.search_text)
    }

    pub(crate) fn poll_search(&mut self, now: std::time::Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Resolves a forwarded search expression according to the search mode.
    pub(crate) fn apply_search(&mut self, expr: String) -> Vec<Effect> {
        match self.config.search_mode {
            SearchMode::Remote => {
                self.query.set_search(expr);
                self.reset_results();
                vec![self.dispatch_fetch()]
            }
            SearchMode::Local => {
                self.local_expr = expr;
                self.refresh_displayed();
                Vec::new()
            }
        }
    }

    pub(crate) fn load_more_allowed(&self) -> bool {
        self.view().load_more_visible
    }

    /// Applies a response if it still belongs to the current query.
    pub(crate) fn apply_page(&mut self, fingerprint: QueryFingerprint, page: Option<Page>) -> bool {
        if fingerprint != self.query.fingerprint() {
            return false;
        }
        self.results.apply(page);
        self.is_loading = false;
        self.is_error = false;
        self.refresh_displayed();
        true
    }

    /// Flags an explicit failure of the current query; the list is left as is.
    pub(crate) fn apply_failure(&mut self, fingerprint: QueryFingerprint) -> bool {
        if fingerprint != self.query.fingerprint() {
            return false;
        }
        self.is_loading = false;
        self.is_error = true;
        self.mark_dirty();
        true
    }

    pub(crate) fn insert_item(&mut self, item: Item) {
        self.results.insert_front(item);
        self.refresh_displayed();
    }

    pub(crate) fn remove_item(&mut self, id: &str) {
        if self.results.remove(id) {
            self.refresh_displayed();
        }
    }

    fn reset_results(&mut self) {
        self.results.clear();
        self.is_error = false;
        self.refresh_displayed();
    }

    fn refresh_displayed(&mut self) {
        self.displayed = local_filter(self.results.items(), &self.local_expr);
        self.mark_dirty();
    }
}

/// Whether pages beyond `page` remain to be loaded.
pub fn has_more_pages(total_pages: Option<u32>, page: u32) -> bool {
    total_pages.is_some_and(|total| total > page.saturating_add(1))
}
