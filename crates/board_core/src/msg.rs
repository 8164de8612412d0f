use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Board became visible; issue the initial fetch.
    Mounted,
    /// User switched the status tab.
    TabSelected(crate::StatusFilter),
    /// User clicked the sort icon.
    SortMenuOpened,
    /// Pointer left the filter section.
    SortMenuClosed,
    /// User picked an entry in the sort popover.
    SortChosen(crate::SortKey),
    /// User edited the search box.
    SearchInput { text: String, now: Instant },
    /// User pressed the accept key in the search box.
    SearchSubmitted,
    /// Periodic clock used to fire the debounce timer.
    Tick { now: Instant },
    /// User clicked the load-more control.
    LoadMoreClicked,
    /// User clicked an item card.
    ItemClicked { id: String },
    /// Out-of-band change elsewhere (e.g. an approval); refetch the current query.
    ExternalRefresh,
    /// Data source answered. `page` is `None` for a missing or malformed payload.
    PageLoaded {
        fingerprint: crate::QueryFingerprint,
        page: Option<crate::Page>,
    },
    /// Data source reported an explicit failure.
    FetchFailed { fingerprint: crate::QueryFingerprint },
    /// An item was created elsewhere and should appear at the head of the list.
    ItemInserted(crate::Item),
    /// An item was deleted elsewhere.
    ItemRemoved { id: String },
}
