use crate::{BoardState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BoardState, msg: Msg) -> (BoardState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted | Msg::ExternalRefresh => vec![state.dispatch_fetch()],
        Msg::TabSelected(status) => {
            state.set_filter(status);
            vec![state.dispatch_fetch()]
        }
        Msg::SortMenuOpened => {
            state.set_sort_menu(true);
            Vec::new()
        }
        Msg::SortMenuClosed => {
            state.set_sort_menu(false);
            Vec::new()
        }
        Msg::SortChosen(sort) => {
            state.set_sort_menu(false);
            state.set_sort(sort);
            vec![state.dispatch_fetch()]
        }
        Msg::SearchInput { text, now } => {
            state.type_search(text, now);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let expr = state.submit_search();
            state.apply_search(expr)
        }
        Msg::Tick { now } => match state.poll_search(now) {
            Some(expr) => state.apply_search(expr),
            None => Vec::new(),
        },
        Msg::LoadMoreClicked => {
            if state.load_more_allowed() {
                state.next_page();
                vec![state.dispatch_fetch()]
            } else {
                Vec::new()
            }
        }
        Msg::ItemClicked { id } => vec![Effect::NavigateToDetail {
            kind: state.config().detail_kind.clone(),
            id,
        }],
        Msg::PageLoaded { fingerprint, page } => {
            state.apply_page(fingerprint, page);
            Vec::new()
        }
        Msg::FetchFailed { fingerprint } => {
            state.apply_failure(fingerprint);
            Vec::new()
        }
        Msg::ItemInserted(item) => {
            state.insert_item(item);
            Vec::new()
        }
        Msg::ItemRemoved { id } => {
            state.remove_item(&id);
            Vec::new()
        }
    };

    (state, effects)
}
