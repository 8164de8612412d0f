use std::time::Instant;

use board_core::{update, BoardState, Msg};

#[test]
fn closing_a_closed_sort_menu_is_noop() {
    let state = BoardState::default();
    let (mut next, effects) = update(state.clone(), Msg::SortMenuClosed);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn tick_without_pending_search_is_noop() {
    let state = BoardState::default();
    let (next, effects) = update(
        state.clone(),
        Msg::Tick {
            now: Instant::now(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
