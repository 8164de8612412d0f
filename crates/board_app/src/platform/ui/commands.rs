use std::time::Instant;

use board_core::{Msg, SortKey, StatusFilter};

/// One line typed at the prompt, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiInput {
    Msg(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &[&str] = &[
    "type <text>    edit the search box (debounced)",
    "submit         search now",
    "tab open|all   switch status tab",
    "sort           open the sort menu",
    "sort new|title choose a sort option",
    "close          close the sort menu",
    "more           load the next page",
    "open <id>      open an item",
    "refresh        refetch the current page",
    "quit           leave",
];

pub fn parse_line(line: &str, now: Instant) -> UiInput {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, rest) = match line.trim_start().split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line.trim(), ""),
    };

    let msg = match (command, rest.trim()) {
        // Search text is taken verbatim so trailing spaces reach the box.
        ("type", _) => Msg::SearchInput {
            text: rest.to_string(),
            now,
        },
        ("submit", "") => Msg::SearchSubmitted,
        ("tab", "open") => Msg::TabSelected(StatusFilter::InReview),
        ("tab", "all") => Msg::TabSelected(StatusFilter::All),
        ("sort", "") => Msg::SortMenuOpened,
        ("sort", "new") => Msg::SortChosen(SortKey::Newest),
        ("sort", "title") => Msg::SortChosen(SortKey::TitleAsc),
        ("close", "") => Msg::SortMenuClosed,
        ("more", "") => Msg::LoadMoreClicked,
        ("open", id) if !id.is_empty() => Msg::ItemClicked { id: id.to_string() },
        ("refresh", "") => Msg::ExternalRefresh,
        ("help", "") => return UiInput::Help,
        ("quit" | "exit", "") => return UiInput::Quit,
        _ => return UiInput::Unknown(line.to_string()),
    };
    UiInput::Msg(msg)
}
