use board_core::{BoardViewModel, Item, ResultPhase, SortKey, StatusFilter};

use crate::platform::config::Labels;

pub fn render(view: &BoardViewModel, labels: &Labels) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 8);

    lines.push(format!("== {} ==", labels.header_title));
    if view.search_text.is_empty() {
        lines.push(format!("Search: ({})", labels.search_placeholder));
    } else {
        lines.push(format!("Search: {}", view.search_text));
    }
    lines.push(format!(
        "Tabs: {}  {}",
        marked(&labels.tab_open, view.status == StatusFilter::InReview),
        marked(&labels.tab_all, view.status == StatusFilter::All)
    ));
    lines.push(format!("Sort: {}", sort_label(view.sort, labels)));
    if view.sort_menu_open {
        for (key, label) in [
            (SortKey::Newest, &labels.sort_new_first),
            (SortKey::TitleAsc, &labels.sort_title),
        ] {
            let bullet = if key == view.sort { "(*)" } else { "( )" };
            lines.push(format!("  {bullet} {label}"));
        }
    }

    if view.is_error {
        lines.push("! Loading failed. Type `refresh` to retry.".to_string());
    }

    match view.phase {
        ResultPhase::Loading if view.items.is_empty() => lines.push("Loading...".to_string()),
        ResultPhase::Empty => {
            if !view.is_error && view.items.is_empty() {
                lines.push("No data loaded.".to_string());
            }
        }
        ResultPhase::Loaded { .. } if view.items.is_empty() => {
            lines.push("No matching items.".to_string());
        }
        _ => {}
    }
    for (index, item) in view.items.iter().enumerate() {
        lines.push(format_item_row(index + 1, item));
    }
    if view.phase == ResultPhase::Loading && !view.items.is_empty() {
        lines.push("Loading...".to_string());
    }

    if view.load_more_visible {
        lines.push(format!("[ {} ]", labels.load_more));
    }
    if let Some(total) = view.total_pages {
        lines.push(format!(
            "Page {} of {}",
            (view.page + 1).min(total.max(1)),
            total.max(1)
        ));
    }

    lines
}

fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn sort_label(sort: SortKey, labels: &Labels) -> &str {
    match sort {
        SortKey::Newest => &labels.sort_new_first,
        SortKey::TitleAsc => &labels.sort_title,
    }
}

fn format_item_row(position: usize, item: &Item) -> String {
    let mut row = format!("{position:>3}. {}", item.title);
    if !item.provider.is_empty() {
        row.push_str(&format!(" | {}", item.provider));
    }
    if let Some(status) = &item.status {
        row.push_str(&format!(" | {status}"));
    }
    row.push_str(&format!(" (id {})", item.id));
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(items: Vec<Item>) -> BoardViewModel {
        BoardViewModel {
            items,
            phase: ResultPhase::Loaded { exhausted: false },
            page: 0,
            total_pages: Some(3),
            load_more_visible: true,
            ..BoardViewModel::default()
        }
    }

    #[test]
    fn loaded_board_lists_items_and_load_more() {
        let labels = Labels::default();
        let lines = render(
            &view_with(vec![Item::new("a1", "Fleet App", "Acme")]),
            &labels,
        );
        assert!(lines.contains(&"  1. Fleet App | Acme (id a1)".to_string()));
        assert!(lines.contains(&format!("[ {} ]", labels.load_more)));
        assert!(lines.contains(&"Page 1 of 3".to_string()));
        assert!(lines.contains(&format!("Tabs: [{}]  {}", labels.tab_open, labels.tab_all)));
    }

    #[test]
    fn hidden_load_more_and_open_sort_menu() {
        let labels = Labels::default();
        let view = BoardViewModel {
            load_more_visible: false,
            sort_menu_open: true,
            sort: SortKey::TitleAsc,
            ..view_with(vec![Item::new("a1", "Fleet App", "")])
        };
        let lines = render(&view, &labels);
        assert!(!lines.iter().any(|line| line.contains(&labels.load_more)));
        assert!(lines.contains(&format!("  (*) {}", labels.sort_title)));
        assert!(lines.contains(&format!("  ( ) {}", labels.sort_new_first)));
        assert!(lines.contains(&"  1. Fleet App (id a1)".to_string()));
    }

    #[test]
    fn loading_and_error_states() {
        let labels = Labels::default();
        let loading = BoardViewModel {
            phase: ResultPhase::Loading,
            ..BoardViewModel::default()
        };
        assert!(render(&loading, &labels).contains(&"Loading...".to_string()));

        let failed = BoardViewModel {
            is_error: true,
            ..BoardViewModel::default()
        };
        let lines = render(&failed, &labels);
        assert!(lines.iter().any(|line| line.starts_with("! Loading failed")));
        assert!(!lines.contains(&"No data loaded.".to_string()));
    }

    #[test]
    fn empty_phase_with_items_lists_them_only() {
        let labels = Labels::default();
        let view = BoardViewModel {
            items: vec![Item::new("n1", "Uploaded", "Acme")],
            ..BoardViewModel::default()
        };
        let lines = render(&view, &labels);
        assert!(!lines.contains(&"No data loaded.".to_string()));
        assert!(lines.contains(&"  1. Uploaded | Acme (id n1)".to_string()));
    }
}
