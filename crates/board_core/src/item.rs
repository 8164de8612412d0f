/// A board entry. Only the fields the board itself needs are modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub status: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            provider: provider.into(),
            status: None,
        }
    }

    /// Case-insensitive substring match on title or provider.
    pub fn matches(&self, expr: &str) -> bool {
        let needle = expr.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.provider.to_lowercase().contains(&needle)
    }
}

/// Client-side search over already fetched items. An empty expression keeps
/// everything.
pub fn local_filter<'a>(items: impl IntoIterator<Item = &'a Item>, expr: &str) -> Vec<Item> {
    if expr.is_empty() {
        return items.into_iter().cloned().collect();
    }
    items
        .into_iter()
        .filter(|item| item.matches(expr))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_match_is_case_insensitive() {
        let items = vec![Item::new("1", "Alpha", "Acme"), Item::new("2", "Beta", "Globex")];
        let shown = local_filter(&items, "ac");
        assert_eq!(shown, vec![Item::new("1", "Alpha", "Acme")]);
    }

    #[test]
    fn title_match_and_empty_expression() {
        let items = vec![Item::new("1", "Alpha", "Acme"), Item::new("2", "Beta", "Globex")];
        assert_eq!(local_filter(&items, "BET").len(), 1);
        assert_eq!(local_filter(&items, ""), items);
        assert!(local_filter(&items, "zzz").is_empty());
    }
}
