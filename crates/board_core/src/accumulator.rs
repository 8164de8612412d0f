use std::collections::BTreeMap;

use crate::Item;

/// One page of results as returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Item>,
    pub page_index: u32,
    pub total_pages: u32,
}

/// Merges fetched pages into the list shown on the board.
///
/// Pages are kept per index so that an out-of-band refetch of a page that is
/// already held replaces its slice instead of appending it a second time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultAccumulator {
    pages: BTreeMap<u32, Vec<Item>>,
    total_pages: Option<u32>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a fetch result. A missing payload empties the list.
    pub fn apply(&mut self, page: Option<Page>) {
        let Some(page) = page else {
            self.clear();
            return;
        };
        if page.page_index == 0 {
            self.pages.clear();
        }
        self.pages.insert(page.page_index, page.items);
        self.total_pages = Some(page.total_pages);
    }

    pub fn clear(&mut self) {
        self.pages.clear();
        self.total_pages = None;
    }

    /// Total page count reported by the last applied page.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pages.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.values().all(Vec::is_empty)
    }

    /// Puts a freshly created item at the head of the list.
    pub fn insert_front(&mut self, item: Item) {
        self.remove(&item.id);
        self.pages.entry(0).or_default().insert(0, item);
    }

    /// Drops an item deleted elsewhere. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.len();
        for items in self.pages.values_mut() {
            items.retain(|item| item.id != id);
        }
        self.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::new(id, format!("title {id}"), "provider")
    }

    fn page(index: u32, ids: &[&str]) -> Page {
        Page {
            items: ids.iter().map(|id| item(id)).collect(),
            page_index: index,
            total_pages: 3,
        }
    }

    fn ids(acc: &ResultAccumulator) -> Vec<&str> {
        acc.items().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn first_page_replaces_and_later_pages_append() {
        let mut acc = ResultAccumulator::new();
        acc.apply(Some(page(0, &["a", "b"])));
        acc.apply(Some(page(1, &["c"])));
        assert_eq!(ids(&acc), vec!["a", "b", "c"]);

        acc.apply(Some(page(0, &["x"])));
        assert_eq!(ids(&acc), vec!["x"]);
        assert_eq!(acc.total_pages(), Some(3));
    }

    #[test]
    fn missing_payload_empties_the_list() {
        let mut acc = ResultAccumulator::new();
        acc.apply(Some(page(0, &["a"])));
        acc.apply(None);
        assert!(acc.is_empty());
        assert_eq!(acc.total_pages(), None);
    }

    #[test]
    fn refetched_page_replaces_its_slice() {
        let mut acc = ResultAccumulator::new();
        acc.apply(Some(page(0, &["a", "b"])));
        acc.apply(Some(page(1, &["c", "d"])));
        acc.apply(Some(page(1, &["c", "e"])));
        assert_eq!(ids(&acc), vec!["a", "b", "c", "e"]);
        assert_eq!(acc.len(), 4);
    }

    #[test]
    fn side_channel_insert_and_remove() {
        let mut acc = ResultAccumulator::new();
        acc.apply(Some(page(0, &["a"])));
        acc.apply(Some(page(1, &["b"])));

        acc.insert_front(item("new"));
        assert_eq!(ids(&acc), vec!["new", "a", "b"]);

        assert!(acc.remove("b"));
        assert!(!acc.remove("missing"));
        assert_eq!(ids(&acc), vec!["new", "a"]);

        acc.insert_front(item("a"));
        assert_eq!(ids(&acc), vec!["a", "new"]);
    }
}
