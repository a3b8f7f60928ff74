//! Ordered in-memory item store.
//!
//! Lookups are linear scans by exact name and the first match wins. The store
//! itself enforces nothing; name uniqueness is checked by [`crate::ops::create`].

use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the item at `position`. An out-of-range position leaves the
    /// store untouched and returns `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<Item> {
        (position < self.items.len()).then(|| self.items.remove(position))
    }
}

impl From<Vec<Item>> for ItemStore {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> ItemStore {
        ItemStore::from(vec![Item::new("pickles", 2), Item::new("fritos", 3)])
    }

    #[test]
    fn new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn push_appends_in_order() {
        let mut store = store();
        store.push(Item::new("gum", 1));
        let names: Vec<_> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["pickles", "fritos", "gum"]);
    }

    #[test]
    fn find_matches_exact_name_only() {
        let store = store();
        assert_eq!(store.find("fritos").map(|i| i.name.as_str()), Some("fritos"));
        assert!(store.find("Fritos").is_none());
        assert_eq!(store.position("fritos"), Some(1));
        assert_eq!(store.position("salsa"), None);
    }

    #[test]
    fn first_match_wins_on_duplicate_names() {
        let mut store = store();
        store.push(Item::new("pickles", 9));
        assert_eq!(store.position("pickles"), Some(0));
        assert_eq!(store.find("pickles").unwrap().price, json!(2));
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut store = store();
        store.find_mut("pickles").unwrap().price = json!(5);
        assert_eq!(store.items()[0].price, json!(5));
    }

    #[test]
    fn remove_at_out_of_range_is_a_noop() {
        let mut store = store();
        assert!(store.remove_at(2).is_none());
        assert_eq!(store.len(), 2);
        assert_eq!(store.remove_at(0).unwrap().name, "pickles");
        assert_eq!(store.len(), 1);
    }
}
