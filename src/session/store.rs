//! Insertion-ordered keyed store
//!
//! Backs both the vocabulary and the grammar rules:
//! - Iteration follows first-insertion order
//! - Re-inserting a key overwrites the value in place
//! - Nothing is ever removed

use rustc_hash::FxHashMap;

/// Keyed entries that iterate in the order their keys were first added
#[derive(Clone, Debug)]
pub struct OrderedStore<V> {
    /// Key → position in `entries`
    index: FxHashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> OrderedStore<V> {
    pub fn new() -> Self {
        OrderedStore {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite. Returns the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for OrderedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_insertion_order() {
        let mut store = OrderedStore::new();
        store.insert("b", 1);
        store.insert("a", 2);
        store.insert("c", 3);

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = OrderedStore::new();
        store.insert("hola", "hello");
        store.insert("gracias", "thanks");

        let previous = store.insert("hola", "hi");
        assert_eq!(previous, Some("hello"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("hola"), Some(&"hi"));
        assert_eq!(store.iter().next(), Some(("hola", &"hi")));
    }

    #[test]
    fn test_empty() {
        let store: OrderedStore<u32> = OrderedStore::default();
        assert!(store.is_empty());
        assert_eq!(store.get("missing"), None);
    }
}
