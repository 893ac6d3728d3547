//! Lookup table from [`ContentKey`] to slide-content components.

use std::collections::BTreeMap;

use crate::model::ContentKey;

/// Registry of stateless slide-content factories.
///
/// `C` is the component type. In the UI it is [`crate::SlideContent`]; tests use plain values.
#[derive(Debug, Clone)]
pub struct ContentMap<C> {
    entries: BTreeMap<ContentKey, C>,
}

impl<C> Default for ContentMap<C> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<C> ContentMap<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ContentMap::insert`].
    pub fn with(mut self, key: ContentKey, component: C) -> Self {
        self.insert(key, component);
        self
    }

    /// Registers `component` under `key`, returning the component it replaced.
    pub fn insert(&mut self, key: ContentKey, component: C) -> Option<C> {
        self.entries.insert(key, component)
    }

    pub fn get(&self, key: ContentKey) -> Option<&C> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: ContentKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ContentKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> FromIterator<(ContentKey, C)> for ContentMap<C> {
    fn from_iter<I: IntoIterator<Item = (ContentKey, C)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_registration_replaces_earlier() {
        let mut map = ContentMap::new().with(ContentKey("hero"), 1);
        assert_eq!(map.insert(ContentKey("hero"), 2), Some(1));
        assert_eq!(map.get(ContentKey("hero")), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn keys_are_sorted() {
        let map: ContentMap<u8> = [(ContentKey("b"), 0), (ContentKey("a"), 0)]
            .into_iter()
            .collect();
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec![ContentKey("a"), ContentKey("b")]
        );
        assert!(!map.contains(ContentKey("c")));
    }
}
