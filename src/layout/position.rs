use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An insertion-ordered mapping from item name to its 1-based position index
/// within one display category.
///
/// Positions are contiguous: a map of `n` items always covers `1..=n` in
/// sequence order. Iteration and serialization preserve that order, while
/// [`position`](PositionMap::position) answers keyed lookups through a hash
/// index.
#[derive(Debug, Clone, Default)]
pub struct PositionMap {
    entries: Vec<(String, u32)>,
    index: AHashMap<String, u32>,
}

// The index is derived from the entries, so equality is entry equality.
impl PartialEq for PositionMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PositionMap {}

impl PositionMap {
    /// Numbers a deduplicated item sequence 1-based, in order.
    ///
    /// The sequence must already be free of duplicates; the aggregation step
    /// guarantees that for every caller in this crate.
    pub fn from_sequence<I, S>(sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<(String, u32)> = sequence
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name.into(), (index + 1) as u32))
            .collect();
        let index = entries
            .iter()
            .map(|(name, position)| (name.clone(), *position))
            .collect();
        Self { entries, index }
    }

    /// The 1-based position of `name`, if the category contains it.
    pub fn position(&self, name: &str) -> Option<u32> {
        self.index.get(name).copied()
    }

    /// Entries in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(name, position)| (name.as_str(), *position))
    }

    /// Item names in position order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object whose keys keep position order, so repeated
// plans of the same order produce byte-identical output.
impl Serialize for PositionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, position) in &self.entries {
            map.serialize_entry(name, position)?;
        }
        map.end()
    }
}
