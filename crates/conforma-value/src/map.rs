use indexmap::IndexMap;

use crate::key::ObjectKey;
use crate::value::Value;

/// Insertion-ordered mapping from scalar keys to values.
///
/// Entry order is observable: it decides which failure a validator reports
/// first, so removal must not reorder surviving entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map(IndexMap<ObjectKey, Value>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &ObjectKey) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &ObjectKey) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &ObjectKey) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts at the end if the key is new, overwrites in place otherwise.
    pub fn insert(&mut self, key: impl Into<ObjectKey>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// O(n) removal that preserves the order of the remaining entries.
    pub fn shift_remove(&mut self, key: &ObjectKey) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ObjectKey> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectKey, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(ObjectKey, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (ObjectKey, Value)>>(iter: T) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a ObjectKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ObjectKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Map {
    type Item = (ObjectKey, Value);
    type IntoIter = indexmap::map::IntoIter<ObjectKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
