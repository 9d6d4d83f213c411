use std::collections::HashMap as Table;
use std::hash::{Hash, Hasher};

use crate::runtime::object::Object;

/// Key wrapper routing table equality and hashing through Object semantics.
///
/// Reference-typed objects (Function, Array, VarArgs, HashMap) are never
/// equal, even to themselves, and hashing them is fatal, so they can never
/// be inserted as keys. The remaining variants satisfy the reflexivity `Eq`
/// expects.
#[derive(Debug, Clone)]
struct ObjectKey(Object);

impl PartialEq for ObjectKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl Eq for ObjectKey {}

impl Hash for ObjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash_code());
    }
}

/// Hash table keyed by runtime values.
///
/// Built by pushing key/value pairs in sequence; a later pair with an equal
/// key overwrites the stored value. Lookup never fails: absent keys yield
/// the Nil sentinel.
#[derive(Debug, Clone, Default)]
pub struct HashMap {
    map: Table<ObjectKey, Object>,
}

impl HashMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(Object, Object)]) -> Self {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    pub fn insert(&mut self, key: Object, value: Object) {
        self.map.insert(ObjectKey(key), value);
    }

    pub fn get(&self, key: &Object) -> Object {
        self.map
            .get(&ObjectKey(key.clone()))
            .cloned()
            .unwrap_or_else(Object::nil)
    }

    /// Visits every pair exactly once, in unspecified (table) order.
    pub fn iter(&self) -> impl Iterator<Item = (&Object, &Object)> {
        self.map.iter().map(|(key, value)| (&key.0, value))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
