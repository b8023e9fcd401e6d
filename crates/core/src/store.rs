//! Ordered record-store abstraction.
//!
//! Each sub-domain owns exactly one collection of records and mutates it with
//! whole-record replacement (read the record, produce a new one, put it back).
//! The store is the injectable seam: the in-memory implementation below is the
//! default, and a persistent backend can be substituted without changing any
//! command/query contract.

use std::sync::{Arc, RwLock};

/// Key/value store abstraction for a single sub-domain collection.
///
/// `list` must return records in insertion order; `upsert` of an existing key
/// replaces the record in place without disturbing that order.
pub trait RecordStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> RecordStore<K, V> for Arc<S>
where
    S: RecordStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory, insertion-ordered store.
///
/// Backed by a `Vec` under an `RwLock`: the collections here are session-sized,
/// and the lock makes the store safe to share behind `Arc` in a service
/// context. Each write holds the lock for the whole read-modify-write, which
/// serializes writers on the collection.
#[derive(Debug)]
pub struct InMemoryRecordStore<K, V> {
    inner: RwLock<Vec<(K, V)>>,
}

impl<K, V> InMemoryRecordStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<K, V> Default for InMemoryRecordStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecordStore<K, V> for InMemoryRecordStore<K, V>
where
    K: Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let records = self.inner.read().ok()?;
        records
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn upsert(&self, key: K, value: V) {
        if let Ok(mut records) = self.inner.write() {
            match records.iter().position(|(k, _)| *k == key) {
                Some(pos) => records[pos].1 = value,
                None => records.push((key, value)),
            }
        }
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(records) => records.iter().map(|(_, v)| v.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.read().map(|records| records.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_insertion_order() {
        let store: InMemoryRecordStore<u32, &str> = InMemoryRecordStore::new();
        store.upsert(3, "c");
        store.upsert(1, "a");
        store.upsert(2, "b");
        assert_eq!(store.list(), vec!["c", "a", "b"]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let store: InMemoryRecordStore<u32, &str> = InMemoryRecordStore::new();
        store.upsert(1, "a");
        store.upsert(2, "b");
        store.upsert(1, "a2");
        assert_eq!(store.list(), vec!["a2", "b"]);
        assert_eq!(store.get(&1), Some("a2"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_missing_key_is_none() {
        let store: InMemoryRecordStore<u32, &str> = InMemoryRecordStore::new();
        assert_eq!(store.get(&42), None);
        assert!(store.is_empty());
    }
}
