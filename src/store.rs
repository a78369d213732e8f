//! In-memory record collections, one per resource kind. Nothing is persisted; collections live as long as the process.

use crate::error::AppError;
use crate::resource::ResourceKind;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Free-form record body. Insertion order is kept (serde_json `preserve_order`).
pub type Fields = Map<String, Value>;

/// Key owned by the store; stripped from client-supplied fields.
pub const ID_KEY: &str = "id";

/// One stored record, serialized flat: `{"id": 1, ...fields}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Fields,
}

/// Ordered records of one kind plus the id counter. Ids come from a monotonic counter, so a
/// delete followed by an insert never hands out an id that was already used.
#[derive(Debug)]
pub struct Collection {
    records: Vec<Record>,
    next_id: u64,
}

impl Default for Collection {
    fn default() -> Self {
        Collection {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Collection {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn insert(&mut self, mut fields: Fields) -> &Record {
        fields.shift_remove(ID_KEY);
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Record { id, fields });
        &self.records[self.records.len() - 1]
    }

    /// Shallow merge: supplied keys overwrite, absent keys are kept.
    pub fn merge(&mut self, id: u64, fields: Fields) -> Option<&Record> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        for (key, value) in fields {
            if key != ID_KEY {
                record.fields.insert(key, value);
            }
        }
        Some(&*record)
    }

    pub fn remove(&mut self, id: u64) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }
}

/// Owns every enabled collection. Shared through `AppState`; each collection has its own lock and
/// id assignment happens under the write lock.
#[derive(Debug)]
pub struct ResourceStore {
    collections: HashMap<ResourceKind, RwLock<Collection>>,
}

impl ResourceStore {
    pub fn new(kinds: &[ResourceKind]) -> Self {
        ResourceStore {
            collections: kinds
                .iter()
                .map(|k| (*k, RwLock::new(Collection::default())))
                .collect(),
        }
    }

    pub fn is_enabled(&self, kind: ResourceKind) -> bool {
        self.collections.contains_key(&kind)
    }

    pub fn enabled_kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|k| self.is_enabled(*k))
            .collect()
    }

    fn collection(&self, kind: ResourceKind) -> Result<&RwLock<Collection>, AppError> {
        self.collections.get(&kind).ok_or_else(AppError::unknown_resource)
    }

    fn read(&self, kind: ResourceKind) -> Result<RwLockReadGuard<'_, Collection>, AppError> {
        self.collection(kind)?
            .read()
            .map_err(|_| AppError::Internal(format!("{} store lock poisoned", kind)))
    }

    fn write(&self, kind: ResourceKind) -> Result<RwLockWriteGuard<'_, Collection>, AppError> {
        self.collection(kind)?
            .write()
            .map_err(|_| AppError::Internal(format!("{} store lock poisoned", kind)))
    }

    pub fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, AppError> {
        Ok(self.read(kind)?.records().to_vec())
    }

    pub fn get(&self, kind: ResourceKind, id: u64) -> Result<Option<Record>, AppError> {
        Ok(self.read(kind)?.get(id).cloned())
    }

    pub fn create(&self, kind: ResourceKind, fields: Fields) -> Result<Record, AppError> {
        Ok(self.write(kind)?.insert(fields).clone())
    }

    pub fn update(&self, kind: ResourceKind, id: u64, fields: Fields) -> Result<Option<Record>, AppError> {
        Ok(self.write(kind)?.merge(id, fields).cloned())
    }

    pub fn delete(&self, kind: ResourceKind, id: u64) -> Result<Option<Record>, AppError> {
        Ok(self.write(kind)?.remove(id))
    }

    /// Insert each item as `create` would, under a single write lock. Returns the number inserted.
    pub fn seed<I>(&self, kind: ResourceKind, items: I) -> Result<usize, AppError>
    where
        I: IntoIterator<Item = Fields>,
    {
        let mut collection = self.write(kind)?;
        let mut count = 0;
        for fields in items {
            collection.insert(fields);
            count += 1;
        }
        Ok(count)
    }
}

/// The two vacation packages the service ships with when seeding is enabled.
pub fn sample_packages() -> Vec<Fields> {
    let samples = [
        json!({
            "name": "Hawaii Beach Getaway",
            "duration": "7 days",
            "price": 2500,
            "description": "A week-long escape to the beautiful beaches of Hawaii."
        }),
        json!({
            "name": "European Adventure",
            "duration": "14 days",
            "price": 4500,
            "description": "Explore the major cities of Europe in this two-week tour."
        }),
    ];
    samples
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(m) => Some(m),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(v: Value) -> Fields {
        match v {
            Value::Object(m) => m,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut c = Collection::default();
        for name in ["a", "b", "c"] {
            c.insert(fields(json!({ "name": name })));
        }
        let ids: Vec<u64> = c.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(c.get(2).map(|r| &r.fields["name"]), Some(&json!("b")));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut c = Collection::default();
        c.insert(fields(json!({ "name": "a" })));
        c.insert(fields(json!({ "name": "b" })));
        assert!(c.remove(1).is_some());
        let id = c.insert(fields(json!({ "name": "c" }))).id;
        assert_eq!(id, 3);
        let ids: Vec<u64> = c.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn client_id_is_ignored() {
        let mut c = Collection::default();
        let rec = c.insert(fields(json!({ "id": 99, "name": "a" }))).clone();
        assert_eq!(rec.id, 1);
        assert!(!rec.fields.contains_key(ID_KEY));

        let merged = c.merge(1, fields(json!({ "id": 42 }))).cloned();
        assert_eq!(merged.map(|r| r.id), Some(1));
        assert!(c.get(42).is_none());
    }

    #[test]
    fn merge_is_shallow_and_keeps_absent_keys() {
        let mut c = Collection::default();
        c.insert(fields(json!({ "name": "Trip", "price": 100, "meta": { "a": 1, "b": 2 } })));
        let rec = c
            .merge(1, fields(json!({ "price": 150, "meta": { "c": 3 } })))
            .cloned()
            .unwrap();
        assert_eq!(rec.fields["name"], json!("Trip"));
        assert_eq!(rec.fields["price"], json!(150));
        assert_eq!(rec.fields["meta"], json!({ "c": 3 }));
        assert!(c.merge(7, Fields::new()).is_none());
    }

    #[test]
    fn record_serializes_flat_with_id_first() {
        let rec = Record {
            id: 1,
            fields: fields(json!({ "name": "Test", "duration": "1 day", "price": 100, "description": "x" })),
        };
        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"{"id":1,"name":"Test","duration":"1 day","price":100,"description":"x"}"#
        );
    }

    #[test]
    fn disabled_kind_is_unknown() {
        let store = ResourceStore::new(&[ResourceKind::Package]);
        assert!(store.is_enabled(ResourceKind::Package));
        assert!(!store.is_enabled(ResourceKind::Customer));
        assert_eq!(store.enabled_kinds(), vec![ResourceKind::Package]);
        let err = store.list(ResourceKind::Customer).unwrap_err();
        assert!(matches!(err, AppError::NotFound { kind: None }));
    }

    #[test]
    fn seed_advances_the_counter() {
        let store = ResourceStore::new(&ResourceKind::ALL);
        assert_eq!(store.seed(ResourceKind::Package, sample_packages()).unwrap(), 2);
        let created = store
            .create(ResourceKind::Package, fields(json!({ "name": "New" })))
            .unwrap();
        assert_eq!(created.id, 3);
        assert!(store.list(ResourceKind::Customer).unwrap().is_empty());
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(ResourceStore::new(&[ResourceKind::Package]));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| {
                            store
                                .create(ResourceKind::Package, fields(json!({ "t": i, "n": j })))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let mut ids: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&200));
    }
}
