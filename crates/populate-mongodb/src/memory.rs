//! In-memory document store.
//!
//! Backs `load --dry-run` and the loader tests. Mirrors the MongoDB
//! behaviors the loader relies on: missing `_id`s are assigned, duplicate
//! `_id`s are rejected, and a rejected batch keeps the documents inserted
//! before the duplicate.

use crate::error::LoadError;
use crate::store::DocumentStore;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Document>>,
    /// `_id`s held per collection, by display form (numeric types compare equal).
    ids: HashMap<String, HashSet<String>>,
    indexes: Vec<(String, Document)>,
}

/// Document store held entirely in process memory.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    failing_collections: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every insert into `collection` fail with an unexpected error.
    pub fn with_failing_collection(mut self, collection: impl Into<String>) -> Self {
        self.failing_collections.insert(collection.into());
        self
    }

    /// Snapshot of the documents held in `collection`.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.lock()
            .collections
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Names of the collections holding at least one document.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .lock()
            .collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Every index created so far, as `(collection, keys)`.
    pub fn indexes(&self) -> Vec<(String, Document)> {
        self.lock().indexes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writable(&self, collection: &str) -> Result<(), LoadError> {
        if self.failing_collections.contains(collection) {
            return Err(LoadError::Unexpected(format!(
                "write to '{collection}' rejected"
            )));
        }
        Ok(())
    }

    fn insert(&self, collection: &str, documents: Vec<Document>) -> Result<u64, LoadError> {
        self.check_writable(collection)?;

        let mut state = self.lock();
        let State {
            collections, ids, ..
        } = &mut *state;
        let stored = collections.entry(collection.to_string()).or_default();
        let seen = ids.entry(collection.to_string()).or_default();
        let mut inserted = 0;

        for mut document in documents {
            let id = document
                .entry("_id".to_string())
                .or_insert_with(|| Bson::ObjectId(ObjectId::new()))
                .clone();
            if !seen.insert(id.to_string()) {
                return Err(LoadError::Unexpected(format!(
                    "duplicate key in '{collection}': _id {id}"
                )));
            }
            stored.push(document);
            inserted += 1;
        }

        Ok(inserted)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<(), LoadError> {
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<u64, LoadError> {
        self.insert(collection, documents)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<u64, LoadError> {
        self.insert(collection, vec![document])
    }

    async fn create_index(&self, collection: &str, keys: Document) -> Result<String, LoadError> {
        let name = keys
            .iter()
            .map(|(field, direction)| format!("{field}_{direction}"))
            .collect::<Vec<_>>()
            .join("_");

        let mut state = self.lock();
        let exists = state
            .indexes
            .iter()
            .any(|(c, k)| c == collection && *k == keys);
        if !exists {
            state.indexes.push((collection.to_string(), keys));
        }
        Ok(name)
    }

    async fn document_ids(&self, collection: &str) -> Result<Vec<Bson>, LoadError> {
        Ok(self
            .lock()
            .collections
            .get(collection)
            .map(|docs| docs.iter().filter_map(|d| d.get("_id").cloned()).collect())
            .unwrap_or_default())
    }

    async fn set_field(
        &self,
        collection: &str,
        id: Bson,
        field: &str,
        value: Bson,
    ) -> Result<(), LoadError> {
        self.check_writable(collection)?;

        let mut state = self.lock();
        if let Some(document) = state
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.get("_id") == Some(&id)))
        {
            document.insert(field, value);
        }
        Ok(())
    }
}
