//! In-memory adapter.
//!
//! Keeps every collection in a shared map behind a `tokio::sync::RwLock`.
//! Data lives only as long as the process; suitable for development and
//! tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use sections_core::store::{
    Document, DocumentStore, IdFilter, RawCollection, StoreError, StoreResult, ID_FIELD,
};
use sections_core::types::RecordId;
use serde_json::Value;
use tokio::sync::RwLock;

type Collections = HashMap<String, BTreeMap<RecordId, Document>>;

/// [`DocumentStore`] holding documents in process memory.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn collection(&self, name: &str) -> Arc<dyn RawCollection> {
        Arc::new(MemoryCollection {
            collections: Arc::clone(&self.collections),
            name: name.to_string(),
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {}
}

pub struct MemoryCollection {
    collections: Arc<RwLock<Collections>>,
    name: String,
}

#[async_trait]
impl RawCollection for MemoryCollection {
    async fn find_one(&self, filter: &IdFilter) -> StoreResult<Document> {
        let collections = self.collections.read().await;
        let mut document = collections
            .get(&self.name)
            .and_then(|docs| docs.get(&filter.id))
            .cloned()
            .ok_or(StoreError::NotFound)?;
        document.insert(ID_FIELD.to_string(), Value::String(filter.id.to_hex()));
        Ok(document)
    }

    async fn insert_one(&self, mut document: Document) -> StoreResult<RecordId> {
        document.remove(ID_FIELD);
        let id = RecordId::new();
        self.collections
            .write()
            .await
            .entry(self.name.clone())
            .or_default()
            .insert(id, document);
        Ok(id)
    }

    async fn delete_one(&self, filter: &IdFilter) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(&self.name)
            .and_then(|docs| docs.remove(&filter.id));
        Ok(u64::from(removed.is_some()))
    }

    async fn replace_one(&self, filter: &IdFilter, mut document: Document) -> StoreResult<u64> {
        document.remove(ID_FIELD);
        let mut collections = self.collections.write().await;
        match collections
            .get_mut(&self.name)
            .and_then(|docs| docs.get_mut(&filter.id))
        {
            Some(slot) => {
                *slot = document;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
