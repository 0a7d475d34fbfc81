//! Storage gateway ports.
//!
//! The service and repository layers only ever see these traits. Concrete
//! adapters (PostgreSQL, in-memory) live in `sections-db` and are injected at
//! construction time, so nothing above this module depends on a database
//! driver.
//!
//! Documents travel through the gateway as JSON objects. The identifier is
//! never part of the stored body: adapters key documents by [`RecordId`] and
//! inject it under [`ID_FIELD`] when a document is read back.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::RecordId;

/// Document key that carries the store-native identifier.
pub const ID_FIELD: &str = "_id";

/// A stored document body.
pub type Document = Map<String, Value>;

/// Boxed driver error kept as the source of [`StoreError::Backend`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by a [`DocumentStore`] adapter.
///
/// Adapters must map their driver's "no such document" condition to
/// [`StoreError::NotFound`] and pass every other failure through as
/// [`StoreError::Backend`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Equality filter on the document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdFilter {
    pub id: RecordId,
}

impl IdFilter {
    pub fn new(id: RecordId) -> Self {
        Self { id }
    }
}

/// A connected document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Look up a collection handle by logical name.
    fn collection(&self, name: &str) -> Arc<dyn RawCollection>;

    /// Verify the store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Release the underlying connection(s).
    async fn close(&self);
}

/// Untyped collection handle exposing the four document operations.
#[async_trait]
pub trait RawCollection: Send + Sync {
    /// Fetch the document matching `filter`, with [`ID_FIELD`] populated.
    ///
    /// Returns [`StoreError::NotFound`] when no document matches.
    async fn find_one(&self, filter: &IdFilter) -> StoreResult<Document>;

    /// Insert a new document and return the identifier the store assigned.
    ///
    /// Any [`ID_FIELD`] entry in `document` is ignored.
    async fn insert_one(&self, document: Document) -> StoreResult<RecordId>;

    /// Delete the document matching `filter`, returning how many were removed.
    async fn delete_one(&self, filter: &IdFilter) -> StoreResult<u64>;

    /// Replace the body of the document matching `filter`, returning how
    /// many documents matched. Any [`ID_FIELD`] entry in `document` is
    /// ignored; the filter decides which document is replaced.
    async fn replace_one(&self, filter: &IdFilter, document: Document) -> StoreResult<u64>;
}

/// Typed view over a [`RawCollection`], converting records with serde.
pub struct Collection<T> {
    inner: Arc<dyn RawCollection>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _record: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(inner: Arc<dyn RawCollection>) -> Self {
        Self {
            inner,
            _record: PhantomData,
        }
    }

    /// Open the collection `name` on `store`.
    pub fn open(store: &dyn DocumentStore, name: &str) -> Self {
        Self::new(store.collection(name))
    }

    pub async fn find_one(&self, filter: &IdFilter) -> StoreResult<T> {
        let document = self.inner.find_one(filter).await?;
        Ok(serde_json::from_value(Value::Object(document))?)
    }

    pub async fn insert_one(&self, record: &T) -> StoreResult<RecordId> {
        self.inner.insert_one(to_document(record)?).await
    }

    pub async fn delete_one(&self, filter: &IdFilter) -> StoreResult<u64> {
        self.inner.delete_one(filter).await
    }

    pub async fn replace_one(&self, filter: &IdFilter, record: &T) -> StoreResult<u64> {
        self.inner.replace_one(filter, to_document(record)?).await
    }
}

/// Serialize a record into a document body.
///
/// Records that do not serialize to a JSON object are rejected.
pub fn to_document<T: Serialize>(record: &T) -> StoreResult<Document> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(serde::ser::Error::custom(
            format!("expected a JSON object, got {other}"),
        ))),
    }
}
