//! Repository for design pattern records.

use async_trait::async_trait;

use super::{DesignPatternRecord, COLLECTION};
use crate::store::{Collection, DocumentStore, IdFilter, StoreError};
use crate::types::{InvalidRecordId, RecordId};

/// Errors surfaced by a [`DesignPatternRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("design pattern not found")]
    NotFound,

    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidRecordId),

    #[error("record has no identifier")]
    MissingIdentifier,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

/// CRUD operations over design pattern records, keyed by hex identifiers.
#[async_trait]
pub trait DesignPatternRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<DesignPatternRecord, RepositoryError>;

    /// Insert `record` and return it with its newly assigned identifier.
    async fn create(
        &self,
        record: DesignPatternRecord,
    ) -> Result<DesignPatternRecord, RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Replace the stored record with the same identifier. Returns the input
    /// unchanged; the store is not re-read.
    async fn update(
        &self,
        record: DesignPatternRecord,
    ) -> Result<DesignPatternRecord, RepositoryError>;
}

/// [`DesignPatternRepository`] backed by the storage gateway.
#[derive(Clone)]
pub struct DesignPatternRepo {
    collection: Collection<DesignPatternRecord>,
}

impl DesignPatternRepo {
    pub fn new(store: &dyn DocumentStore) -> Self {
        Self {
            collection: Collection::open(store, COLLECTION),
        }
    }
}

#[async_trait]
impl DesignPatternRepository for DesignPatternRepo {
    async fn get_by_id(&self, id: &str) -> Result<DesignPatternRecord, RepositoryError> {
        let filter = IdFilter::new(RecordId::parse_hex(id)?);
        Ok(self.collection.find_one(&filter).await?)
    }

    async fn create(
        &self,
        mut record: DesignPatternRecord,
    ) -> Result<DesignPatternRecord, RepositoryError> {
        let id = self.collection.insert_one(&record).await?;
        record.id = Some(id);
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let filter = IdFilter::new(RecordId::parse_hex(id)?);
        match self.collection.delete_one(&filter).await? {
            0 => Err(RepositoryError::NotFound),
            _ => Ok(()),
        }
    }

    async fn update(
        &self,
        record: DesignPatternRecord,
    ) -> Result<DesignPatternRecord, RepositoryError> {
        let id = record.id.ok_or(RepositoryError::MissingIdentifier)?;
        match self.collection.replace_one(&IdFilter::new(id), &record).await? {
            0 => Err(RepositoryError::NotFound),
            _ => Ok(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::design_pattern::Content;
    use crate::store::{Document, RawCollection, StoreResult, ID_FIELD};

    const KNOWN_ID: &str = "0190a1b2c3d47e8f9a0b1c2d3e4f5a6b";

    fn known_id() -> RecordId {
        RecordId::parse_hex(KNOWN_ID).unwrap()
    }

    /// Gateway double: one document under [`KNOWN_ID`], or every call fails.
    #[derive(Default)]
    struct FakeCollection {
        failing: bool,
        calls: Mutex<Vec<&'static str>>,
        replaced: Mutex<Option<Document>>,
    }

    impl FakeCollection {
        fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        fn record(&self, call: &'static str) -> StoreResult<()> {
            self.calls.lock().unwrap().push(call);
            if self.failing {
                Err(StoreError::backend(std::io::Error::other("some-error")))
            } else {
                Ok(())
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RawCollection for FakeCollection {
        async fn find_one(&self, filter: &IdFilter) -> StoreResult<Document> {
            self.record("find_one")?;
            if filter.id != known_id() {
                return Err(StoreError::NotFound);
            }
            let value = json!({
                ID_FIELD: KNOWN_ID,
                "title": "Some Design Pattern",
                "contentData": [{"title": "Intent", "description": "d", "image": ["a.png"]}],
            });
            Ok(value.as_object().cloned().unwrap())
        }

        async fn insert_one(&self, _document: Document) -> StoreResult<RecordId> {
            self.record("insert_one")?;
            Ok(known_id())
        }

        async fn delete_one(&self, filter: &IdFilter) -> StoreResult<u64> {
            self.record("delete_one")?;
            Ok(u64::from(filter.id == known_id()))
        }

        async fn replace_one(&self, filter: &IdFilter, document: Document) -> StoreResult<u64> {
            self.record("replace_one")?;
            *self.replaced.lock().unwrap() = Some(document);
            Ok(u64::from(filter.id == known_id()))
        }
    }

    struct FakeStore(Arc<FakeCollection>);

    #[async_trait]
    impl DocumentStore for FakeStore {
        fn collection(&self, name: &str) -> Arc<dyn RawCollection> {
            assert_eq!(name, COLLECTION);
            self.0.clone()
        }

        async fn ping(&self) -> StoreResult<()> {
            Ok(())
        }

        async fn close(&self) {}
    }

    fn repo_over(collection: FakeCollection) -> (DesignPatternRepo, Arc<FakeCollection>) {
        let collection = Arc::new(collection);
        let repo = DesignPatternRepo::new(&FakeStore(collection.clone()));
        (repo, collection)
    }

    #[tokio::test]
    async fn get_by_id_decodes_record() {
        let (repo, _) = repo_over(FakeCollection::default());
        let record = repo.get_by_id(KNOWN_ID).await.unwrap();
        assert_eq!(record.id, Some(known_id()));
        assert_eq!(record.title, "Some Design Pattern");
        assert_eq!(
            record.content_data,
            Some(vec![Content {
                title: "Intent".into(),
                description: "d".into(),
                image: vec!["a.png".into()],
            }])
        );
    }

    #[tokio::test]
    async fn get_by_id_normalizes_absent_document() {
        let (repo, _) = repo_over(FakeCollection::default());
        let err = repo.get_by_id(&RecordId::new().to_hex()).await.unwrap_err();
        assert_matches!(err, RepositoryError::NotFound);
    }

    #[tokio::test]
    async fn get_by_id_passes_store_errors_through() {
        let (repo, _) = repo_over(FakeCollection::failing());
        let err = repo.get_by_id(KNOWN_ID).await.unwrap_err();
        assert_matches!(err, RepositoryError::Store(StoreError::Backend(_)));
    }

    #[tokio::test]
    async fn malformed_ids_fail_before_any_store_call() {
        let (repo, collection) = repo_over(FakeCollection::default());

        let err = repo.get_by_id("aaaa").await.unwrap_err();
        assert_matches!(err, RepositoryError::InvalidIdentifier(_));

        let err = repo.delete("aaaa").await.unwrap_err();
        assert_matches!(err, RepositoryError::InvalidIdentifier(_));

        assert!(collection.calls().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_generated_id() {
        let (repo, _) = repo_over(FakeCollection::default());
        let created = repo
            .create(DesignPatternRecord {
                title: "Some Design Pattern".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(
            created,
            DesignPatternRecord {
                id: Some(known_id()),
                title: "Some Design Pattern".into(),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn create_propagates_store_errors() {
        let (repo, _) = repo_over(FakeCollection::failing());
        let err = repo.create(DesignPatternRecord::default()).await.unwrap_err();
        assert_matches!(err, RepositoryError::Store(_));
    }

    #[tokio::test]
    async fn delete_reports_missing_documents() {
        let (repo, collection) = repo_over(FakeCollection::default());
        repo.delete(KNOWN_ID).await.unwrap();

        let err = repo.delete(&RecordId::new().to_hex()).await.unwrap_err();
        assert_matches!(err, RepositoryError::NotFound);
        assert_eq!(collection.calls(), vec!["delete_one", "delete_one"]);
    }

    #[tokio::test]
    async fn update_returns_input_without_refetch() {
        let (repo, collection) = repo_over(FakeCollection::default());
        let record = DesignPatternRecord {
            id: Some(known_id()),
            title: "Renamed".into(),
            ..Default::default()
        };

        let updated = repo.update(record.clone()).await.unwrap();
        assert_eq!(updated, record);
        assert_eq!(collection.calls(), vec!["replace_one"]);

        let replaced = collection.replaced.lock().unwrap().clone().unwrap();
        assert_eq!(replaced["title"], "Renamed");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (repo, _) = repo_over(FakeCollection::default());
        let err = repo
            .update(DesignPatternRecord {
                id: Some(RecordId::new()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_matches!(err, RepositoryError::NotFound);
    }

    #[tokio::test]
    async fn update_without_id_never_reaches_the_store() {
        let (repo, collection) = repo_over(FakeCollection::default());
        let err = repo.update(DesignPatternRecord::default()).await.unwrap_err();
        assert_matches!(err, RepositoryError::MissingIdentifier);
        assert!(collection.calls().is_empty());
    }

    #[tokio::test]
    async fn update_propagates_store_errors() {
        let (repo, _) = repo_over(FakeCollection::failing());
        let err = repo
            .update(DesignPatternRecord {
                id: Some(known_id()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_matches!(err, RepositoryError::Store(_));
    }
}
