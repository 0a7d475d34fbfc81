//! Domain service for design patterns.
//!
//! Converts between the externally visible [`DesignPattern`] and the
//! repository's [`DesignPatternRecord`], and narrows repository failures to
//! [`CoreError`]. Only an absent record keeps its identity; every other
//! cause, a malformed identifier included, is logged here and replaced by
//! [`CoreError::Internal`].

use async_trait::async_trait;

use super::{
    DesignPattern, DesignPatternRecord, DesignPatternRepository, RepositoryError, ENTITY_NAME,
};
use crate::error::CoreError;
use crate::types::{InvalidRecordId, RecordId};

/// Use cases exposed to the HTTP layer.
#[async_trait]
pub trait DesignPatternService: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<DesignPattern, CoreError>;

    /// Persist a new pattern. Any caller-supplied `id` is ignored.
    async fn create(&self, pattern: DesignPattern) -> Result<DesignPattern, CoreError>;

    async fn delete(&self, id: &str) -> Result<(), CoreError>;

    /// Replace an existing pattern. `pattern.id` must be a valid identifier.
    async fn update(&self, pattern: DesignPattern) -> Result<DesignPattern, CoreError>;
}

/// [`DesignPatternService`] implementation over a repository.
pub struct DesignPatternManager<R> {
    repo: R,
}

impl<R: DesignPatternRepository> DesignPatternManager<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: DesignPatternRepository> DesignPatternService for DesignPatternManager<R> {
    async fn get_by_id(&self, id: &str) -> Result<DesignPattern, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(record) => Ok(record.into()),
            Err(err) => Err(narrow(err, "Failed to fetch design pattern")),
        }
    }

    async fn create(&self, pattern: DesignPattern) -> Result<DesignPattern, CoreError> {
        match self.repo.create(DesignPatternRecord::for_creation(pattern)).await {
            Ok(record) => Ok(record.into()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to create design pattern");
                Err(CoreError::Internal)
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.repo
            .delete(id)
            .await
            .map_err(|err| narrow(err, "Failed to delete design pattern"))
    }

    async fn update(&self, pattern: DesignPattern) -> Result<DesignPattern, CoreError> {
        let record = match DesignPatternRecord::try_from(pattern) {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(error = %err, "Failed to update design pattern");
                return Err(CoreError::Internal);
            }
        };
        match self.repo.update(record).await {
            Ok(record) => Ok(record.into()),
            Err(err) => Err(narrow(err, "Failed to update design pattern")),
        }
    }
}

/// Keep the absent-record outcome, log and hide everything else.
fn narrow(err: RepositoryError, context: &'static str) -> CoreError {
    match err {
        RepositoryError::NotFound => CoreError::NotFound {
            entity: ENTITY_NAME,
        },
        other => {
            tracing::error!(error = %other, "{context}");
            CoreError::Internal
        }
    }
}

impl From<DesignPatternRecord> for DesignPattern {
    fn from(record: DesignPatternRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: record.title,
            subtitle: record.subtitle,
            content_data: record.content_data,
        }
    }
}

impl TryFrom<DesignPattern> for DesignPatternRecord {
    type Error = InvalidRecordId;

    fn try_from(pattern: DesignPattern) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(RecordId::parse_hex(&pattern.id)?),
            title: pattern.title,
            subtitle: pattern.subtitle,
            content_data: pattern.content_data,
        })
    }
}

impl DesignPatternRecord {
    /// Build a record for insertion, dropping whatever id the caller sent.
    pub fn for_creation(pattern: DesignPattern) -> Self {
        Self {
            id: None,
            title: pattern.title,
            subtitle: pattern.subtitle,
            content_data: pattern.content_data,
        }
    }
}
