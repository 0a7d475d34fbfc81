//! PostgreSQL adapter: documents stored as JSONB rows in the `documents` table.

use std::sync::Arc;

use async_trait::async_trait;
use sections_core::store::{
    Document, DocumentStore, IdFilter, RawCollection, StoreError, StoreResult, ID_FIELD,
};
use sections_core::types::RecordId;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

/// [`DocumentStore`] over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn collection(&self, name: &str) -> Arc<dyn RawCollection> {
        Arc::new(PgCollection {
            pool: self.pool.clone(),
            name: name.to_string(),
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// One logical collection inside the `documents` table.
pub struct PgCollection {
    pool: PgPool,
    name: String,
}

#[async_trait]
impl RawCollection for PgCollection {
    async fn find_one(&self, filter: &IdFilter) -> StoreResult<Document> {
        let row: (Uuid, Value) =
            sqlx::query_as("SELECT id, body FROM documents WHERE collection = $1 AND id = $2")
                .bind(&self.name)
                .bind(filter.id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        let (id, body) = row;
        let mut document = match body {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Serialization(serde::de::Error::custom(format!(
                    "stored body is not an object: {other}"
                ))))
            }
        };
        document.insert(
            ID_FIELD.to_string(),
            Value::String(RecordId::from(id).to_hex()),
        );
        Ok(document)
    }

    async fn insert_one(&self, mut document: Document) -> StoreResult<RecordId> {
        document.remove(ID_FIELD);
        let id = RecordId::new();
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(&self.name)
            .bind(id.as_uuid())
            .bind(Value::Object(document))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::debug!(collection = %self.name, %id, "Document inserted");
        Ok(id)
    }

    async fn delete_one(&self, filter: &IdFilter) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(&self.name)
            .bind(filter.id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn replace_one(&self, filter: &IdFilter, mut document: Document) -> StoreResult<u64> {
        document.remove(ID_FIELD);
        let result = sqlx::query(
            "UPDATE documents SET body = $3, updated_at = NOW()
             WHERE collection = $1 AND id = $2",
        )
        .bind(&self.name)
        .bind(filter.id.as_uuid())
        .bind(Value::Object(document))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }
}

/// `RowNotFound` becomes the gateway's NotFound; everything else passes through.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        other => StoreError::backend(other),
    }
}
