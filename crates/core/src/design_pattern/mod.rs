//! The design pattern resource: entity and record models, the repository
//! over the storage gateway, and the domain service on top of it.

pub mod record;
pub mod repository;
pub mod service;

use serde::{Deserialize, Deserializer, Serialize};

pub use record::DesignPatternRecord;
pub use repository::{DesignPatternRepo, DesignPatternRepository, RepositoryError};
pub use service::{DesignPatternManager, DesignPatternService};

/// Human-readable entity name used in domain errors.
pub const ENTITY_NAME: &str = "Design Pattern";

/// Logical collection that stores design pattern records.
pub const COLLECTION: &str = "designpatterns";

/// Externally visible design pattern.
///
/// `id` is empty until the pattern has been persisted. Missing or `null`
/// fields decode as their empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPattern {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(rename = "contentData")]
    pub content_data: Option<Vec<Content>>,
}

/// One block of a design pattern's body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
