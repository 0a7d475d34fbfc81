//! Storage-layer shape of a design pattern.

use serde::{Deserialize, Serialize};

use super::Content;
use crate::types::RecordId;

/// A design pattern document as held by the store.
///
/// Identical to [`DesignPattern`](super::DesignPattern) except for the
/// identifier, which is store-native and only present once inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPatternRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(rename = "contentData", default)]
    pub content_data: Option<Vec<Content>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{to_document, ID_FIELD};

    #[test]
    fn document_omits_unassigned_id() {
        let record = DesignPatternRecord {
            title: "Singleton".into(),
            ..Default::default()
        };
        let doc = to_document(&record).unwrap();
        assert!(!doc.contains_key(ID_FIELD));
        assert_eq!(doc["title"], "Singleton");
    }

    #[test]
    fn document_carries_assigned_id_as_hex() {
        let id = RecordId::new();
        let record = DesignPatternRecord {
            id: Some(id),
            ..Default::default()
        };
        let doc = to_document(&record).unwrap();
        assert_eq!(doc[ID_FIELD], serde_json::json!(id.to_hex()));
    }
}
