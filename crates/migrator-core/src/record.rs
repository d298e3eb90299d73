//! Change-data-capture records exchanged with the host pipeline.
//!
//! The processor only ever reads the collection name from [`Record::metadata`]
//! and reads/writes named fields of `payload.after`. Everything else is
//! carried through untouched.

use crate::values::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata key holding the collection (table) a record belongs to.
pub const COLLECTION_METADATA_KEY: &str = "opencdc.collection";

/// Record metadata attached by connectors and the host.
pub type Metadata = BTreeMap<String, String>;

/// Field name to value mapping of a structured payload.
pub type StructuredData = BTreeMap<String, Value>;

/// Operation that produced the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Snapshot,
}

/// Record key or payload side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data {
    /// Field name to value mapping
    Structured(StructuredData),
    /// Opaque bytes the connector did not decode
    Raw(Vec<u8>),
}

impl Data {
    pub fn as_structured_mut(&mut self) -> Option<&mut StructuredData> {
        match self {
            Self::Structured(s) => Some(s),
            Self::Raw(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::Raw(_) => "raw",
        }
    }
}

/// Before/after images of the changed row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Data>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Data>,
}

/// A single change record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque position assigned by the source connector
    #[serde(default)]
    pub position: String,
    pub operation: Operation,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Data>,
    #[serde(default)]
    pub payload: Payload,
}

impl Record {
    /// Create a record for `collection` whose `after` image is `after`.
    pub fn new(
        position: impl Into<String>,
        operation: Operation,
        collection: &str,
        after: StructuredData,
    ) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(COLLECTION_METADATA_KEY.to_string(), collection.to_string());
        Self {
            position: position.into(),
            operation,
            metadata,
            key: None,
            payload: Payload {
                before: None,
                after: Some(Data::Structured(after)),
            },
        }
    }

    /// Collection name from the record metadata.
    pub fn collection(&self) -> Option<&str> {
        self.metadata.get(COLLECTION_METADATA_KEY).map(String::as_str)
    }
}
