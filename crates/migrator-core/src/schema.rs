//! Learned schema of the target collections.

use crate::types::FieldType;
use std::collections::HashMap;

/// Field types of one collection, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTypes {
    fields: HashMap<String, FieldType>,
}

impl FieldTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, field_type: FieldType) {
        self.fields.insert(column.into(), field_type);
    }

    pub fn field(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    /// Column names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FieldType)> for FieldTypes {
    fn from_iter<I: IntoIterator<Item = (S, FieldType)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Collection name to learned field types.
///
/// Built once when the processor opens and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSchema {
    collections: HashMap<String, FieldTypes>,
}

impl CollectionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field types of `collection`, if it was fetched.
    pub fn fields(&self, collection: &str) -> Option<&FieldTypes> {
        self.collections.get(collection)
    }

    /// Record the type of one column, creating the collection entry on demand.
    pub fn insert_field(&mut self, collection: &str, column: &str, field_type: FieldType) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(column, field_type);
    }

    pub fn contains(&self, collection: &str) -> bool {
        self.collections.contains_key(collection)
    }

    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
