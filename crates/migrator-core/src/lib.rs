//! Core types for the mysql-pg-migrator record processor.
//!
//! This crate provides the foundational types shared by the converter and
//! catalog crates:
//!
//! - [`FieldType`] - Logical type of a target column, learned from the catalog
//! - [`CollectionSchema`] - Learned field types for a set of collections
//! - [`Value`] - Dynamically typed field value carried inside a record
//! - [`Record`] - Change-data-capture record exchanged with the host pipeline
//!
//! # Architecture
//!
//! ```text
//! migrator-core (this crate)
//!    │
//!    ├─── migrator-converters  (converts Values according to a FieldType)
//!    └─── postgresql-catalog   (resolves FieldTypes from the Postgres catalog)
//! ```

pub mod record;
pub mod schema;
pub mod types;
pub mod values;

pub use record::{Data, Metadata, Payload, Record, StructuredData, COLLECTION_METADATA_KEY};
pub use schema::{CollectionSchema, FieldTypes};
pub use types::{parse_bool, EnumType, FieldType, ZERO_TIMESTAMP};
pub use values::Value;
