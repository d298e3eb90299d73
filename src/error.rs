//! Error types for the record processor.

use migrator_converters::{ConversionError, ConverterKind};
use migrator_core::FieldType;
use postgresql_catalog::CatalogError;
use std::time::Duration;
use thiserror::Error;

/// Invalid processor configuration, reported by `Processor::configure`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("dsn is required")]
    MissingDsn,

    #[error("failed creating repository: {0}")]
    InvalidDsn(#[source] CatalogError),

    #[error("empty field reference in {list} of collection {collection:?}")]
    EmptyFieldReference {
        collection: String,
        list: &'static str,
    },

    #[error("field {field:?} of collection {collection:?} is listed more than once")]
    DuplicateField { collection: String, field: String },

    #[error("invalid open_timeout: {0}")]
    InvalidTimeout(String),

    #[error("unable to parse config: {0}")]
    Deserialize(String),
}

/// Failure to bring the processor up, from configuration or `open`.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("unable to fetch collections: {0}")]
    Schema(#[from] CatalogError),

    #[error("field {field:?} not found in collection {collection:?}")]
    MissingField { collection: String, field: String },

    #[error("{kind} converter cannot handle {collection}.{field} of type {field_type}")]
    IncompatibleField {
        collection: String,
        field: String,
        kind: ConverterKind,
        field_type: FieldType,
    },

    #[error("open did not finish within {0:?}")]
    OpenTimeout(Duration),
}

/// Failure to process a single record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("unable to get collection: metadata key {key:?} not found")]
    MissingCollection { key: &'static str },

    #[error("bad record payload: {found} found, structured expected")]
    PayloadNotStructured { found: &'static str },

    #[error("failed converting field {field:?}: {source}")]
    Conversion {
        field: String,
        #[source]
        source: ConversionError,
    },
}
