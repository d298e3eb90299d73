//! Error types for postgresql-catalog crate.

use thiserror::Error;

/// Errors that can occur while introspecting the target catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    #[error("database name is not set in DSN")]
    MissingDatabase,

    #[error("failed to connect to postgres: {0}")]
    Connection(#[source] tokio_postgres::Error),

    #[error("failed to {what}: {source}")]
    Query {
        what: &'static str,
        #[source]
        source: tokio_postgres::Error,
    },

    #[error("bad type {type_name:?}: type categories found: {found:?}")]
    TypeCategory {
        type_name: String,
        found: Vec<String>,
    },

    #[error("type {0:?} is not an enum")]
    EnumRange(String),

    #[error("collection {0:?} not found in catalog")]
    MissingCollection(String),

    #[error("unable to resolve type of {table}.{column}: {source}")]
    Resolve {
        table: String,
        column: String,
        #[source]
        source: Box<CatalogError>,
    },
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
