//! Error types for migrator-converters crate.

use thiserror::Error;

/// Errors that can occur while converting a single field value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{expected} is expected, {found} found")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unable to convert {0:?} to boolean")]
    InvalidBoolean(String),

    #[error("unexpected set element found: {0:?}")]
    UnknownSetElement(String),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
