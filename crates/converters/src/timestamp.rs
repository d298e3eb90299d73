//! Zero timestamps to NULL.
//!
//! Legacy MySQL (5.5) accepts `0000-00-00 00:00:00`. The MySQL connector
//! turns it into the zero time [`ZERO_TIMESTAMP`], which must be stored as
//! NULL in PostgreSQL.

use crate::{Convert, ConversionError, Result};
use migrator_core::{Value, ZERO_TIMESTAMP};

#[derive(Debug)]
pub(crate) struct TimestampConverter;

impl Convert for TimestampConverter {
    fn convert(&self, value: Value) -> Result<Value> {
        match value.as_str() {
            Some(ZERO_TIMESTAMP) => Ok(Value::Null),
            Some(_) => Ok(value),
            None => Err(ConversionError::UnexpectedType {
                expected: "string",
                found: value.type_name(),
            }),
        }
    }
}
