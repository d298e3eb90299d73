//! Field value converters for replaying MySQL change records into PostgreSQL.
//!
//! Each converter turns one field value in the MySQL connector's
//! representation into what PostgreSQL accepts for the learned column type:
//!
//! - [`Converter::boolean`] - ambiguous MySQL scalars to strict booleans
//! - [`Converter::set`] - comma-joined SET strings to quoted array literals
//! - [`Converter::timestamp`] - zero timestamps to NULL
//!
//! Every converter is built wrapped in the null short-circuit, so a null
//! input always yields null without reaching the type-specific logic.
//!
//! # Example
//!
//! ```
//! use migrator_converters::{converter_for, Converter};
//! use migrator_core::{FieldType, Value};
//!
//! let tags = FieldType::array(FieldType::enumeration(["a", "b"]));
//! let converter = converter_for(&tags).unwrap();
//! assert_eq!(
//!     converter.convert(Value::string("a,b")).unwrap(),
//!     Value::string(r#"{"a","b"}"#)
//! );
//!
//! let active = Converter::boolean();
//! assert_eq!(active.convert(Value::string("1")).unwrap(), Value::Bool(true));
//! ```

mod boolean;
mod error;
mod middleware;
mod registry;
mod set;
mod timestamp;

pub use error::{ConversionError, Result};
pub use registry::converter_for;

use migrator_core::{EnumType, FieldType, Value};
use std::fmt;
use std::sync::Arc;

use boolean::BooleanConverter;
use middleware::NullSafe;
use set::SetConverter;
use timestamp::TimestampConverter;

/// Type-specific conversion logic.
///
/// Implementations are only reachable through [`Converter`], which always
/// puts them behind [`NullSafe`].
pub(crate) trait Convert: fmt::Debug + Send + Sync {
    fn convert(&self, value: Value) -> Result<Value>;
}

/// Kind of conversion applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    Boolean,
    Set,
    Timestamp,
}

impl ConverterKind {
    /// Build a converter of this kind for a column of `field_type`.
    ///
    /// Returns `None` for [`ConverterKind::Set`] when the column is neither an
    /// enum nor an array of enum, since the admissible labels are unknown.
    pub fn bind(self, field_type: &FieldType) -> Option<Converter> {
        match self {
            Self::Boolean => Some(Converter::boolean()),
            Self::Timestamp => Some(Converter::timestamp()),
            Self::Set => field_type.as_enum().cloned().map(Converter::set),
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::Set => write!(f, "set"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A field converter, reused for every record of a pipeline run.
#[derive(Debug)]
pub struct Converter {
    kind: ConverterKind,
    inner: Box<dyn Convert>,
}

impl Converter {
    fn wrap<C: Convert + 'static>(kind: ConverterKind, converter: C) -> Self {
        Self {
            kind,
            inner: Box::new(NullSafe::new(converter)),
        }
    }

    pub fn boolean() -> Self {
        Self::wrap(ConverterKind::Boolean, BooleanConverter)
    }

    /// Set converter checking elements against `allowed`.
    pub fn set(allowed: Arc<EnumType>) -> Self {
        Self::wrap(ConverterKind::Set, SetConverter::new(allowed))
    }

    pub fn timestamp() -> Self {
        Self::wrap(ConverterKind::Timestamp, TimestampConverter)
    }

    pub fn kind(&self) -> ConverterKind {
        self.kind
    }

    /// Convert one field value.
    pub fn convert(&self, value: Value) -> Result<Value> {
        self.inner.convert(value)
    }
}
