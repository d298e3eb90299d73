//! Logical field types learned from the target catalog.
//!
//! A [`FieldType`] is built once per catalog column when the processor opens
//! and never changes afterwards. Enum label sets are shared behind an [`Arc`]
//! so the same set can back both the schema entry and the converter bound to
//! that column.

use chrono::DateTime;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Zero timestamp the MySQL source driver emits for `0000-00-00 00:00:00`.
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

/// Logical type of a target column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Plain column, every value is accepted as-is
    Any,
    /// Strict boolean column
    Boolean,
    /// `timestamp with time zone` column
    Timestamp,
    /// Array column owning its element type (MySQL SET maps to an array of enum)
    Array(Box<FieldType>),
    /// Enumerated type with a fixed label set
    Enum(Arc<EnumType>),
}

impl FieldType {
    /// Wrap an item type into an array type.
    pub fn array(item: FieldType) -> Self {
        Self::Array(Box::new(item))
    }

    /// Build an enum type from labels in catalog order.
    pub fn enumeration<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(Arc::new(EnumType::new(labels)))
    }

    /// Decide whether a candidate string is admissible for this type.
    ///
    /// Arrays accept the comma-joined form the MySQL connector produces for
    /// SET columns, with every element admissible for the item type.
    pub fn is_suitable(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Boolean => parse_bool(value).is_some(),
            Self::Timestamp => DateTime::parse_from_rfc3339(value).is_ok(),
            Self::Array(item) => value.split(',').all(|el| item.is_suitable(el)),
            Self::Enum(e) => e.contains(value),
        }
    }

    /// Enum backing this type, either directly or as the array item.
    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Array(item) => match item.as_ref() {
                Self::Enum(e) => Some(e),
                _ => None,
            },
            Self::Any | Self::Boolean | Self::Timestamp => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Boolean => write!(f, "boolean"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Array(item) => write!(f, "array<{item}>"),
            Self::Enum(e) => write!(f, "enum({})", e.labels().join(", ")),
        }
    }
}

/// Admissible labels of an enumerated type.
#[derive(Debug, Clone)]
pub struct EnumType {
    labels: Vec<String>,
    allowed: HashSet<String>,
}

impl EnumType {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let allowed = labels.iter().cloned().collect();
        Self { labels, allowed }
    }

    /// Labels in catalog order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.allowed.contains(label)
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

/// Parse the conventional boolean literals.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
