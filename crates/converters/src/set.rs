//! MySQL SET strings to PostgreSQL array literals.
//!
//! The MySQL connector renders SET values as comma-separated labels. On the
//! PostgreSQL side the column is an array of an enum type, which needs an
//! array literal such as `{"a","b"}`.

use crate::{Convert, ConversionError, Result};
use migrator_core::{EnumType, FieldType, Value};
use std::sync::Arc;
use tracing::trace;

#[derive(Debug)]
pub(crate) struct SetConverter {
    /// Type every SET member must be suitable for
    member: FieldType,
}

impl SetConverter {
    pub(crate) fn new(allowed: Arc<EnumType>) -> Self {
        Self {
            member: FieldType::Enum(allowed),
        }
    }
}

impl Convert for SetConverter {
    fn convert(&self, value: Value) -> Result<Value> {
        let s = value.as_str().ok_or(ConversionError::UnexpectedType {
            expected: "string",
            found: value.type_name(),
        })?;

        if s.is_empty() {
            if self.member.is_suitable(s) {
                return Ok(Value::string(r#"{""}"#));
            }
            // No bits set in the MySQL bitmask
            trace!("Empty SET value and no empty label, storing NULL");
            return Ok(Value::Null);
        }

        // A MySQL SET member cannot contain a comma
        let mut elements = Vec::new();
        for el in s.split(',') {
            if !self.member.is_suitable(el) {
                return Err(ConversionError::UnknownSetElement(el.to_string()));
            }
            elements.push(quote_array_element(el));
        }

        Ok(Value::String(format!("{{{}}}", elements.join(","))))
    }
}

/// Double-quote an array element, escaping `"` and `\`.
fn quote_array_element(el: &str) -> String {
    let mut quoted = String::with_capacity(el.len() + 2);
    quoted.push('"');
    for c in el.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter(labels: &[&str]) -> SetConverter {
        SetConverter::new(Arc::new(EnumType::new(labels.iter().copied())))
    }

    #[test]
    fn test_members_become_array_literal() {
        let c = converter(&["a", "b", ""]);
        assert_eq!(
            c.convert(Value::string("a,b")),
            Ok(Value::string(r#"{"a","b"}"#))
        );
        assert_eq!(c.convert(Value::string("b")), Ok(Value::string(r#"{"b"}"#)));
    }

    #[test]
    fn test_empty_string_allowed_by_enum() {
        let c = converter(&["a", "b", ""]);
        assert_eq!(c.convert(Value::string("")), Ok(Value::string(r#"{""}"#)));
    }

    #[test]
    fn test_empty_string_not_allowed_becomes_null() {
        let c = converter(&["a", "b"]);
        assert_eq!(c.convert(Value::string("")), Ok(Value::Null));
    }

    #[test]
    fn test_unknown_element_is_named() {
        let c = converter(&["a", "b"]);
        assert_eq!(
            c.convert(Value::string("a,z")),
            Err(ConversionError::UnknownSetElement("z".to_string()))
        );
        let err = c.convert(Value::string("a,z")).unwrap_err();
        assert!(err.to_string().contains("\"z\""));
    }

    #[test]
    fn test_non_string_fails() {
        let c = converter(&["a"]);
        assert_eq!(
            c.convert(Value::Int(3)),
            Err(ConversionError::UnexpectedType {
                expected: "string",
                found: "int",
            })
        );
    }

    #[test]
    fn test_quoting_escapes() {
        assert_eq!(quote_array_element("plain"), r#""plain""#);
        assert_eq!(quote_array_element(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_array_element(r"back\slash"), r#""back\\slash""#);

        let c = converter(&["o'clock", "a b"]);
        assert_eq!(
            c.convert(Value::string("o'clock,a b")),
            Ok(Value::string(r#"{"o'clock","a b"}"#))
        );
    }
}
