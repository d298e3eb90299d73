//! MySQL boolean-ish scalars to strict booleans.

use crate::{Convert, ConversionError, Result};
use migrator_core::{parse_bool, Value};

/// MySQL has no real boolean: `TINYINT(1)` columns arrive as integers,
/// strings or bytes depending on the connector path.
#[derive(Debug)]
pub(crate) struct BooleanConverter;

impl BooleanConverter {
    /// Textual form of the value, as fed into the boolean grammar.
    fn to_text(value: &Value) -> String {
        match value {
            Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
            Value::String(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::UInt(u) => u.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Json(j) => j.to_string(),
            Value::Null => String::new(),
        }
    }
}

impl Convert for BooleanConverter {
    fn convert(&self, value: Value) -> Result<Value> {
        let text = Self::to_text(&value);
        parse_bool(&text)
            .map(Value::Bool)
            .ok_or(ConversionError::InvalidBoolean(text))
    }
}
