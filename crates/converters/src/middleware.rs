//! Behavior shared by every converter.

use crate::{Convert, Result};
use migrator_core::Value;

/// Null short-circuit: a null input yields null without invoking the
/// wrapped converter.
#[derive(Debug)]
pub(crate) struct NullSafe<C> {
    inner: C,
}

impl<C> NullSafe<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Convert> Convert for NullSafe<C> {
    fn convert(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        self.inner.convert(value)
    }
}
