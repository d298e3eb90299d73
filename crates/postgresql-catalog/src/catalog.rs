//! The catalog query surface used for type resolution.
//!
//! Resolution only needs three questions answered, so any store that can
//! answer them (not only PostgreSQL) can drive it.

use crate::Result;
use async_trait::async_trait;

/// One row of column metadata, as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub table_name: String,
    pub column_name: String,
    /// Base type name (e.g. "integer", "boolean", "ARRAY", "USER-DEFINED")
    pub data_type: String,
    /// Schema the underlying type lives in
    pub udt_schema: String,
    /// Underlying type name; for arrays the element type prefixed with `_`
    pub udt_name: String,
}

impl ColumnInfo {
    pub fn new(
        table: &str,
        column: &str,
        data_type: &str,
        udt_schema: &str,
        udt_name: &str,
    ) -> Self {
        Self {
            table_name: table.to_string(),
            column_name: column.to_string(),
            data_type: data_type.to_string(),
            udt_schema: udt_schema.to_string(),
            udt_name: udt_name.to_string(),
        }
    }
}

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Columns of exactly the named tables.
    async fn columns(&self, tables: &[String]) -> Result<Vec<ColumnInfo>>;

    /// One-letter category code of the type `schema.type_name`.
    ///
    /// Fails unless exactly one type matches.
    async fn type_category(&self, schema: &str, type_name: &str) -> Result<String>;

    /// Labels of the enum type `schema.type_name`, in catalog order.
    async fn enum_range(&self, schema: &str, type_name: &str) -> Result<Vec<String>>;
}
