//! Column type resolution.
//!
//! This is the only place that knows how composite PostgreSQL types map onto
//! [`FieldType`]: an `ARRAY` column whose element type is in the enum category
//! becomes `Array(Enum)`, which is how a MySQL SET column lands in PostgreSQL.

use crate::{Catalog, CatalogError, ColumnInfo, Result};
use migrator_core::{CollectionSchema, FieldType};
use tracing::debug;

/// `pg_type.typcategory` of enumerated types.
///
/// See <https://www.postgresql.org/docs/current/catalog-pg-type.html>
pub const ENUM_CATEGORY: &str = "E";

/// Fetch the learned field types of exactly the `names` collections.
///
/// Every requested collection must be present in the catalog; a missing one
/// is an error rather than an empty entry.
pub async fn fetch_collections<C: Catalog + ?Sized>(
    catalog: &C,
    names: &[String],
) -> Result<CollectionSchema> {
    let columns = catalog.columns(names).await?;
    let mut schema = CollectionSchema::new();

    for column in &columns {
        if !names.contains(&column.table_name) {
            continue;
        }
        let field_type =
            resolve_column_type(catalog, column)
                .await
                .map_err(|e| CatalogError::Resolve {
                    table: column.table_name.clone(),
                    column: column.column_name.clone(),
                    source: Box::new(e),
                })?;
        debug!(
            "Resolved {}.{} ({}, {}) as {}",
            column.table_name, column.column_name, column.data_type, column.udt_name, field_type
        );
        schema.insert_field(&column.table_name, &column.column_name, field_type);
    }

    if let Some(missing) = names.iter().find(|name| !schema.contains(name)) {
        return Err(CatalogError::MissingCollection(missing.clone()));
    }

    Ok(schema)
}

/// Resolve the field type of one catalog column.
pub async fn resolve_column_type<C: Catalog + ?Sized>(
    catalog: &C,
    column: &ColumnInfo,
) -> Result<FieldType> {
    match column.data_type.to_lowercase().as_str() {
        "array" => {
            // udt_name of an array is its element type prefixed with '_'
            let element = column
                .udt_name
                .strip_prefix('_')
                .unwrap_or(&column.udt_name);
            let item = resolve_simple_type(catalog, &column.udt_schema, element).await?;
            Ok(FieldType::array(item))
        }
        "boolean" => Ok(FieldType::Boolean),
        "timestamp with time zone" => Ok(FieldType::Timestamp),
        _ => resolve_simple_type(catalog, &column.udt_schema, &column.udt_name).await,
    }
}

async fn resolve_simple_type<C: Catalog + ?Sized>(
    catalog: &C,
    schema: &str,
    type_name: &str,
) -> Result<FieldType> {
    let category = catalog.type_category(schema, type_name).await?;
    if category == ENUM_CATEGORY {
        let labels = catalog.enum_range(schema, type_name).await?;
        return Ok(FieldType::enumeration(labels));
    }
    Ok(FieldType::Any)
}
