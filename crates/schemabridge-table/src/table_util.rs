//! Translate declared job columns into the row/type objects of the engine.
//!
//! Two families of entry points:
//! - class based (`type_information`, `data_type`): each declared type is
//!   reduced to its value class and mapped through `data_type_util`;
//! - converter based (`create_row_type*`): each raw type string goes through
//!   an injected `RawTypeConverter`. Only used by data sync jobs, where the
//!   connector owns the type vocabulary.
//!
//! All functions are pure; converter errors are returned as-is.

use schemabridge_core::config::ConverterConfig;
use schemabridge_core::error::{Error, Result};
use schemabridge_core::field::FieldConf;
use schemabridge_core::schema::{Field, LogicalType, RowType};
use schemabridge_core::types::TypeInfo;

use crate::converter::RawTypeConverter;
use crate::data_type_util;
use crate::table_schema::{TableColumn, TableSchema};

/// Runtime type descriptor for the declared columns.
///
/// No columns yields the untyped `TypeInfo::Generic` placeholder. Blank or
/// duplicate column names are rejected with `Error::Schema`.
pub fn type_information(fields: &[FieldConf]) -> Result<TypeInfo> {
    type_information_with(fields, &ConverterConfig::default())
}

/// [`type_information`] with explicit parameter defaults.
pub fn type_information_with(fields: &[FieldConf], config: &ConverterConfig) -> Result<TypeInfo> {
    if fields.is_empty() {
        return Ok(TypeInfo::Generic);
    }
    Ok(TypeInfo::Internal(resolve_row(fields, config)?))
}

/// Runtime type descriptor from already resolved types and parallel names.
pub fn type_information_of<S: AsRef<str>>(
    types: &[LogicalType],
    names: &[S],
) -> Result<TypeInfo> {
    Ok(TypeInfo::Internal(row_type(types, names)?))
}

/// Row type from parallel type/name sequences, in order.
pub fn row_type<S: AsRef<str>>(types: &[LogicalType], names: &[S]) -> Result<RowType> {
    let row = RowType::of(types, names)?;
    #[cfg(feature = "tracing")]
    tracing::trace!(fields = row.len(), "derived row type");
    Ok(row)
}

/// `ROW<...> NOT NULL` for the declared columns.
///
/// The row itself is never null; column nullability is kept as declared.
pub fn data_type(fields: &[FieldConf]) -> Result<LogicalType> {
    data_type_with(fields, &ConverterConfig::default())
}

/// [`data_type`] with explicit parameter defaults.
pub fn data_type_with(fields: &[FieldConf], config: &ConverterConfig) -> Result<LogicalType> {
    Ok(resolve_row(fields, config)?.into_not_null())
}

/// Row logical type for raw type strings, resolved by `converter`.
///
/// Fails on the first string the converter rejects; nothing partial is
/// returned.
pub fn create_row_type<N, T, C>(names: &[N], types: &[T], converter: &C) -> Result<LogicalType>
where
    N: AsRef<str>,
    T: AsRef<str>,
    C: RawTypeConverter + ?Sized,
{
    if names.len() != types.len() {
        return Err(Error::Invariant(format!(
            "row type needs one name per type: {} names vs {} types",
            names.len(),
            types.len()
        )));
    }

    let mut builder = TableSchema::builder();
    for (name, ty) in names.iter().zip(types) {
        let data_type = converter.apply(ty.as_ref())?;
        builder.add(TableColumn::physical(name.as_ref(), data_type));
    }
    let schema = builder.build()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(fields = schema.field_count(), "derived row type from type strings");
    Ok(schema.to_row_data_type())
}

/// Same as [`create_row_type`], reading names and type strings from the
/// declared columns.
pub fn create_row_type_from_fields<C>(fields: &[FieldConf], converter: &C) -> Result<LogicalType>
where
    C: RawTypeConverter + ?Sized,
{
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    let types: Vec<&str> = fields.iter().map(|f| f.field_type.as_str()).collect();
    create_row_type(&names, &types, converter)
}

fn resolve_row(fields: &[FieldConf], config: &ConverterConfig) -> Result<RowType> {
    let columns = fields
        .iter()
        .map(|f| Ok(Field::of(f.name.clone(), data_type_util::declared_field_type(f, config)?)))
        .collect::<Result<Vec<_>>>()?;
    let row = RowType::try_new(columns)?;
    #[cfg(feature = "tracing")]
    tracing::trace!(fields = row.len(), "derived row type from field classes");
    Ok(row)
}
