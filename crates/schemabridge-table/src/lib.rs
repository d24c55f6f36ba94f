#![forbid(unsafe_code)]
//! schemabridge-table: declared job columns → engine row/type objects.
//!
//! - `table_util`: the translator entry points
//! - `data_type_util`: value class → logical type
//! - `converter`: the `RawTypeConverter` seam for raw type strings
//! - `sql`: a generic SQL type-string converter
//! - `table_schema`: physical column list + builder

pub mod converter;
pub mod data_type_util;
pub mod sql;
pub mod table_schema;
pub mod table_util;

pub use converter::RawTypeConverter;
pub use sql::SqlTypeConverter;
pub use table_schema::{TableColumn, TableSchema, TableSchemaBuilder};
pub use table_util::{
    create_row_type, create_row_type_from_fields, data_type, data_type_with, row_type,
    type_information, type_information_of, type_information_with,
};
