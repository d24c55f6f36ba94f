#![forbid(unsafe_code)]
//! schemabridge: translate declared job columns into the row and type
//! objects a table/stream engine consumes.
//!
//! This facade re-exports the workspace crates:
//! - [`model`]: logical type model, field descriptors, config, fingerprints
//! - [`table`]: translator entry points, converters, table schema builder

pub use schemabridge_core as model;
pub use schemabridge_table as table;

pub mod prelude {
    pub use schemabridge_core::prelude::*;
    pub use schemabridge_table::{
        create_row_type, create_row_type_from_fields, data_type, data_type_with, row_type,
        type_information, type_information_of, type_information_with, RawTypeConverter,
        SqlTypeConverter, TableColumn, TableSchema,
    };
}
