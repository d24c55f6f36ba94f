#![forbid(unsafe_code)]
//! schemabridge-core: the logical type model shared by the translator.
//!
//! - `schema`: `DataType`, `LogicalType`, `Field`, `RowType`
//! - `types`: `TypeInfo`, the runtime type descriptor of a stream
//! - `field`: user-declared column descriptors and field-list parsing
//! - `config`: converter defaults, overridable from the environment
//! - `hash`: blake3 fingerprints for row types
//!
//! Everything here is plain owned data; no engine or I/O dependency.

pub mod config;
pub mod error;
pub mod field;
pub mod hash;
pub mod prelude;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
