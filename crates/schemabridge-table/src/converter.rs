//! Pluggable conversion from raw type strings to logical types.
//!
//! Each connector knows how its source system spells types (`VARCHAR2`,
//! `INT UNSIGNED`, `timestamptz`, ...). The translator never interprets
//! those strings itself; it asks a `RawTypeConverter` and propagates any
//! failure unchanged.

use schemabridge_core::error::Result;
use schemabridge_core::schema::LogicalType;

/// Maps one declared type string to a logical type.
///
/// Implementations report unrecognized or malformed strings with
/// `Error::UnsupportedType`. Plain closures implement this trait, so a
/// function value can be passed wherever a converter is expected.
pub trait RawTypeConverter: Send + Sync {
    fn apply(&self, type_string: &str) -> Result<LogicalType>;
}

impl<F> RawTypeConverter for F
where
    F: Fn(&str) -> Result<LogicalType> + Send + Sync,
{
    fn apply(&self, type_string: &str) -> Result<LogicalType> {
        self(type_string)
    }
}
