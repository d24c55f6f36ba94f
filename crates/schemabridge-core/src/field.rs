//! User-declared column descriptors from job configuration.
//!
//! Example (YAML):
//! ```yaml
//! column:
//!   - { name: "id",    type: "bigint", notNull: true }
//!   - { name: "name",  type: "varchar(64)" }
//!   - { name: "price", type: "decimal(10,2)" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One column as declared by the user.
///
/// The class-based translator reads `name`, `field_type`, `not_null`,
/// `precision` and `scale` (the latter two for decimal, time and timestamp
/// columns). `index`, `value`, `format` and `length` are connector
/// attributes carried through unchanged for readers and writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConf {
    pub name: String,

    /// Declared type string, e.g. `int`, `varchar(255)`, `decimal(10,2)`.
    #[serde(rename = "type")]
    pub field_type: String,

    /// Source column position, when the connector reads by index.
    #[serde(default)]
    pub index: Option<usize>,

    /// Constant value emitted instead of reading the column.
    #[serde(default)]
    pub value: Option<String>,

    /// Date/time pattern used by connectors that parse text values.
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub not_null: bool,

    #[serde(default)]
    pub length: Option<u32>,

    /// Overrides the class default for decimal/time/timestamp columns.
    #[serde(default)]
    pub precision: Option<u8>,

    /// Decimal scale; 0 when only `precision` is given.
    #[serde(default)]
    pub scale: Option<u8>,
}

impl FieldConf {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            index: None,
            value: None,
            format: None,
            not_null: false,
            length: None,
            precision: None,
            scale: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Runtime value class of the declared type.
    pub fn field_class(&self) -> FieldClass {
        FieldClass::from_type_name(&self.field_type)
    }
}

/// Runtime value class a declared type string resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldClass {
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigDecimal,
    String,
    Date,
    Time,
    Timestamp,
    Bytes,
}

impl FieldClass {
    /// Case-insensitive lookup; parameters such as `(10,2)` and trailing
    /// modifiers are ignored. Unrecognized names fall back to `String`.
    pub fn from_type_name(type_name: &str) -> Self {
        let lowered = type_name.trim().to_ascii_lowercase();
        let base = lowered
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or("");

        match base {
            "boolean" | "bool" | "bit" => FieldClass::Boolean,
            "tinyint" | "byte" => FieldClass::Byte,
            "smallint" | "short" => FieldClass::Short,
            "int" | "integer" | "mediumint" => FieldClass::Integer,
            "bigint" | "long" => FieldClass::Long,
            "float" | "real" => FieldClass::Float,
            "double" => FieldClass::Double,
            "decimal" | "numeric" | "bigdecimal" => FieldClass::BigDecimal,
            "date" => FieldClass::Date,
            "time" => FieldClass::Time,
            "timestamp" | "datetime" => FieldClass::Timestamp,
            "binary" | "varbinary" | "bytes" | "blob" => FieldClass::Bytes,
            _ => FieldClass::String,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldList {
    Bare(Vec<FieldConf>),
    Columns { column: Vec<FieldConf> },
}

impl FieldList {
    fn into_fields(self) -> Vec<FieldConf> {
        match self {
            FieldList::Bare(fields) | FieldList::Columns { column: fields } => fields,
        }
    }
}

/// Parse a field list from JSON: either a bare array or `{"column": [...]}`.
pub fn parse_fields_json(src: &str) -> Result<Vec<FieldConf>> {
    let list: FieldList =
        serde_json::from_str(src).map_err(|e| Error::Config(format!("field list: {}", e)))?;
    let fields = list.into_fields();
    #[cfg(feature = "tracing")]
    tracing::trace!(fields = fields.len(), "parsed JSON field list");
    Ok(fields)
}

/// Parse a field list from YAML: either a bare sequence or `column: [...]`.
pub fn parse_fields_yaml(src: &str) -> Result<Vec<FieldConf>> {
    let list: FieldList =
        serde_yaml::from_str(src).map_err(|e| Error::Config(format!("field list: {}", e)))?;
    let fields = list.into_fields();
    #[cfg(feature = "tracing")]
    tracing::trace!(fields = fields.len(), "parsed YAML field list");
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_ignores_case_and_parameters() {
        assert_eq!(FieldClass::from_type_name("INT"), FieldClass::Integer);
        assert_eq!(FieldClass::from_type_name(" Decimal(10,2) "), FieldClass::BigDecimal);
        assert_eq!(FieldClass::from_type_name("bigint unsigned"), FieldClass::Long);
        assert_eq!(FieldClass::from_type_name("varchar(255)"), FieldClass::String);
        assert_eq!(FieldClass::from_type_name("geometry"), FieldClass::String);
        assert_eq!(FieldClass::from_type_name(""), FieldClass::String);
    }
}
