//! Logical type model. Pure data; no engine dependency here.
//!
//! `DataType` is the semantic type tag, `LogicalType` pairs it with a
//! nullability flag, and `RowType` is the ordered, named collection of
//! columns that describes one record. The `Display` impls print the summary
//! strings downstream engines use (`ROW<`a` INT, `b` STRING> NOT NULL`).

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::{hash_serde, Hash256};

/// Maximum decimal precision representable in 128 bits.
pub const MAX_DECIMAL_PRECISION: u8 = 38;

/// Maximum fractional-second precision for TIME/TIMESTAMP.
pub const MAX_TIME_PRECISION: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal128 { precision: u8, scale: u8 },
    Char { length: u32 },
    /// Variable-length string (VARCHAR / STRING).
    Utf8,
    Binary,
    Date32,
    Time { precision: u8 },
    Timestamp { precision: u8 },
    Array(Box<LogicalType>),
    Row(RowType),
}

impl DataType {
    pub fn is_row(&self) -> bool {
        matches!(self, DataType::Row(_))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Boolean => f.write_str("BOOLEAN"),
            DataType::Int8 => f.write_str("TINYINT"),
            DataType::Int16 => f.write_str("SMALLINT"),
            DataType::Int32 => f.write_str("INT"),
            DataType::Int64 => f.write_str("BIGINT"),
            DataType::Float32 => f.write_str("FLOAT"),
            DataType::Float64 => f.write_str("DOUBLE"),
            DataType::Decimal128 { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)
            }
            DataType::Char { length } => write!(f, "CHAR({})", length),
            DataType::Utf8 => f.write_str("STRING"),
            DataType::Binary => f.write_str("BYTES"),
            DataType::Date32 => f.write_str("DATE"),
            DataType::Time { precision } => write!(f, "TIME({})", precision),
            DataType::Timestamp { precision } => write!(f, "TIMESTAMP({})", precision),
            DataType::Array(elem) => write!(f, "ARRAY<{}>", elem),
            DataType::Row(row) => write!(f, "{}", row),
        }
    }
}

/// A `DataType` together with its nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalType {
    pub data_type: DataType,
    pub nullable: bool,
}

impl LogicalType {
    /// Nullable type, the default for resolved columns.
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            nullable: true,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// The row this type describes, if it is a ROW.
    pub fn as_row(&self) -> Option<&RowType> {
        match &self.data_type {
            DataType::Row(row) => Some(row),
            _ => None,
        }
    }
}

impl From<DataType> for LogicalType {
    fn from(data_type: DataType) -> Self {
        LogicalType::new(data_type)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_type)?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    pub fn of(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self::new(name, logical_type.data_type, logical_type.nullable)
    }

    pub fn logical_type(&self) -> LogicalType {
        LogicalType {
            data_type: self.data_type.clone(),
            nullable: self.nullable,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.name, self.data_type)?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        Ok(())
    }
}

/// Ordered, named columns of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowType {
    pub fields: Vec<Field>,
}

impl RowType {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Build a row from parallel type/name sequences, preserving order.
    ///
    /// Both sequences must have the same length; a mismatch is reported as
    /// `Error::Invariant` rather than silently truncating the row.
    pub fn of<S: AsRef<str>>(types: &[LogicalType], names: &[S]) -> Result<Self> {
        if types.len() != names.len() {
            return Err(Error::Invariant(format!(
                "row type needs one name per type: {} types vs {} names",
                types.len(),
                names.len()
            )));
        }
        Self::try_new(
            types
                .iter()
                .zip(names)
                .map(|(t, n)| Field::of(n.as_ref(), t.clone()))
                .collect(),
        )
    }

    /// Like `new`, but rejects blank and duplicate field names.
    pub fn try_new(fields: Vec<Field>) -> Result<Self> {
        check_field_names(fields.iter().map(|f| f.name.as_str()))?;
        Ok(Self::new(fields))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn field_types(&self) -> Vec<LogicalType> {
        self.fields.iter().map(Field::logical_type).collect()
    }

    /// Wrap this row in a logical type whose row value is never null.
    pub fn into_not_null(self) -> LogicalType {
        LogicalType::new(DataType::Row(self)).not_null()
    }

    /// Stable content hash of names, types, nullability and order.
    pub fn fingerprint(&self) -> Result<Hash256> {
        hash_serde(self)
    }
}

/// Field names of a row must be non-blank and unique.
pub fn check_field_names<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(Error::Schema(format!(
                "field names must not be blank, got '{}'",
                name
            )));
        }
        if !seen.insert(name) {
            return Err(Error::Schema(format!("duplicate column name '{}'", name)));
        }
    }
    Ok(())
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ROW<")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", field)?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_strings() {
        let row = RowType::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("price", DataType::Decimal128 { precision: 10, scale: 2 }, true),
            Field::new(
                "tags",
                DataType::Array(Box::new(LogicalType::new(DataType::Utf8))),
                true,
            ),
        ]);
        assert_eq!(
            row.to_string(),
            "ROW<`id` BIGINT NOT NULL, `price` DECIMAL(10, 2), `tags` ARRAY<STRING>>"
        );
        assert_eq!(
            row.into_not_null().to_string(),
            "ROW<`id` BIGINT NOT NULL, `price` DECIMAL(10, 2), `tags` ARRAY<STRING>> NOT NULL"
        );
    }

    #[test]
    fn of_rejects_length_mismatch() {
        let types = vec![LogicalType::new(DataType::Int32)];
        let err = RowType::of(&types, &["a", "b"]).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)));
    }

    #[test]
    fn of_rejects_blank_and_duplicate_names() {
        let types = vec![
            LogicalType::new(DataType::Int32),
            LogicalType::new(DataType::Int64),
        ];
        for names in [["id", "id"], ["", "b"], ["a", "  "]] {
            let err = RowType::of(&types, &names).unwrap_err();
            assert!(matches!(err, Error::Schema(_)), "{names:?}");
        }
        assert!(RowType::of(&types, &["id", "ID"]).is_ok());
    }

    #[test]
    fn fingerprint_tracks_order() {
        let ab = RowType::of(
            &[LogicalType::new(DataType::Int32), LogicalType::new(DataType::Utf8)],
            &["a", "b"],
        )
        .unwrap();
        let ba = RowType::of(
            &[LogicalType::new(DataType::Utf8), LogicalType::new(DataType::Int32)],
            &["b", "a"],
        )
        .unwrap();
        assert_eq!(ab.fingerprint().unwrap(), ab.clone().fingerprint().unwrap());
        assert_ne!(ab.fingerprint().unwrap(), ba.fingerprint().unwrap());
    }
}
