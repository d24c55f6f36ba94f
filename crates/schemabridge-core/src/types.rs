//! Runtime type descriptors handed to the streaming engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::RowType;

/// Describes the record type flowing through a stream.
///
/// `Generic` is the untyped placeholder used when a job declares no
/// columns; `Internal` wraps the row type of the internal row format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeInfo {
    Generic,
    Internal(RowType),
}

impl TypeInfo {
    pub fn is_generic(&self) -> bool {
        matches!(self, TypeInfo::Generic)
    }

    pub fn row_type(&self) -> Option<&RowType> {
        match self {
            TypeInfo::Generic => None,
            TypeInfo::Internal(row) => Some(row),
        }
    }

    /// Number of columns; zero for the untyped placeholder.
    pub fn arity(&self) -> usize {
        self.row_type().map(RowType::len).unwrap_or(0)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInfo::Generic => f.write_str("GenericType<RowData>"),
            TypeInfo::Internal(row) => write!(f, "{}", row),
        }
    }
}
