//! Convenient re-exports for downstream crates.

pub use crate::config::ConverterConfig;
pub use crate::error::{Error, Result};
pub use crate::field::{FieldClass, FieldConf};
pub use crate::hash::Hash256;
pub use crate::schema::{DataType, Field, LogicalType, RowType};
pub use crate::types::TypeInfo;
