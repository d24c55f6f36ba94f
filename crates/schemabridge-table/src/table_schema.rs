//! Ordered physical columns, assembled through a builder.

use serde::{Deserialize, Serialize};

use schemabridge_core::error::Result;
use schemabridge_core::schema::{check_field_names, Field, LogicalType, RowType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    name: String,
    data_type: LogicalType,
}

impl TableColumn {
    /// A column backed by a physical field of the record.
    pub fn physical(name: impl Into<String>, data_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &LogicalType {
        &self.data_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<TableColumn>,
}

impl TableSchema {
    pub fn builder() -> TableSchemaBuilder {
        TableSchemaBuilder::default()
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.columns.iter().map(TableColumn::name).collect()
    }

    pub fn field_types(&self) -> Vec<LogicalType> {
        self.columns.iter().map(|c| c.data_type.clone()).collect()
    }

    /// The record type of this table. A row value is never null.
    pub fn to_row_data_type(&self) -> LogicalType {
        RowType::new(
            self.columns
                .iter()
                .map(|c| Field::of(c.name.clone(), c.data_type.clone()))
                .collect(),
        )
        .into_not_null()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableSchemaBuilder {
    columns: Vec<TableColumn>,
}

impl TableSchemaBuilder {
    pub fn add(&mut self, column: TableColumn) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn field(&mut self, name: impl Into<String>, data_type: LogicalType) -> &mut Self {
        self.add(TableColumn::physical(name, data_type))
    }

    /// Column names must be non-blank and unique.
    pub fn build(self) -> Result<TableSchema> {
        check_field_names(self.columns.iter().map(TableColumn::name))?;
        Ok(TableSchema {
            columns: self.columns,
        })
    }
}
