//! Column-oriented, immutable table
//!
//! A [`Dataset`] is an ordered list of named [`Column`]s of equal length.
//! Once built it only exposes read access.

use serde::Serialize;
use std::collections::HashSet;

use super::error::{SchemaError, SchemaResult};

/// Values of a single column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    /// Labels such as region names
    Text(Vec<String>),
    /// Whole-number indicators (counts, populations, percentages)
    Integer(Vec<i64>),
    /// Fractional indicators
    Float(Vec<f64>),
}

impl ColumnData {
    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.len(),
            ColumnData::Integer(v) => v.len(),
            ColumnData::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the column can back a numeric axis
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnData::Text(_))
    }

    /// Human-readable value at `row`, used for grouping and keys
    pub fn label(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::Text(v) => v.get(row).cloned(),
            ColumnData::Integer(v) => v.get(row).map(|n| n.to_string()),
            ColumnData::Float(v) => v.get(row).map(|n| n.to_string()),
        }
    }

    /// Copy the rows at `indices`, in that order
    pub fn select(&self, indices: &[usize]) -> ColumnData {
        match self {
            ColumnData::Text(v) => ColumnData::Text(indices.iter().map(|&i| v[i].clone()).collect()),
            ColumnData::Integer(v) => ColumnData::Integer(indices.iter().map(|&i| v[i]).collect()),
            ColumnData::Float(v) => ColumnData::Float(indices.iter().map(|&i| v[i]).collect()),
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn text<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn integer(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Integer(values.into_iter().collect()),
        }
    }

    pub fn float(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Float(values.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Immutable table of equal-length columns
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
    key: Option<String>,
}

impl Dataset {
    /// Build a dataset, checking that column names are unique and
    /// every column has the same number of rows.
    pub fn new(columns: Vec<Column>) -> SchemaResult<Self> {
        let first = columns.first().ok_or(SchemaError::Empty)?;
        let rows = first.len();

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.name.clone()));
            }
            if column.len() != rows {
                return Err(SchemaError::LengthMismatch {
                    column: column.name.clone(),
                    expected: rows,
                    actual: column.len(),
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            key: None,
        })
    }

    /// Declare `column` as the row key; its values must be unique.
    pub fn with_key(mut self, column: &str) -> SchemaResult<Self> {
        let data = &self
            .column(column)
            .ok_or_else(|| SchemaError::UnknownColumn(column.to_string()))?
            .data;

        let mut seen = HashSet::new();
        for row in 0..self.rows {
            let value = data.label(row).unwrap_or_default();
            if !seen.insert(value.clone()) {
                return Err(SchemaError::DuplicateKey {
                    column: column.to_string(),
                    value,
                });
            }
        }

        self.key = Some(column.to_string());
        Ok(self)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Name of the key column, if one was declared
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
