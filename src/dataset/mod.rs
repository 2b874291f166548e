//! Dataset
//!
//! The fixed, in-memory table every chart is drawn from:
//!
//! - **table**: `Dataset`, `Column` and `ColumnData`
//! - **mock**: the compiled-in humanitarian indicators
//! - **error**: `SchemaError`

pub mod error;
pub mod mock;
pub mod table;

pub use error::{SchemaError, SchemaResult};
pub use mock::mock_dataset;
pub use table::{Column, ColumnData, Dataset};
