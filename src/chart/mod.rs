//! Charts
//!
//! - **spec**: `ChartSpec`, `ChartKind`, `TickFormat`, `ChartTheme`
//! - **builders**: one builder per chart kind plus `build_chart`
//! - **artifact**: `ChartArtifact`, the resolved, embeddable result
//! - **error**: `ChartError`
//!
//! # Example
//!
//! ```rust
//! use humdash::chart::{build_bar, ChartSpec, TickFormat};
//! use humdash::dataset::mock_dataset;
//!
//! let dataset = mock_dataset().unwrap();
//! let spec = ChartSpec::bar("Region", "Population")
//!     .title("Population by Region")
//!     .y_ticks(TickFormat::PlainInteger);
//!
//! let chart = build_bar(&dataset, &spec).unwrap();
//! assert_eq!(chart.point_count(), 6);
//! ```

pub mod artifact;
pub mod builders;
pub mod error;
pub mod spec;

pub use artifact::{Axis, ChartArtifact, Trace};
pub use builders::{
    build_bar, build_chart, build_histogram, build_line, build_line_markers, build_scatter,
};
pub use error::{ChartError, ChartResult};
pub use spec::{ChartKind, ChartSpec, ChartTheme, TickFormat};
