//! Realized chart artifacts
//!
//! The output of applying a [`ChartSpec`](super::ChartSpec) to a dataset:
//! resolved column values grouped into traces, plus axis and theme settings.

use super::spec::{ChartKind, ChartTheme, TickFormat};
use crate::dataset::ColumnData;

/// One data series
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Legend entry; `None` for single-series charts
    pub name: Option<String>,
    pub x: ColumnData,
    /// Absent for histograms
    pub y: Option<ColumnData>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Axis labelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub title: String,
    pub tick_format: TickFormat,
    /// True when the axis carries numbers rather than categories
    pub numeric: bool,
}

/// An embeddable, immutable chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub title: String,
    pub traces: Vec<Trace>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend_title: Option<String>,
    pub theme: ChartTheme,
}

impl ChartArtifact {
    /// Axes that carry numeric values
    pub fn numeric_axes(&self) -> impl Iterator<Item = &Axis> {
        [&self.x_axis, &self.y_axis].into_iter().filter(|a| a.numeric)
    }

    /// Total number of points across all traces
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(Trace::len).sum()
    }
}
