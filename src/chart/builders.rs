//! Chart builders
//!
//! Pure functions turning a [`Dataset`] and a [`ChartSpec`] into a
//! [`ChartArtifact`]. A builder either returns a complete artifact or an
//! error; nothing is produced on failure.

use super::artifact::{Axis, ChartArtifact, Trace};
use super::error::{ChartError, ChartResult};
use super::spec::{ChartKind, ChartSpec};
use crate::dataset::{Column, Dataset};

/// Y axis title used for histogram bucket counts
pub const HISTOGRAM_Y_TITLE: &str = "count";

/// Build any kind of chart, dispatching on `spec.kind`
pub fn build_chart(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    let result = resolve(dataset, spec);

    match &result {
        Ok(artifact) => tracing::debug!(
            chart = %spec.title,
            kind = %spec.kind,
            traces = artifact.traces.len(),
            points = artifact.point_count(),
            "Built chart"
        ),
        Err(e) => tracing::warn!(chart = %spec.title, kind = %spec.kind, error = %e, "Chart build failed"),
    }

    result
}

pub fn build_bar(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    expect_kind(spec, matches!(spec.kind, ChartKind::Bar), "bar")?;
    build_chart(dataset, spec)
}

pub fn build_histogram(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    expect_kind(
        spec,
        matches!(spec.kind, ChartKind::Histogram { .. }),
        "histogram",
    )?;
    build_chart(dataset, spec)
}

pub fn build_line(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    expect_kind(spec, matches!(spec.kind, ChartKind::Line), "line")?;
    build_chart(dataset, spec)
}

pub fn build_line_markers(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    expect_kind(
        spec,
        matches!(spec.kind, ChartKind::LineMarkers),
        "line-with-markers",
    )?;
    build_chart(dataset, spec)
}

pub fn build_scatter(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    expect_kind(spec, matches!(spec.kind, ChartKind::Scatter), "scatter")?;
    build_chart(dataset, spec)
}

fn expect_kind(spec: &ChartSpec, ok: bool, expected: &str) -> ChartResult<()> {
    if ok {
        return Ok(());
    }
    let err = invalid(spec, format!("expected a {} spec, got {}", expected, spec.kind));
    tracing::warn!(chart = %spec.title, error = %err, "Chart build failed");
    Err(err)
}

fn invalid(spec: &ChartSpec, reason: impl Into<String>) -> ChartError {
    ChartError::InvalidSpec {
        chart: spec.title.clone(),
        reason: reason.into(),
    }
}

fn lookup<'a>(dataset: &'a Dataset, spec: &ChartSpec, field: &str) -> ChartResult<&'a Column> {
    dataset.column(field).ok_or_else(|| ChartError::UnknownField {
        chart: spec.title.clone(),
        field: field.to_string(),
        available: dataset.column_names().collect::<Vec<_>>().join(", "),
    })
}

fn require_numeric(spec: &ChartSpec, column: &Column) -> ChartResult<()> {
    if column.data.is_numeric() {
        Ok(())
    } else {
        Err(invalid(
            spec,
            format!("{} chart needs a numeric '{}' column", spec.kind, column.name),
        ))
    }
}

fn resolve(dataset: &Dataset, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    // Field existence is checked before any kind-specific rule.
    for field in spec.fields() {
        lookup(dataset, spec, field)?;
    }

    let x = lookup(dataset, spec, &spec.x)?;
    let y = match &spec.y {
        Some(field) => Some(lookup(dataset, spec, field)?),
        None => None,
    };
    let color = match &spec.color_by {
        Some(field) => Some(lookup(dataset, spec, field)?),
        None => None,
    };

    match (spec.kind, y) {
        (ChartKind::Histogram { bins }, y) => {
            if bins == 0 {
                return Err(invalid(spec, "histogram needs at least one bin"));
            }
            if y.is_some() {
                return Err(invalid(spec, "histogram takes no y field"));
            }
            require_numeric(spec, x)?;
        }
        (ChartKind::Scatter, Some(y)) => {
            require_numeric(spec, x)?;
            require_numeric(spec, y)?;
        }
        (ChartKind::Bar | ChartKind::Line | ChartKind::LineMarkers, Some(y)) => {
            require_numeric(spec, y)?;
        }
        (kind, None) => {
            return Err(invalid(spec, format!("{} chart needs a y field", kind)));
        }
    }

    let traces = group_rows(dataset.row_count(), color)
        .into_iter()
        .map(|(name, rows)| Trace {
            name,
            x: x.data.select(&rows),
            y: y.map(|col| col.data.select(&rows)),
        })
        .collect();

    let y_axis = match y {
        Some(col) => Axis {
            title: col.name.clone(),
            tick_format: spec.y_ticks,
            numeric: col.data.is_numeric(),
        },
        None => Axis {
            title: HISTOGRAM_Y_TITLE.to_string(),
            tick_format: spec.y_ticks,
            numeric: true,
        },
    };

    Ok(ChartArtifact {
        kind: spec.kind,
        title: spec.title.clone(),
        traces,
        x_axis: Axis {
            title: x.name.clone(),
            tick_format: spec.x_ticks,
            numeric: x.data.is_numeric(),
        },
        y_axis,
        legend_title: color.map(|col| col.name.clone()),
        theme: spec.theme.clone(),
    })
}

/// Split row indices by the value of `color`, in first-appearance order.
/// Without a color column every row lands in one unnamed group.
fn group_rows(rows: usize, color: Option<&Column>) -> Vec<(Option<String>, Vec<usize>)> {
    let Some(color) = color else {
        return vec![(None, (0..rows).collect())];
    };

    let mut groups: Vec<(Option<String>, Vec<usize>)> = Vec::new();
    for row in 0..rows {
        let label = color.data.label(row);
        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, members)) => members.push(row),
            None => groups.push((label, vec![row])),
        }
    }
    groups
}
