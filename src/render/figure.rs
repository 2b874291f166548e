//! Plotly figure encoding
//!
//! Converts a [`ChartArtifact`] into the `{data, layout}` JSON object that
//! `Plotly.newPlot` consumes. Theme colors are validated here.

use serde::Serialize;

use super::css;
use super::error::RenderResult;
use crate::chart::{Axis, ChartArtifact, ChartKind, TickFormat};
use crate::dataset::ColumnData;

/// Default series colors, one per trace in order
pub const SERIES_COLORS: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// d3 format string for full integers
const PLAIN_INTEGER: &str = "d";

#[derive(Debug, Serialize)]
pub struct Figure<'a> {
    pub data: Vec<FigureTrace<'a>>,
    pub layout: FigureLayout<'a>,
}

#[derive(Debug, Serialize)]
pub struct FigureTrace<'a> {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub x: &'a ColumnData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<&'a ColumnData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbinsx: Option<usize>,
    pub showlegend: bool,
}

#[derive(Debug, Serialize)]
pub struct Title<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct FigureAxis<'a> {
    pub title: Title<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Legend<'a> {
    pub title: Title<'a>,
}

#[derive(Debug, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct FigureLayout<'a> {
    pub title: Title<'a>,
    pub xaxis: FigureAxis<'a>,
    pub yaxis: FigureAxis<'a>,
    pub colorway: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

fn axis(axis: &Axis) -> FigureAxis<'_> {
    FigureAxis {
        title: Title { text: &axis.title },
        tickformat: match axis.tick_format {
            TickFormat::PlainInteger => Some(PLAIN_INTEGER),
            TickFormat::Auto => None,
        },
    }
}

/// Build the figure for a chart
pub fn figure(chart: &ChartArtifact) -> RenderResult<Figure<'_>> {
    let (trace_type, mode, nbinsx) = match chart.kind {
        ChartKind::Bar => ("bar", None, None),
        ChartKind::Histogram { bins } => ("histogram", None, Some(bins)),
        ChartKind::Line => ("scatter", Some("lines"), None),
        ChartKind::LineMarkers => ("scatter", Some("lines+markers"), None),
        ChartKind::Scatter => ("scatter", Some("markers"), None),
    };

    let data = chart
        .traces
        .iter()
        .map(|trace| FigureTrace {
            trace_type,
            mode,
            name: trace.name.as_deref(),
            x: &trace.x,
            y: trace.y.as_ref(),
            nbinsx,
            showlegend: trace.name.is_some(),
        })
        .collect();

    let theme = &chart.theme;
    let layout = FigureLayout {
        title: Title { text: &chart.title },
        xaxis: axis(&chart.x_axis),
        yaxis: axis(&chart.y_axis),
        colorway: &SERIES_COLORS,
        legend: chart
            .legend_title
            .as_deref()
            .map(|text| Legend { title: Title { text } }),
        plot_bgcolor: theme
            .plot_background
            .as_ref()
            .map(|c| css::color("plot_bgcolor", c))
            .transpose()?,
        paper_bgcolor: theme
            .paper_background
            .as_ref()
            .map(|c| css::color("paper_bgcolor", c))
            .transpose()?,
        font: theme
            .font_color
            .as_ref()
            .map(|c| css::color("font.color", c).map(|color| Font { color }))
            .transpose()?,
    };

    Ok(Figure { data, layout })
}

/// Figure as compact JSON, safe to embed in a `<script>` element.
/// Every `<` is written as `\u003c`, so no `</script>` or `<!--` survives.
pub fn figure_json(chart: &ChartArtifact) -> RenderResult<String> {
    let json = serde_json::to_string(&figure(chart)?)?;
    Ok(json.replace('<', "\\u003c"))
}
