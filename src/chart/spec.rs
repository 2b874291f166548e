//! Declarative chart specifications
//!
//! A [`ChartSpec`] names the dataset columns a chart binds to, how its
//! axes label their ticks and which colors it overrides.

use crate::layout::Color;

/// The kind of chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One bar per row
    Bar,
    /// Distribution of a numeric column over `bins` buckets
    Histogram { bins: usize },
    /// Connected line
    Line,
    /// Connected line with a marker on each point
    LineMarkers,
    /// Unconnected markers
    Scatter,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Histogram { .. } => write!(f, "histogram"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::LineMarkers => write!(f, "line-with-markers"),
            ChartKind::Scatter => write!(f, "scatter"),
        }
    }
}

/// How an axis labels its ticks
///
/// `PlainInteger` only changes how labels are printed: full digits, never
/// SI abbreviations or scientific notation. Data values are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickFormat {
    #[default]
    Auto,
    PlainInteger,
}

/// Color overrides applied to a chart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartTheme {
    /// Background of the plotting area
    pub plot_background: Option<Color>,
    /// Background around the plotting area
    pub paper_background: Option<Color>,
    /// Color of titles, labels and legend text
    pub font_color: Option<Color>,
}

impl ChartTheme {
    pub fn new(
        plot_background: impl Into<Color>,
        paper_background: impl Into<Color>,
        font_color: impl Into<Color>,
    ) -> Self {
        Self {
            plot_background: Some(plot_background.into()),
            paper_background: Some(paper_background.into()),
            font_color: Some(font_color.into()),
        }
    }
}

/// Description of one chart's data bindings and presentation
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: String,
    pub y: Option<String>,
    pub color_by: Option<String>,
    pub title: String,
    pub x_ticks: TickFormat,
    pub y_ticks: TickFormat,
    pub theme: ChartTheme,
}

impl ChartSpec {
    fn with_kind(kind: ChartKind, x: impl Into<String>, y: Option<String>) -> Self {
        Self {
            kind,
            x: x.into(),
            y,
            color_by: None,
            title: String::new(),
            x_ticks: TickFormat::Auto,
            y_ticks: TickFormat::Auto,
            theme: ChartTheme::default(),
        }
    }

    pub fn bar(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self::with_kind(ChartKind::Bar, x, Some(y.into()))
    }

    pub fn histogram(x: impl Into<String>, bins: usize) -> Self {
        Self::with_kind(ChartKind::Histogram { bins }, x, None)
    }

    pub fn line(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self::with_kind(ChartKind::Line, x, Some(y.into()))
    }

    pub fn line_markers(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self::with_kind(ChartKind::LineMarkers, x, Some(y.into()))
    }

    pub fn scatter(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self::with_kind(ChartKind::Scatter, x, Some(y.into()))
    }

    /// Builder method: set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: split rows into one series per value of `field`
    pub fn color_by(mut self, field: impl Into<String>) -> Self {
        self.color_by = Some(field.into());
        self
    }

    pub fn x_ticks(mut self, format: TickFormat) -> Self {
        self.x_ticks = format;
        self
    }

    pub fn y_ticks(mut self, format: TickFormat) -> Self {
        self.y_ticks = format;
        self
    }

    pub fn theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Every column name this spec refers to, in x, y, color order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.x.as_str())
            .chain(self.y.as_deref())
            .chain(self.color_by.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let spec = ChartSpec::scatter("a", "b")
            .title("A vs B")
            .color_by("c")
            .x_ticks(TickFormat::PlainInteger);

        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.title, "A vs B");
        assert_eq!(spec.x_ticks, TickFormat::PlainInteger);
        assert_eq!(spec.y_ticks, TickFormat::Auto);
        assert_eq!(spec.fields().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_histogram_has_no_y() {
        let spec = ChartSpec::histogram("Population", 5);
        assert_eq!(spec.kind, ChartKind::Histogram { bins: 5 });
        assert!(spec.y.is_none());
        assert_eq!(spec.fields().count(), 1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ChartKind::LineMarkers.to_string(), "line-with-markers");
        assert_eq!(ChartKind::Histogram { bins: 3 }.to_string(), "histogram");
    }
}
