//! Page rendering
//!
//! [`render`] turns a layout tree and a page title into a [`Document`]: a
//! complete HTML page with one Plotly call per chart.
//!
//! - **html**: tree walker and document shell
//! - **css**: inline style encoding
//! - **figure**: Plotly figure JSON
//! - **error**: `RenderError`
//!
//! Rendering is deterministic: the same tree and title always produce the
//! same bytes.

pub mod css;
pub mod error;
pub mod figure;
pub mod html;

pub use error::{RenderError, RenderResult};
pub use html::{escape, GRAPH_CLASS, PLOTLY_CDN};

use crate::layout::Node;

/// A fully composed, servable page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    html: String,
    chart_count: usize,
    text_count: usize,
}

impl Document {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Number of embedded charts
    pub fn chart_count(&self) -> usize {
        self.chart_count
    }

    /// Number of text leaves in the body
    pub fn text_count(&self) -> usize {
        self.text_count
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Render a layout tree into a page
pub fn render(root: &Node, title: &str) -> RenderResult<Document> {
    let mut writer = html::HtmlWriter::new();
    writer.node(root)?;

    let chart_count = writer.chart_count();
    let text_count = writer.text_count();
    let html = writer.finish(title);

    tracing::debug!(
        title = %title,
        charts = chart_count,
        texts = text_count,
        bytes = html.len(),
        "Rendered document"
    );

    Ok(Document {
        title: title.to_string(),
        html,
        chart_count,
        text_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_chart, ChartSpec};
    use crate::dataset::{Column, Dataset};
    use crate::layout::{div, h1, p, Length, Style, TextAlign};

    fn chart_node() -> Node {
        let ds = Dataset::new(vec![
            Column::text("Region", ["A", "B"]),
            Column::integer("Value", [10, 20]),
        ])
        .unwrap();
        build_chart(&ds, &ChartSpec::bar("Region", "Value")).unwrap().into()
    }

    #[test]
    fn test_render_structure() {
        let root: Node = div([
            Node::from(h1("Title").style(Style::new().text_align(TextAlign::Center))),
            chart_node(),
            chart_node(),
            Node::from(p("Footer")),
        ])
        .into();

        let doc = render(&root, "My Page").unwrap();
        assert_eq!(doc.title(), "My Page");
        assert_eq!(doc.chart_count(), 2);
        assert_eq!(doc.text_count(), 2);

        let html = doc.html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Page</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("<h1 style=\"text-align:center\">Title</h1>"));
        assert!(html.contains("id=\"chart-0\""));
        assert!(html.contains("id=\"chart-1\""));
        assert_eq!(html.matches(GRAPH_CLASS).count(), 2);
        assert_eq!(html.matches("Plotly.newPlot(").count(), 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let root: Node = div([chart_node(), Node::from(p("x"))]).into();
        let a = render(&root, "Same").unwrap();
        let b = render(&root, "Same").unwrap();
        assert_eq!(a.html().as_bytes(), b.html().as_bytes());
    }

    #[test]
    fn test_empty_container() {
        let root: Node = div(Vec::<Node>::new()).into();
        let doc = render(&root, "Empty").unwrap();
        assert!(doc.html().contains("<div></div>"));
        assert_eq!(doc.chart_count(), 0);
        assert!(!doc.html().contains("<script>\n"));
    }

    #[test]
    fn test_text_is_escaped() {
        let root: Node = p("<b>bold</b>").into();
        let doc = render(&root, "A & B").unwrap();
        assert!(doc.html().contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(doc.html().contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn test_malformed_color_fails() {
        let root: Node = div([p("x")])
            .style(Style::new().background_color("#12"))
            .into();
        let err = render(&root, "Bad").unwrap_err();
        assert!(matches!(err, RenderError::UnserializableStyle { ref property, .. } if property == "background-color"));
    }

    #[test]
    fn test_non_finite_width_fails() {
        let root: Node = div([p("x")])
            .style(Style::new().width(Length::Percent(f64::NAN)))
            .into();
        assert!(render(&root, "Bad").is_err());
    }
}
