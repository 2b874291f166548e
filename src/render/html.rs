//! HTML writer
//!
//! Walks the layout tree depth-first, writing elements and text and
//! collecting one plot script per chart in document order.

use crate::layout::{Element, Node};

use super::css;
use super::error::RenderResult;
use super::figure;

/// Plotly bundle loaded by the page
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// CSS class carried by every chart container
pub const GRAPH_CLASS: &str = "dash-graph";

/// Escape text for element content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) struct HtmlWriter {
    body: String,
    scripts: Vec<String>,
    texts: usize,
}

impl HtmlWriter {
    pub(crate) fn new() -> Self {
        Self {
            body: String::with_capacity(16 * 1024),
            scripts: Vec::new(),
            texts: 0,
        }
    }

    pub(crate) fn node(&mut self, node: &Node) -> RenderResult<()> {
        match node {
            Node::Text { text } => {
                self.texts += 1;
                self.body.push_str(&escape(text));
            }
            Node::Chart { chart } => {
                let id = format!("chart-{}", self.scripts.len());
                let json = figure::figure_json(chart)?;
                self.body.push_str(&format!(
                    "<div class=\"{}\" id=\"{}\"></div>",
                    GRAPH_CLASS, id
                ));
                self.scripts.push(format!(
                    "(function(){{var f={};Plotly.newPlot(\"{}\",f.data,f.layout,{{responsive:true}});}})();",
                    json, id
                ));
            }
            Node::Element(el) => self.element(el)?,
        }
        Ok(())
    }

    fn element(&mut self, el: &Element) -> RenderResult<()> {
        let tag = el.tag.as_str();
        let style = css::style(&el.style)?;

        self.body.push('<');
        self.body.push_str(tag);
        if !style.is_empty() {
            self.body.push_str(" style=\"");
            self.body.push_str(&escape(&style));
            self.body.push('"');
        }
        self.body.push('>');

        for child in &el.children {
            self.node(child)?;
        }

        self.body.push_str("</");
        self.body.push_str(tag);
        self.body.push('>');
        Ok(())
    }

    pub(crate) fn chart_count(&self) -> usize {
        self.scripts.len()
    }

    pub(crate) fn text_count(&self) -> usize {
        self.texts
    }

    /// Wrap the body in a complete HTML5 document
    pub(crate) fn finish(self, title: &str) -> String {
        let mut out = String::with_capacity(self.body.len() + 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(title)));
        out.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_CDN));
        out.push_str("</head>\n<body>\n");
        out.push_str(&self.body);
        out.push('\n');
        if !self.scripts.is_empty() {
            out.push_str("<script>\n");
            for script in &self.scripts {
                out.push_str(script);
                out.push('\n');
            }
            out.push_str("</script>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
