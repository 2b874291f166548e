//! Layout tree
//!
//! A page is a tree of [`Node`]s. Leaves hold a text string or a chart;
//! elements hold a tag, a [`Style`] and ordered children. Ownership runs
//! strictly top-down and the tree is never mutated once built.

use super::style::Style;
use crate::chart::ChartArtifact;

/// HTML element used for a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    H1,
    P,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::P => "p",
        }
    }
}

/// A styled container
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Builder method: replace the style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Builder method: append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A node of the page tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text { text: String },
    Chart { chart: Box<ChartArtifact> },
    Element(Element),
}

impl Node {
    /// Number of chart leaves in this subtree
    pub fn chart_count(&self) -> usize {
        self.charts().len()
    }

    /// Number of text leaves in this subtree
    pub fn text_count(&self) -> usize {
        self.texts().len()
    }

    /// Chart leaves in document order
    pub fn charts(&self) -> Vec<&ChartArtifact> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Chart { chart } = node {
                out.push(chart.as_ref());
            }
        });
        out
    }

    /// Text leaves in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text { text } = node {
                out.push(text.as_str());
            }
        });
        out
    }

    /// Element children, or an empty slice for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            _ => &[],
        }
    }

    /// Depth-first, pre-order visit
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<ChartArtifact> for Node {
    fn from(chart: ChartArtifact) -> Self {
        Node::Chart {
            chart: Box::new(chart),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
        }
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text { text }
    }
}

/// A `div` with the given children
pub fn div<N: Into<Node>>(children: impl IntoIterator<Item = N>) -> Element {
    Element {
        tag: Tag::Div,
        style: Style::default(),
        children: children.into_iter().map(Into::into).collect(),
    }
}

/// A `div` holding a single text leaf
pub fn text_div(text: impl Into<String>) -> Element {
    Element::new(Tag::Div).child(text.into())
}

pub fn h1(text: impl Into<String>) -> Element {
    Element::new(Tag::H1).child(text.into())
}

pub fn p(text: impl Into<String>) -> Element {
    Element::new(Tag::P).child(text.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_chart, ChartSpec};
    use crate::dataset::{Column, Dataset};
    use crate::layout::{Length, Style};

    fn chart() -> ChartArtifact {
        let ds = Dataset::new(vec![
            Column::text("Region", ["A", "B"]),
            Column::integer("Value", [1, 2]),
        ])
        .unwrap();
        build_chart(&ds, &ChartSpec::bar("Region", "Value")).unwrap()
    }

    #[test]
    fn test_counts() {
        let tree: Node = div([
            Node::from(h1("Title")),
            Node::from(div([chart(), chart(), chart()])
                .style(Style::new().grid_columns([Length::fr(1.0), Length::fr(1.0)]))),
            Node::from(div([p("one"), p("two")])),
        ])
        .into();

        assert_eq!(tree.chart_count(), 3);
        assert_eq!(tree.texts(), vec!["Title", "one", "two"]);
    }

    #[test]
    fn test_grid_capacity_is_not_enforced() {
        let grid = div([chart(), chart(), chart()])
            .style(Style::new().grid_columns([Length::fr(1.0), Length::fr(1.0)]));

        assert_eq!(grid.children.len(), 3);
        assert_eq!(grid.style.grid_template_columns.len(), 2);
    }

    #[test]
    fn test_empty_element() {
        let node: Node = div(Vec::<Node>::new()).into();
        assert!(node.children().is_empty());
        assert_eq!(node.chart_count(), 0);
        assert_eq!(node.text_count(), 0);
    }

    #[test]
    fn test_leaf_builders() {
        let heading = h1("Hello");
        assert_eq!(heading.tag, Tag::H1);
        assert_eq!(
            heading.children,
            vec![Node::Text {
                text: "Hello".to_string()
            }]
        );
    }
}
