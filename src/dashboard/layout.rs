//! Page layout of the dashboard
//!
//! Styles are recorded exactly as declared, including the three-chart row
//! in a two-column grid and the second row's widths summing to 70%.

use super::charts::DashboardCharts;
use crate::layout::{
    div, h1, p, text_div, Border, BorderStyle, Display, Edges, Length, Node, Style, TextAlign,
    VerticalAlign,
};

pub const DISCLAIMERS: [&str; 3] = [
    "Disclaimer: Data may be inaccurate or outdated.",
    "Source: Mocked data for demonstration only.",
    "Note: Regions not exhaustive.",
];

pub const INTRO: &str = "visual overview of various indicators.";
pub const FOOTER: &str = "End of Dashboard";

fn px(v: f64) -> Length {
    Length::px(v)
}

fn heading(title: &str) -> Node {
    h1(title)
        .style(
            Style::new()
                .text_align(TextAlign::Center)
                .color("#00FFFF")
                .font_size(px(60.0))
                .background_color("#FF00FF"),
        )
        .into()
}

fn intro() -> Node {
    text_div(INTRO)
        .style(
            Style::new()
                .text_align(TextAlign::Left)
                .font_size(px(9.0))
                .color("#F5F5DC")
                .background_color("#800080"),
        )
        .into()
}

fn first_row(charts: &DashboardCharts) -> Node {
    div([
        charts.population_bar.clone(),
        charts.literacy_line.clone(),
        charts.food_insecurity_line.clone(),
    ])
    .style(
        Style::new()
            .grid_columns([Length::fr(1.0), Length::fr(1.0)])
            .gap(px(10.0))
            .margin_left(px(200.0))
            .background_color("#FFD700"),
    )
    .into()
}

fn second_row(charts: &DashboardCharts) -> Node {
    let idps = div([charts.idps_bar.clone()]).style(
        Style::new()
            .width(Length::percent(25.0))
            .display(Display::InlineBlock)
            .vertical_align(VerticalAlign::Top)
            .background_color("#8A2BE2")
            .border(Border::new(px(4.0), BorderStyle::Solid, "#7FFF00")),
    );
    let scatter = div([charts.malnutrition_scatter.clone()]).style(
        Style::new()
            .width(Length::percent(45.0))
            .display(Display::InlineBlock)
            .margin_left(px(5.0))
            .border(Border::new(px(2.0), BorderStyle::Dashed, "#FF0000"))
            .background_color("#ADFF2F"),
    );

    div([idps, scatter])
        .style(Style::new().margin_top(px(20.0)))
        .into()
}

fn third_row(charts: &DashboardCharts) -> Node {
    div([charts.population_histogram.clone()])
        .style(
            Style::new()
                .text_align(TextAlign::Right)
                .background_color("#00FA9A")
                .border(Border::new(px(3.0), BorderStyle::Dotted, "#FF8C00"))
                .padding(Edges::all(px(30.0))),
        )
        .into()
}

fn disclaimers() -> Node {
    let [disclaimer, source, note] = DISCLAIMERS;

    div([
        p(disclaimer).style(
            Style::new()
                .font_size(px(27.0))
                .color("#FF0000")
                .margin_left(px(30.0)),
        ),
        p(source).style(
            Style::new()
                .font_size(px(14.0))
                .color("#8B008B")
                .margin_left(px(100.0)),
        ),
        p(note).style(
            Style::new()
                .font_size(px(16.0))
                .color("#000080")
                .margin_top(px(50.0)),
        ),
    ])
    .style(Style::new().background_color("#D3D3D3"))
    .into()
}

fn footer() -> Node {
    text_div(FOOTER)
        .style(
            Style::new()
                .text_align(TextAlign::Center)
                .color("#006400")
                .font_size(px(16.0))
                .background_color("#B0E0E6"),
        )
        .into()
}

/// Compose the full page tree around the built charts
pub fn build_layout(title: &str, charts: &DashboardCharts) -> Node {
    div([
        heading(title),
        intro(),
        first_row(charts),
        second_row(charts),
        third_row(charts),
        disclaimers(),
        footer(),
    ])
    .style(
        Style::new()
            .background_color("#F0F0F0")
            .margin(Edges::symmetric(px(0.0), Length::Auto))
            .width(Length::percent(95.0))
            .border(Border::new(px(5.0), BorderStyle::Solid, "#FA8072")),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::charts::build_charts;
    use crate::dataset::mock_dataset;
    use crate::layout::Tag;

    fn tree() -> Node {
        let charts = build_charts(&mock_dataset().unwrap()).unwrap();
        build_layout("Ethiopia Humanitarian Dashboard", &charts)
    }

    #[test]
    fn test_top_level_sections() {
        let root = tree();
        assert_eq!(root.children().len(), 7);
        assert_eq!(root.chart_count(), 6);
    }

    #[test]
    fn test_title_leaf() {
        let root = tree();
        let Node::Element(heading) = &root.children()[0] else {
            panic!("heading is not an element");
        };
        assert_eq!(heading.tag, Tag::H1);
        assert_eq!(heading.children.len(), 1);
        assert_eq!(
            heading.children[0],
            Node::Text {
                text: "Ethiopia Humanitarian Dashboard".to_string()
            }
        );
        assert_eq!(
            root.texts()
                .iter()
                .filter(|t| **t == "Ethiopia Humanitarian Dashboard")
                .count(),
            1
        );
    }

    #[test]
    fn test_disclaimer_block() {
        let root = tree();
        let block = &root.children()[5];
        assert_eq!(block.children().len(), 3);
        assert_eq!(block.texts(), DISCLAIMERS.to_vec());
    }

    #[test]
    fn test_grid_keeps_declared_capacity() {
        let root = tree();
        let Node::Element(row) = &root.children()[2] else {
            panic!("first row is not an element");
        };
        assert_eq!(row.style.grid_template_columns.len(), 2);
        assert_eq!(row.children.len(), 3);
    }

    #[test]
    fn test_second_row_widths_preserved() {
        let root = tree();
        let widths: Vec<f64> = root.children()[3]
            .children()
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) => el.style.width.and_then(|w| w.magnitude()),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![25.0, 45.0]);
    }
}
