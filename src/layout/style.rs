//! Container styles
//!
//! [`Style`] is a fixed record of every presentation property a container
//! can set. Values are stored as declared; colors and lengths are checked
//! when the page is rendered. Deserializing a `Style` rejects unknown keys.

use serde::Deserialize;
use std::str::FromStr;

use super::error::StyleError;

/// A CSS color, kept as written
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A CSS length
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Length {
    Px(f64),
    Percent(f64),
    /// Grid track fraction
    Fr(f64),
    Auto,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Length::Px(value)
    }

    pub fn percent(value: f64) -> Self {
        Length::Percent(value)
    }

    pub fn fr(value: f64) -> Self {
        Length::Fr(value)
    }

    /// Numeric magnitude, if any
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            Length::Px(v) | Length::Percent(v) | Length::Fr(v) => Some(*v),
            Length::Auto => None,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
            Length::Fr(v) => write!(f, "{}fr", v),
            Length::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for Length {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(Length::Auto);
        }

        let (number, unit) = if let Some(n) = s.strip_suffix("px") {
            (n, "px")
        } else if let Some(n) = s.strip_suffix('%') {
            (n, "%")
        } else if let Some(n) = s.strip_suffix("fr") {
            (n, "fr")
        } else if s == "0" {
            ("0", "px")
        } else {
            return Err(StyleError::InvalidLength(s.to_string()));
        };

        let value: f64 = number
            .parse()
            .map_err(|_| StyleError::InvalidLength(s.to_string()))?;

        Ok(match unit {
            "px" => Length::Px(value),
            "%" => Length::Percent(value),
            _ => Length::Fr(value),
        })
    }
}

impl TryFrom<String> for Length {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Four-sided spacing (margin or padding)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Edges {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Edges {
    pub fn all(value: Length) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// CSS two-value shorthand: vertical then horizontal
    pub fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Shortest CSS shorthand for these edges
    pub fn values(&self) -> Vec<Length> {
        if self.left != self.right {
            vec![self.top, self.right, self.bottom, self.left]
        } else if self.top != self.bottom {
            vec![self.top, self.right, self.bottom]
        } else if self.top != self.right {
            vec![self.top, self.right]
        } else {
            vec![self.top]
        }
    }
}

impl std::fmt::Display for Edges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.values().iter().map(Length::to_string).collect();
        f.write_str(&parts.join(" "))
    }
}

impl FromStr for Edges {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(Length::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| StyleError::InvalidEdges(s.to_string()))?;

        match parts.as_slice() {
            [a] => Ok(Edges::all(*a)),
            [v, h] => Ok(Edges::symmetric(*v, *h)),
            [t, h, b] => Ok(Edges {
                top: *t,
                right: *h,
                bottom: *b,
                left: *h,
            }),
            [t, r, b, l] => Ok(Edges {
                top: *t,
                right: *r,
                bottom: *b,
                left: *l,
            }),
            _ => Err(StyleError::InvalidEdges(s.to_string())),
        }
    }
}

impl TryFrom<String> for Edges {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
}

impl std::fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderStyle::Solid => write!(f, "solid"),
            BorderStyle::Dashed => write!(f, "dashed"),
            BorderStyle::Dotted => write!(f, "dotted"),
        }
    }
}

impl FromStr for BorderStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(BorderStyle::Solid),
            "dashed" => Ok(BorderStyle::Dashed),
            "dotted" => Ok(BorderStyle::Dotted),
            _ => Err(()),
        }
    }
}

/// Border shorthand: width, line style and color
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Border {
    pub width: Length,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub fn new(width: Length, style: BorderStyle, color: impl Into<Color>) -> Self {
        Self {
            width,
            style,
            color: color.into(),
        }
    }
}

impl std::fmt::Display for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.width, self.style, self.color)
    }
}

impl FromStr for Border {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidBorder(s.to_string());
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [width, style, color] = parts.as_slice() else {
            return Err(invalid());
        };

        Ok(Border {
            width: width.parse().map_err(|_| invalid())?,
            style: style.parse().map_err(|_| invalid())?,
            color: Color::new(*color),
        })
    }
}

impl TryFrom<String> for Border {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Layout mode of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Block,
    InlineBlock,
    Grid,
    Flex,
}

/// Every presentation property a container understands
///
/// Capacity settings such as `grid_template_columns` are recorded as given,
/// even when they do not match the number of children.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Style {
    pub text_align: Option<TextAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub font_size: Option<Length>,
    pub width: Option<Length>,
    pub margin: Option<Edges>,
    pub margin_top: Option<Length>,
    pub margin_left: Option<Length>,
    pub padding: Option<Edges>,
    pub border: Option<Border>,
    pub display: Option<Display>,
    pub grid_template_columns: Vec<Length>,
    pub gap: Option<Length>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn font_size(mut self, size: Length) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn margin_top(mut self, margin: Length) -> Self {
        self.margin_top = Some(margin);
        self
    }

    pub fn margin_left(mut self, margin: Length) -> Self {
        self.margin_left = Some(margin);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Grid mode with one track per entry
    pub fn grid_columns(mut self, columns: impl IntoIterator<Item = Length>) -> Self {
        self.display = Some(Display::Grid);
        self.grid_template_columns = columns.into_iter().collect();
        self
    }

    pub fn gap(mut self, gap: Length) -> Self {
        self.gap = Some(gap);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!("10px".parse::<Length>().unwrap(), Length::Px(10.0));
        assert_eq!("25%".parse::<Length>().unwrap(), Length::Percent(25.0));
        assert_eq!("1fr".parse::<Length>().unwrap(), Length::Fr(1.0));
        assert_eq!("auto".parse::<Length>().unwrap(), Length::Auto);
        assert_eq!("0".parse::<Length>().unwrap(), Length::Px(0.0));
        assert!("ten px".parse::<Length>().is_err());
        assert!("12em".parse::<Length>().is_err());
    }

    #[test]
    fn test_edges_shorthand() {
        let edges: Edges = "0px auto".parse().unwrap();
        assert_eq!(edges, Edges::symmetric(Length::Px(0.0), Length::Auto));
        assert_eq!(edges.to_string(), "0px auto");

        let edges: Edges = "30px".parse().unwrap();
        assert_eq!(edges.to_string(), "30px");

        let edges: Edges = "1px 2px 3px 4px".parse().unwrap();
        assert_eq!(edges.left, Length::Px(4.0));
        assert_eq!(edges.to_string(), "1px 2px 3px 4px");

        assert!("".parse::<Edges>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<Edges>().is_err());
    }

    #[test]
    fn test_border_shorthand() {
        let border: Border = "4px solid #7FFF00".parse().unwrap();
        assert_eq!(border, Border::new(Length::Px(4.0), BorderStyle::Solid, "#7FFF00"));
        assert_eq!(border.to_string(), "4px solid #7FFF00");

        assert!("4px wavy red".parse::<Border>().is_err());
        assert!("4px solid".parse::<Border>().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let style: Style = serde_json::from_value(serde_json::json!({
            "display": "grid",
            "gridTemplateColumns": ["1fr", "1fr"],
            "gap": "10px",
            "marginLeft": "200px",
            "backgroundColor": "#FFD700"
        }))
        .unwrap();

        assert_eq!(
            style,
            Style::new()
                .grid_columns([Length::fr(1.0), Length::fr(1.0)])
                .gap(Length::px(10.0))
                .margin_left(Length::px(200.0))
                .background_color("#FFD700")
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<Style, _> = serde_json::from_value(serde_json::json!({
            "color": "#000080",
            "fontWeight": "bold"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("fontWeight"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_bad_length() {
        let result: Result<Style, _> =
            serde_json::from_value(serde_json::json!({ "width": "wide" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_style() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().color("red").is_empty());
    }
}
