//! Style encoding
//!
//! Turns [`Style`] records into inline CSS, validating colors and lengths
//! on the way. Properties are always emitted in the same order.

use crate::layout::{Color, Display, Edges, Length, Style, TextAlign, VerticalAlign};

use super::error::{RenderError, RenderResult};

fn unserializable(property: &str, value: impl ToString) -> RenderError {
    RenderError::UnserializableStyle {
        property: property.to_string(),
        value: value.to_string(),
    }
}

/// Encode a color: `#rgb`, `#rrggbb`, `#rrggbbaa` or an alphabetic keyword
pub fn color(property: &str, color: &Color) -> RenderResult<String> {
    let re = regex::Regex::new(r"^(#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]+)$")
        .map_err(|_| unserializable(property, color))?;

    if re.is_match(color.as_str()) {
        Ok(color.as_str().to_string())
    } else {
        Err(unserializable(property, color))
    }
}

/// Encode a length, rejecting NaN and infinities
pub fn length(property: &str, length: &Length) -> RenderResult<String> {
    match length.magnitude() {
        Some(v) if !v.is_finite() => Err(unserializable(property, length)),
        _ => Ok(length.to_string()),
    }
}

fn edges(property: &str, edges: &Edges) -> RenderResult<String> {
    let parts = edges
        .values()
        .iter()
        .map(|l| length(property, l))
        .collect::<RenderResult<Vec<_>>>()?;
    Ok(parts.join(" "))
}

/// Encode a style as the body of an inline `style` attribute
pub fn style(style: &Style) -> RenderResult<String> {
    let mut decls: Vec<(&str, String)> = Vec::new();

    if let Some(display) = style.display {
        let value = match display {
            Display::Block => "block",
            Display::InlineBlock => "inline-block",
            Display::Grid => "grid",
            Display::Flex => "flex",
        };
        decls.push(("display", value.to_string()));
    }
    if !style.grid_template_columns.is_empty() {
        let tracks = style
            .grid_template_columns
            .iter()
            .map(|l| length("grid-template-columns", l))
            .collect::<RenderResult<Vec<_>>>()?;
        decls.push(("grid-template-columns", tracks.join(" ")));
    }
    if let Some(gap) = &style.gap {
        decls.push(("gap", length("gap", gap)?));
    }
    if let Some(width) = &style.width {
        decls.push(("width", length("width", width)?));
    }
    if let Some(align) = style.text_align {
        let value = match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        };
        decls.push(("text-align", value.to_string()));
    }
    if let Some(align) = style.vertical_align {
        let value = match align {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        };
        decls.push(("vertical-align", value.to_string()));
    }
    if let Some(c) = &style.color {
        decls.push(("color", color("color", c)?));
    }
    if let Some(c) = &style.background_color {
        decls.push(("background-color", color("background-color", c)?));
    }
    if let Some(size) = &style.font_size {
        decls.push(("font-size", length("font-size", size)?));
    }
    if let Some(margin) = &style.margin {
        decls.push(("margin", edges("margin", margin)?));
    }
    if let Some(top) = &style.margin_top {
        decls.push(("margin-top", length("margin-top", top)?));
    }
    if let Some(left) = &style.margin_left {
        decls.push(("margin-left", length("margin-left", left)?));
    }
    if let Some(padding) = &style.padding {
        decls.push(("padding", edges("padding", padding)?));
    }
    if let Some(border) = &style.border {
        decls.push((
            "border",
            format!(
                "{} {} {}",
                length("border", &border.width)?,
                border.style,
                color("border", &border.color)?
            ),
        ));
    }

    Ok(decls
        .iter()
        .map(|(k, v)| format!("{}:{}", k, v))
        .collect::<Vec<_>>()
        .join(";"))
}
