//! Page layout
//!
//! - **style**: fixed-shape `Style` record and its value types
//! - **node**: the `Node` tree and builder helpers (`div`, `h1`, `p`, ...)
//! - **error**: `StyleError` for parsing CSS-like values
//!
//! The builders record what they are given. They do not lay anything out
//! and never reject a tree for looking odd.

pub mod error;
pub mod node;
pub mod style;

pub use error::StyleError;
pub use node::{div, h1, p, text_div, Element, Node, Tag};
pub use style::{
    Border, BorderStyle, Color, Display, Edges, Length, Style, TextAlign, VerticalAlign,
};
