//! # Humdash
//!
//! Humanitarian Dashboard - a single static web page of mock regional
//! humanitarian indicators (population, literacy, food insecurity,
//! displacement, malnutrition, water access), drawn with Plotly and served
//! with Axum.
//!
//! ## Modules
//!
//! - [`dataset`]: The fixed, in-memory indicator table
//! - [`chart`]: Chart specifications and the builders that realize them
//! - [`layout`]: Styled container tree the charts are embedded in
//! - [`render`]: HTML document rendering
//! - [`server`]: HTTP server for the rendered document
//! - [`dashboard`]: The concrete dashboard and its staged startup
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use humdash::{build_document, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Dataset → charts → layout → document
//!     let document = build_document("Ethiopia Humanitarian Dashboard")?;
//!     println!("Rendered {} charts", document.chart_count());
//!
//!     // Bind, then serve the same document to every request
//!     let server = Server::bind("0.0.0.0", 8000).await?;
//!     server.serve(document).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod layout;
pub mod render;
pub mod server;

// Re-export top-level types for convenience
pub use dataset::{mock_dataset, Column, ColumnData, Dataset, SchemaError, SchemaResult};

pub use chart::{
    build_bar, build_chart, build_histogram, build_line, build_line_markers, build_scatter, Axis,
    ChartArtifact, ChartError, ChartKind, ChartResult, ChartSpec, ChartTheme, TickFormat, Trace,
};

pub use layout::{
    div, h1, p, text_div, Border, BorderStyle, Color, Display, Edges, Element, Length, Node,
    Style, StyleError, Tag, TextAlign, VerticalAlign,
};

pub use render::{render, Document, RenderError, RenderResult};

pub use server::{build_router, Server, ServerError, ServerResult};

pub use dashboard::{build_charts, build_document, build_layout, DashboardCharts, DashboardError};

pub use config::{
    generate_default_config, Config, ConfigError, DashboardConfig, LoggingConfig, ServerConfig,
};
