//! Ethiopia humanitarian dashboard
//!
//! Startup runs strictly in order and stops at the first failure:
//!
//! ```text
//! dataset → chart build → layout → render → bind → serve
//! ```
//!
//! - **charts**: the six chart specs and `build_charts`
//! - **layout**: the page tree around them

pub mod charts;
pub mod layout;

pub use charts::{build_charts, DashboardCharts};
pub use layout::{build_layout, DISCLAIMERS};

use thiserror::Error;

use crate::chart::ChartError;
use crate::config::Config;
use crate::dataset::{mock_dataset, SchemaError};
use crate::render::{render, Document, RenderError};
use crate::server::{Server, ServerError};

/// Default page title
pub const DEFAULT_TITLE: &str = "Ethiopia Humanitarian Dashboard";

/// A startup failure, labelled with the stage that produced it
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("dataset stage failed: {0}")]
    Dataset(#[from] SchemaError),

    #[error("chart build stage failed: {0}")]
    Chart(#[from] ChartError),

    #[error("render stage failed: {0}")]
    Render(#[from] RenderError),

    #[error("{} stage failed: {}", server_stage(.0), .0)]
    Server(#[from] ServerError),
}

fn server_stage(err: &ServerError) -> &'static str {
    match err {
        ServerError::Bind { .. } => "bind",
        ServerError::Serve(_) => "serve",
    }
}

impl DashboardError {
    /// Name of the failing stage
    pub fn stage(&self) -> &'static str {
        match self {
            DashboardError::Dataset(_) => "dataset",
            DashboardError::Chart(_) => "chart build",
            DashboardError::Render(_) => "render",
            DashboardError::Server(e) => server_stage(e),
        }
    }
}

/// Build the dataset, charts and layout, then render the page
pub fn build_document(title: &str) -> Result<Document, DashboardError> {
    let dataset = mock_dataset()?;
    tracing::info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Dataset loaded"
    );

    let charts = build_charts(&dataset)?;
    tracing::info!(charts = charts.iter().count(), "Charts built");

    // Layout assembly cannot fail.
    let root = build_layout(title, &charts);
    tracing::info!(
        sections = root.children().len(),
        charts = root.chart_count(),
        "Layout assembled"
    );

    let document = render(&root, title)?;
    tracing::info!(bytes = document.len(), "Document rendered");

    Ok(document)
}

/// Build the page and serve it until shutdown
pub async fn run(config: &Config) -> Result<(), DashboardError> {
    let document = build_document(&config.dashboard.title)?;
    let server = Server::bind(&config.server.host, config.server.port).await?;
    server.serve(document).await?;
    Ok(())
}
