//! Render charts from a previously extracted CSV.

use std::path::PathBuf;

use tracing::info;

use crate::{
    charts::{self, Chart},
    dataset::{Dataset, DEFAULT_CSV_PATH},
    Result,
};

/// Default directory for rendered SVGs.
pub const DEFAULT_CHART_DIR: &str = "charts";

#[derive(Debug, Clone)]
pub struct PlotParams {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Charts to render, in order.
    pub charts: Vec<Chart>,
}

impl PlotParams {
    pub fn new(charts: Vec<Chart>) -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CSV_PATH),
            output_dir: PathBuf::from(DEFAULT_CHART_DIR),
            charts,
        }
    }
}

/// Load the CSV once and render every requested chart; returns the files written.
pub fn handle_plot(params: PlotParams) -> Result<Vec<PathBuf>> {
    let dataset = Dataset::load(&params.input)?;
    info!(rows = dataset.len(), input = %params.input.display(), "dataset loaded");

    let mut written = Vec::new();
    for chart in &params.charts {
        for path in charts::render(&dataset, chart, &params.output_dir)? {
            println!("✓ {} saved to {}", chart.slug(), path.display());
            written.push(path);
        }
    }

    Ok(written)
}
