//! Fantasy Premier League stats library
//!
//! Pulls per-gameweek player statistics from the public FPL API, flattens them
//! into one CSV row per (player, gameweek) and renders exploratory SVG charts
//! from that CSV.
//!
//! ## Features
//!
//! - **Extraction**: roster from `bootstrap-static/`, then each player's
//!   `element-summary/{id}/`, fetched sequentially with a fixed pause
//! - **CSV dataset**: 40 fixed columns, values copied verbatim from the API
//! - **Charts**: rankings, scatters, per-player lines, a points heatmap and
//!   an xGI breakdown
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_stats::commands::extract::{handle_extract, ExtractParams};
//!
//! # async fn example() -> fpl_stats::Result<()> {
//! let summary = handle_extract(ExtractParams {
//!     limit: Some(50),
//!     ..ExtractParams::default()
//! })
//! .await?;
//! println!("{} rows", summary.rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the extractor at a mirror or a local mock:
//! ```bash
//! export FPL_API_BASE_URL=http://localhost:8080/api
//! ```

pub mod charts;
pub mod cli;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod error;
pub mod fpl;

// Re-export commonly used types
pub use cli::types::{Decimal, Gameweek, PlayerId, Position, TeamId};
pub use dataset::{Dataset, GameweekRow};
pub use error::{FplError, Result};
pub use fpl::FplClient;

pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
