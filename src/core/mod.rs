//! Core utilities for the FPL stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `files`: output path helpers
//! - `http`: client construction and API root resolution

pub mod files;
pub mod http;

// Re-export commonly used items for convenience
pub use files::{chart_path, ensure_parent_dir};
pub use http::{build_client, resolve_base_url, FPL_BASE_URL};
