//! File system helpers for the CSV sink and chart output

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Path: {dir}/{slug}.svg
pub fn chart_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{}.svg", slug))
}
