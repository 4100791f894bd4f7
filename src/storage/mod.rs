//! Storage Layer
//!
//! Persists the active rate snapshot and the chosen currency pair in a
//! SQLite-backed key-value store.

pub mod database;

pub use database::Database;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "pricelens", "PriceLens")
        .context("Could not determine platform directories")
}

fn ensured(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// Application data directory, created on first use
pub fn get_data_dir() -> Result<PathBuf> {
    ensured(project_dirs()?.data_dir())
}

/// Configuration directory, created on first use
pub fn get_config_dir() -> Result<PathBuf> {
    ensured(project_dirs()?.config_dir())
}
