//! # crd CLI library
//!
//! Subcommand handlers for the `crd` binary. Each handler loads the
//! dataset fresh, does its work, and writes its report to the given
//! writer so the binary can target stdout and tests can capture it.

pub mod build;
pub mod incomplete;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use crd_core::{CrdConfig, Dataset};

/// Resolve the effective config: file (or defaults), then flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    input: Option<PathBuf>,
    out_dir: Option<&Path>,
) -> anyhow::Result<CrdConfig> {
    let mut config = CrdConfig::resolve(config_path)?;
    if let Some(input) = input {
        config = config.with_input(input);
    }
    if let Some(dir) = out_dir {
        config = config.with_out_dir(dir);
    }
    tracing::debug!(input = %config.input.display(), "resolved config");
    Ok(config)
}

/// Load the configured dataset
pub fn load_dataset(config: &CrdConfig) -> anyhow::Result<Dataset> {
    crd_core::load(&config.input)
        .with_context(|| format!("failed to load dataset from {}", config.input.display()))
}
