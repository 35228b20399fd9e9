//! CRD-OUT: Dataset to distributable module formats
//!
//! This crate renders the loaded dataset into:
//! - a universal module (`dist/data-umd.js`) embedding the dataset as JSON
//! - an ES module (`dist/data.js`) of display records keyed by country code
//! - type declarations (`dist/data.d.ts`) for the ES module
//!
//! Rendering is template-driven (Handlebars) and deterministic: the same
//! dataset always yields byte-identical output. Generators do not validate;
//! run `crd-validate` first.
//!
//! # Example
//!
//! ```ignore
//! use crd_core::{load, CrdConfig};
//!
//! let config = CrdConfig::default();
//! let dataset = load(&config.input)?;
//! for record in crd_out::build(&dataset, &config)? {
//!     println!("{} {}", record.path.display(), record.hash);
//! }
//! ```

pub mod es6;
pub mod renderer;
pub mod runner;
pub mod templates;
pub mod umd;
pub mod view;

use crd_core::{CrdConfig, Dataset};
use renderer::TemplateRenderer;
use runner::{ArtifactRecord, BuildRunner, Es6Generator, Generator, UmdGenerator};
use std::path::PathBuf;
use templates::TemplatesFile;
use thiserror::Error;

pub use es6::EsModule;
pub use runner::Artifact;

/// Errors that can occur during generation
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renderer over the configured template set, or the built-in one
pub fn renderer_for(config: &CrdConfig) -> Result<TemplateRenderer<'static>, RenderError> {
    let templates = match &config.templates {
        Some(path) => TemplatesFile::load(path),
        None => TemplatesFile::builtin(),
    }
    .map_err(RenderError::Template)?;

    TemplateRenderer::new(templates).map_err(RenderError::Template)
}

fn run(
    dataset: &Dataset,
    config: &CrdConfig,
    generators: Vec<Box<dyn Generator>>,
) -> Result<Vec<ArtifactRecord>, RenderError> {
    let runner = BuildRunner::new(renderer_for(config)?, generators);
    tracing::debug!(generators = ?runner.generator_ids(), "running build");
    runner.run(dataset)
}

/// Write the universal module
pub fn umdify(dataset: &Dataset, config: &CrdConfig) -> Result<Vec<ArtifactRecord>, RenderError> {
    run(dataset, config, vec![Box::new(UmdGenerator::from_config(config))])
}

/// Write the ES module and its typings
pub fn es6ify(dataset: &Dataset, config: &CrdConfig) -> Result<Vec<ArtifactRecord>, RenderError> {
    run(dataset, config, vec![Box::new(Es6Generator::from_config(config))])
}

/// Write every artifact: universal module first, then ES module and typings
pub fn build(dataset: &Dataset, config: &CrdConfig) -> Result<Vec<ArtifactRecord>, RenderError> {
    run(
        dataset,
        config,
        vec![
            Box::new(UmdGenerator::from_config(config)),
            Box::new(Es6Generator::from_config(config)),
        ],
    )
}
