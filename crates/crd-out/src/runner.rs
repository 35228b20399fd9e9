//! Build Runner: runs generators in order and writes their artifacts
use crd_core::{CrdConfig, Dataset};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::renderer::TemplateRenderer;
use crate::{es6, umd, RenderError};

/// A rendered file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }

    /// Content digest, `blake3:<hex>`
    pub fn digest(&self) -> String {
        format!("blake3:{}", blake3::hash(self.contents.as_bytes()))
    }
}

/// What a build wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub generator: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub hash: String,
}

/// One output format derived from the dataset
pub trait Generator {
    /// Stable identifier (ex: "umd")
    fn id(&self) -> &'static str;

    /// Render every artifact this generator owns
    fn generate(
        &self,
        renderer: &TemplateRenderer<'_>,
        dataset: &Dataset,
    ) -> Result<Vec<Artifact>, RenderError>;
}

/// Universal module wrapper around the whole dataset
#[derive(Debug, Clone)]
pub struct UmdGenerator {
    pub output: PathBuf,
    pub global_alias: String,
}

impl UmdGenerator {
    pub fn from_config(config: &CrdConfig) -> Self {
        Self {
            output: config.umd_output.clone(),
            global_alias: config.global_alias.clone(),
        }
    }
}

impl Generator for UmdGenerator {
    fn id(&self) -> &'static str {
        "umd"
    }

    fn generate(
        &self,
        renderer: &TemplateRenderer<'_>,
        dataset: &Dataset,
    ) -> Result<Vec<Artifact>, RenderError> {
        let contents = umd::generate(renderer, dataset, &self.global_alias)?;
        Ok(vec![Artifact::new(&self.output, contents)])
    }
}

/// ES module plus type declarations
#[derive(Debug, Clone)]
pub struct Es6Generator {
    pub module_output: PathBuf,
    pub typings_output: PathBuf,
    pub module_name: String,
}

impl Es6Generator {
    pub fn from_config(config: &CrdConfig) -> Self {
        Self {
            module_output: config.es_module_output.clone(),
            typings_output: config.typings_output.clone(),
            module_name: config.module_name.clone(),
        }
    }
}

impl Generator for Es6Generator {
    fn id(&self) -> &'static str {
        "es6"
    }

    fn generate(
        &self,
        renderer: &TemplateRenderer<'_>,
        dataset: &Dataset,
    ) -> Result<Vec<Artifact>, RenderError> {
        let es = es6::generate(renderer, dataset, &self.module_name)?;
        Ok(vec![
            Artifact::new(&self.module_output, es.module),
            Artifact::new(&self.typings_output, es.typings),
        ])
    }
}

pub struct BuildRunner<'a> {
    generators: Vec<Box<dyn Generator>>,
    renderer: TemplateRenderer<'a>,
}

impl<'a> BuildRunner<'a> {
    pub fn new(renderer: TemplateRenderer<'a>, generators: Vec<Box<dyn Generator>>) -> Self {
        Self {
            generators,
            renderer,
        }
    }

    /// Render every generator's artifacts without touching the filesystem
    pub fn render(&self, dataset: &Dataset) -> Result<Vec<(&'static str, Artifact)>, RenderError> {
        let mut rendered = Vec::new();
        for generator in &self.generators {
            for artifact in generator.generate(&self.renderer, dataset)? {
                rendered.push((generator.id(), artifact));
            }
        }
        Ok(rendered)
    }

    /// Render, then write. Nothing is written unless every generator succeeds.
    pub fn run(&self, dataset: &Dataset) -> Result<Vec<ArtifactRecord>, RenderError> {
        let rendered = self.render(dataset)?;

        let mut records = Vec::with_capacity(rendered.len());
        for (generator, artifact) in rendered {
            write_artifact(&artifact)?;

            let record = ArtifactRecord {
                generator: generator.to_string(),
                path: artifact.path.clone(),
                bytes: artifact.contents.len(),
                hash: artifact.digest(),
            };
            tracing::info!(
                generator = %record.generator,
                path = %record.path.display(),
                bytes = record.bytes,
                hash = %record.hash,
                "artifact written"
            );
            records.push(record);
        }
        Ok(records)
    }

    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.id()).collect()
    }
}

/// Write an artifact, creating missing parent directories
pub fn write_artifact(artifact: &Artifact) -> Result<(), RenderError> {
    if let Some(parent) = artifact.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    std::fs::write(&artifact.path, &artifact.contents)
        .map_err(|e| write_error(&artifact.path, e))
}

fn write_error(path: &Path, source: std::io::Error) -> RenderError {
    RenderError::Write {
        path: path.to_path_buf(),
        source,
    }
}
