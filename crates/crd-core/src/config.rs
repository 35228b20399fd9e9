//! Configuration: input and output locations plus generator settings
//!
//! Every field has a default, so an absent `crd.yaml` yields the stock
//! layout (`data.json` in, `dist/` out).
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::loader::DEFAULT_INPUT_PATH;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "crd.yaml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CRD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrdConfig {
    /// Source dataset
    pub input: PathBuf,
    pub umd_output: PathBuf,
    pub es_module_output: PathBuf,
    pub typings_output: PathBuf,
    /// Browser global the UMD wrapper assigns
    pub global_alias: String,
    /// Module specifier used in the typings `declare module` block
    pub module_name: String,
    /// Template set replacing the built-in one
    pub templates: Option<PathBuf>,
}

impl Default for CrdConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            umd_output: PathBuf::from("dist/data-umd.js"),
            es_module_output: PathBuf::from("dist/data.js"),
            typings_output: PathBuf::from("dist/data.d.ts"),
            global_alias: "countryRegionData".to_string(),
            module_name: "@qfast/country-region-data".to_string(),
            templates: None,
        }
    }
}

impl CrdConfig {
    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document is a valid "all defaults" config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path (flag, then `CRD_CONFIG`) must exist; otherwise
    /// `crd.yaml` is used when present and defaults when not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    tracing::debug!("no {} found; using defaults", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Re-root the three output files under `dir`, keeping their file names
    pub fn with_out_dir(mut self, dir: &Path) -> Self {
        for output in [
            &mut self.umd_output,
            &mut self.es_module_output,
            &mut self.typings_output,
        ] {
            if let Some(name) = output.file_name() {
                *output = dir.join(name);
            }
        }
        self
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = input;
        self
    }
}
