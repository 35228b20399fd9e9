//! Dataset Loader: reads the source JSON file fresh on every call
use std::path::Path;

use crate::data_model::Dataset;
use crate::error::LoadError;

/// Default dataset location, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "data.json";

/// Read and parse the dataset at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = Dataset::from_json_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), countries = dataset.len(), "loaded dataset");
    Ok(dataset)
}
