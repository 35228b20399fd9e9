//! Template loading for CRD-OUT.
//!
//! A template set is a YAML file with named Handlebars templates:
//!
//! ```yaml
//! version: "1.0"
//! templates:
//!   umd:
//!     description: Universal module wrapper
//!     template: "..."
//! ```
//!
//! The built-in set lives in `templates/artifacts.yaml` and is compiled
//! into the crate; a config may point at a replacement file.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Names every template set must define
pub const UMD_TEMPLATE: &str = "umd";
pub const ES_MODULE_TEMPLATE: &str = "es_module";
pub const TYPINGS_TEMPLATE: &str = "typings";

const REQUIRED_TEMPLATES: [&str; 3] = [UMD_TEMPLATE, ES_MODULE_TEMPLATE, TYPINGS_TEMPLATE];

const BUILTIN_TEMPLATES: &str = include_str!("../templates/artifacts.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: BTreeMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// The template set shipped with the crate
    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    /// Load templates from a YAML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content, rejecting sets missing an artifact template
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let file: TemplatesFile = serde_yaml::from_str(yaml)
            .map_err(|e| format!("Failed to parse templates YAML: {}", e))?;

        let missing: Vec<&str> = REQUIRED_TEMPLATES
            .iter()
            .copied()
            .filter(|name| !file.templates.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(format!("Templates file is missing: {}", missing.join(", ")));
        }

        Ok(file)
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        let file = TemplatesFile::builtin().unwrap();
        assert_eq!(file.list_templates(), vec!["es_module", "typings", "umd"]);
        assert!(file.get(UMD_TEMPLATE).unwrap().template.contains("define.amd"));
    }

    #[test]
    fn test_missing_template_rejected() {
        let yaml = r#"
version: "1.0"
templates:
  umd:
    description: UMD only
    template: "{{data}}"
"#;

        let err = TemplatesFile::from_yaml(yaml).unwrap_err();
        assert!(err.contains("es_module"));
        assert!(err.contains("typings"));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(TemplatesFile::from_yaml("templates: [").is_err());
    }
}
