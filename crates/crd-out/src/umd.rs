//! Universal module generator
//!
//! Wraps the dataset, exactly as loaded, in a UMD factory so it can be
//! consumed via AMD, CommonJS or as a browser global.

use crd_core::Dataset;

use crate::renderer::TemplateRenderer;
use crate::templates::UMD_TEMPLATE;
use crate::view::UmdView;
use crate::RenderError;

/// Default browser global
pub const DEFAULT_GLOBAL_ALIAS: &str = "countryRegionData";

/// Render the universal module source
pub fn generate(
    renderer: &TemplateRenderer<'_>,
    dataset: &Dataset,
    global_alias: &str,
) -> Result<String, RenderError> {
    let data = serde_json::to_string_pretty(&dataset.source)
        .map_err(|e| RenderError::Render(format!("Failed to serialize dataset: {}", e)))?;

    let view = UmdView { global_alias, data };
    renderer.render(UMD_TEMPLATE, &view).map_err(RenderError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crd_core::{Country, Region};

    fn renderer() -> TemplateRenderer<'static> {
        TemplateRenderer::builtin().unwrap()
    }

    #[test]
    fn test_empty_dataset() {
        let output = generate(&renderer(), &Dataset::from_countries(vec![]), "countryRegionData").unwrap();
        assert_eq!(
            output,
            r#"(function (root, factory) {
  if (typeof define === 'function' && define.amd) {
    define([], factory);
  } else if (typeof exports === 'object') {
    module.exports = factory();
  } else {
    root["countryRegionData"] = factory();
  }
}(this, function () {
  return [];
}));
"#
        );
    }

    #[test]
    fn test_embeds_indented_json() {
        let dataset = Dataset::from_countries(vec![Country::new(
            "Alpha",
            "AL",
            vec![Region::new("North", Some("N"))],
        )]);
        let output = generate(&renderer(), &dataset, "regions").unwrap();

        assert!(output.contains("root[\"regions\"] = factory();"));
        assert!(output.contains("  return [\n    {\n      \"countryName\": \"Alpha\","));
        assert!(output.contains("\n  ];\n}));\n"));
    }

    #[test]
    fn test_deterministic() {
        let dataset = Dataset::from_countries(vec![Country::new("Alpha", "AL", vec![])]);
        let first = generate(&renderer(), &dataset, DEFAULT_GLOBAL_ALIAS).unwrap();
        let second = generate(&renderer(), &dataset, DEFAULT_GLOBAL_ALIAS).unwrap();
        assert_eq!(first, second);
    }
}
