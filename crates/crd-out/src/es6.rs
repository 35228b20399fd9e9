//! ES module and type declaration generator
//!
//! Both artifacts are rendered from the same [`ModuleView`], so the
//! declared literal unions always match the exported records.

use crd_core::Dataset;

use crate::renderer::TemplateRenderer;
use crate::templates::{ES_MODULE_TEMPLATE, TYPINGS_TEMPLATE};
use crate::view::ModuleView;
use crate::RenderError;

/// Default module specifier for the typings
pub const DEFAULT_MODULE_NAME: &str = "@qfast/country-region-data";

/// Rendered ES module source and its companion declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsModule {
    pub module: String,
    pub typings: String,
}

/// Render the ES module and typings sources
pub fn generate(
    renderer: &TemplateRenderer<'_>,
    dataset: &Dataset,
    module_name: &str,
) -> Result<EsModule, RenderError> {
    let view = ModuleView::new(dataset, module_name);

    let module = renderer
        .render(ES_MODULE_TEMPLATE, &view)
        .map_err(RenderError::Render)?;
    let typings = renderer
        .render(TYPINGS_TEMPLATE, &view)
        .map_err(RenderError::Render)?;

    Ok(EsModule { module, typings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crd_core::{Country, Region};

    fn renderer() -> TemplateRenderer<'static> {
        TemplateRenderer::builtin().unwrap()
    }

    #[test]
    fn test_empty_dataset_module() {
        let es = generate(&renderer(), &Dataset::from_countries(vec![]), DEFAULT_MODULE_NAME).unwrap();
        assert_eq!(
            es.module,
            r#"export const countryEnNames = [];
export const countryArNames = [];
export const countryCodes = [];

export const countries = [];

export const countriesMap = new Map(countries.map((country) => [country.value, country]));

export default countries;
"#
        );
        assert!(es.typings.contains("export type CountryNameEn = never;"));
        assert!(es.typings.contains("export type CountryCode = never;"));
    }

    #[test]
    fn test_single_country_module() {
        let dataset = Dataset::from_countries(vec![Country::new(
            "Alpha",
            "AL",
            vec![Region::new("North", Some("N")), Region::new("South", None)],
        )]);
        let es = generate(&renderer(), &dataset, DEFAULT_MODULE_NAME).unwrap();

        assert!(es.module.contains(
            r#"export const countries = [
  {
    displayEn: "Alpha",
    displayAr: "Alpha",
    value: "AL",
    regions: [
      { displayEn: "North", displayAr: "North", value: "N" },
      { displayEn: "South", displayAr: "South", value: "" }
    ]
  }
];
"#
        ));
    }

    #[test]
    fn test_country_without_regions() {
        let dataset = Dataset::from_countries(vec![
            Country::new("Alpha", "AL", vec![]),
            Country::new("Beta", "BE", vec![]),
        ]);
        let es = generate(&renderer(), &dataset, DEFAULT_MODULE_NAME).unwrap();

        assert!(es.module.contains("    regions: []\n  },\n  {\n    displayEn: \"Beta\","));
        assert!(es.module.contains("export const countryCodes = [\"AL\", \"BE\"];"));
    }

    #[test]
    fn test_typings_declare_module() {
        let mut alpha = Country::new("Alpha", "AL", vec![]);
        alpha.country_name_ar = Some("ألفا".to_string());
        let dataset = Dataset::from_countries(vec![alpha, Country::new("Beta", "BE", vec![])]);
        let es = generate(&renderer(), &dataset, "my-data").unwrap();

        assert!(es.typings.starts_with("declare module \"my-data\" {\n"));
        assert!(es.typings.contains("export type CountryNameEn = \"Alpha\" | \"Beta\";"));
        assert!(es.typings.contains("export type CountryNameAr = \"ألفا\" | \"Beta\";"));
        assert!(es.typings.contains("export type CountryCode = \"AL\" | \"BE\";"));
        assert!(es.typings.contains("export const countriesMap: Map<string, CountryData>;"));
        assert!(es.typings.contains("export default countries;"));
        assert!(es.typings.ends_with("}\n"));
    }

    #[test]
    fn test_names_are_escaped() {
        let dataset = Dataset::from_countries(vec![Country::new(
            "Say \"hi\"",
            "Q\\",
            vec![Region::new("It's", Some("I"))],
        )]);
        let es = generate(&renderer(), &dataset, DEFAULT_MODULE_NAME).unwrap();

        assert!(es.module.contains(r#"displayEn: "Say \"hi\"","#));
        assert!(es.module.contains(r#"value: "Q\\","#));
        assert!(es.module.contains(r#"{ displayEn: "It's", displayAr: "It's", value: "I" }"#));
        assert!(es.typings.contains(r#"export type CountryNameEn = "Say \"hi\"";"#));
    }
}
