//! Template view models derived from a dataset
use crd_core::{Country, Dataset, Region};
use serde::Serialize;

/// Data for the `umd` template
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UmdView<'a> {
    pub global_alias: &'a str,
    /// Pretty-printed (2-space) source document
    pub data: String,
}

/// Data for the `es_module` and `typings` templates
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView<'a> {
    pub module_name: &'a str,
    pub country_en_names: Vec<&'a str>,
    pub country_ar_names: Vec<&'a str>,
    pub country_codes: Vec<&'a str>,
    pub countries: Vec<CountryView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView<'a> {
    pub display_en: &'a str,
    pub display_ar: &'a str,
    pub value: &'a str,
    pub regions: Vec<RegionView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionView<'a> {
    pub display_en: &'a str,
    pub display_ar: &'a str,
    /// Empty when the region has no short code
    pub value: &'a str,
}

impl<'a> ModuleView<'a> {
    pub fn new(dataset: &'a Dataset, module_name: &'a str) -> Self {
        Self {
            module_name,
            country_en_names: dataset.iter().map(|c| c.country_name.as_str()).collect(),
            country_ar_names: dataset.iter().map(Country::display_ar).collect(),
            country_codes: dataset.iter().map(|c| c.country_short_code.as_str()).collect(),
            countries: dataset.iter().map(CountryView::from).collect(),
        }
    }
}

impl<'a> From<&'a Country> for CountryView<'a> {
    fn from(country: &'a Country) -> Self {
        Self {
            display_en: &country.country_name,
            display_ar: country.display_ar(),
            value: &country.country_short_code,
            regions: country.regions.iter().map(RegionView::from).collect(),
        }
    }
}

impl<'a> From<&'a Region> for RegionView<'a> {
    fn from(region: &'a Region) -> Self {
        Self {
            display_en: &region.name,
            display_ar: region.display_ar(),
            value: region.short_code.as_deref().unwrap_or_default(),
        }
    }
}
