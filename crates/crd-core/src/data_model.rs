//! Data Model: Country, Region, Dataset
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One administrative region (state, province, ...) of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    /// Absent short codes mark the owning country as incomplete; `null` counts as absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

impl Region {
    pub fn new(name: impl Into<String>, short_code: Option<&str>) -> Self {
        Self {
            name: name.into(),
            name_ar: None,
            short_code: short_code.map(String::from),
        }
    }

    /// Arabic display name, falling back to `name` when absent or empty
    pub fn display_ar(&self) -> &str {
        non_empty(self.name_ar.as_deref()).unwrap_or(&self.name)
    }

    pub fn has_short_code(&self) -> bool {
        self.short_code.is_some()
    }
}

/// Top-level dataset entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub country_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name_ar: Option<String>,
    pub country_short_code: String,
    pub regions: Vec<Region>,
}

impl Country {
    pub fn new(name: impl Into<String>, short_code: impl Into<String>, regions: Vec<Region>) -> Self {
        Self {
            country_name: name.into(),
            country_name_ar: None,
            country_short_code: short_code.into(),
            regions,
        }
    }

    /// Arabic display name, falling back to `country_name` when absent or empty
    pub fn display_ar(&self) -> &str {
        non_empty(self.country_name_ar.as_deref()).unwrap_or(&self.country_name)
    }

    /// First region lacking a short code, if any
    pub fn first_incomplete_region(&self) -> Option<&Region> {
        self.regions.iter().find(|r| !r.has_short_code())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// The loaded dataset: typed records plus the document exactly as parsed.
///
/// `source` keeps object key order, so re-serializing it reproduces the
/// input field-for-field.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub source: Value,
}

impl Dataset {
    /// Parse a JSON array of country objects
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let source: Value = serde_json::from_str(content)?;
        let countries: Vec<Country> = serde_json::from_value(source.clone())?;
        Ok(Self { countries, source })
    }

    /// Build a dataset from typed records; `source` is derived from them
    pub fn from_countries(countries: Vec<Country>) -> Self {
        let source = serde_json::to_value(&countries).unwrap_or(Value::Array(Vec::new()));
        Self { countries, source }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
