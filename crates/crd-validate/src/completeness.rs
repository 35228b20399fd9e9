//! Completeness report: countries with regions lacking a short code
use crd_core::Dataset;
use std::fmt;

/// Names of incomplete countries, in dataset order, each listed once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncompleteReport {
    pub countries: Vec<String>,
}

impl IncompleteReport {
    pub fn is_complete(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl fmt::Display for IncompleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return write!(f, "All regions now have short codes. Nice!");
        }
        writeln!(f, "The following countries are missing region short codes:")?;
        for name in &self.countries {
            writeln!(f, "- {}", name)?;
        }
        write!(f, "\n({} countries)", self.countries.len())
    }
}

/// Scan every country for a region without a short code.
///
/// Purely diagnostic; never fails.
pub fn find_incomplete(dataset: &Dataset) -> IncompleteReport {
    let countries: Vec<String> = dataset
        .iter()
        .filter_map(|country| {
            let region = country.first_incomplete_region()?;
            tracing::debug!(
                country = %country.country_name,
                region = %region.name,
                "region missing short code"
            );
            Some(country.country_name.clone())
        })
        .collect();

    if !countries.is_empty() {
        tracing::warn!(count = countries.len(), "countries with incomplete regions");
    }

    IncompleteReport { countries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crd_core::{Country, Region};

    #[test]
    fn test_country_listed_once() {
        let dataset = Dataset::from_countries(vec![Country::new(
            "Alpha",
            "AL",
            vec![
                Region::new("North", None),
                Region::new("South", Some("S")),
                Region::new("East", None),
            ],
        )]);
        let report = find_incomplete(&dataset);
        assert_eq!(report.countries, vec!["Alpha".to_string()]);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_dataset_order() {
        let dataset = Dataset::from_countries(vec![
            Country::new("Gamma", "GA", vec![Region::new("A", None)]),
            Country::new("Beta", "BE", vec![Region::new("B", Some("B"))]),
            Country::new("Alpha", "AL", vec![Region::new("C", None)]),
        ]);
        let report = find_incomplete(&dataset);
        assert_eq!(report.countries, vec!["Gamma".to_string(), "Alpha".to_string()]);
    }

    #[test]
    fn test_null_short_code_counts_as_missing() {
        // a present-but-null shortCode is not a code; the country needs one
        let dataset = Dataset::from_json_str(
            r#"[
                {"countryName":"Alpha","countryShortCode":"AL","regions":[{"name":"North","shortCode":null}]},
                {"countryName":"Beta","countryShortCode":"BE","regions":[{"name":"South","shortCode":"S"}]}
            ]"#,
        )
        .unwrap();
        let report = find_incomplete(&dataset);
        assert_eq!(report.countries, vec!["Alpha".to_string()]);
    }

    #[test]
    fn test_complete_message() {
        let report = find_incomplete(&Dataset::from_countries(vec![]));
        assert!(report.is_complete());
        assert_eq!(report.to_string(), "All regions now have short codes. Nice!");
    }

    #[test]
    fn test_incomplete_message() {
        let report = IncompleteReport {
            countries: vec!["Alpha".into(), "Gamma".into()],
        };
        assert_eq!(
            report.to_string(),
            "The following countries are missing region short codes:\n- Alpha\n- Gamma\n\n(2 countries)"
        );
    }
}
