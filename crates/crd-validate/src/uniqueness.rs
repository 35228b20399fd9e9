//! Uniqueness invariants
//!
//! Checked in a fixed order: country names, country short codes, then for
//! each country in dataset order its region names and region short codes.
//! [`validate`] stops at the first violation; [`audit`] walks the same
//! order and collects all of them.

use crd_core::{Country, Dataset};
use thiserror::Error;

use crate::duplicates::{find_duplicates, KeyField};

/// A violated uniqueness invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The country names are not unique - duplicates: {}", .0.join(", "))]
    DuplicateCountryNames(Vec<String>),

    #[error("The country short codes are not unique - duplicates: {}", .0.join(", "))]
    DuplicateCountryShortCodes(Vec<String>),

    #[error("The region names for {country} are not unique - duplicates: {}", .duplicates.join(", "))]
    DuplicateRegionNames {
        country: String,
        duplicates: Vec<String>,
    },

    #[error("The region short codes for {country} are not unique - duplicates: {}", .duplicates.join(", "))]
    DuplicateRegionShortCodes {
        country: String,
        duplicates: Vec<String>,
    },
}

impl ValidationError {
    /// The attribute whose values collided
    pub fn key_field(&self) -> KeyField {
        match self {
            Self::DuplicateCountryNames(_) => KeyField::CountryName,
            Self::DuplicateCountryShortCodes(_) => KeyField::CountryShortCode,
            Self::DuplicateRegionNames { .. } => KeyField::RegionName,
            Self::DuplicateRegionShortCodes { .. } => KeyField::RegionShortCode,
        }
    }

    pub fn duplicates(&self) -> &[String] {
        match self {
            Self::DuplicateCountryNames(d) | Self::DuplicateCountryShortCodes(d) => d,
            Self::DuplicateRegionNames { duplicates, .. }
            | Self::DuplicateRegionShortCodes { duplicates, .. } => duplicates,
        }
    }
}

/// Every violation found in one pass, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violation a fail-fast run would have stopped at
    pub fn first(&self) -> Option<&ValidationError> {
        self.violations.first()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.violations.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Lazily yields violations in check order
fn violations(dataset: &Dataset) -> impl Iterator<Item = ValidationError> + '_ {
    let countries = &dataset.countries;

    let checks: [(KeyField, fn(Vec<String>) -> ValidationError); 2] = [
        (KeyField::CountryName, ValidationError::DuplicateCountryNames),
        (KeyField::CountryShortCode, ValidationError::DuplicateCountryShortCodes),
    ];

    let country_checks = checks.into_iter().filter_map(move |(field, make)| {
        let duplicates = find_duplicates(countries, |c| field.country_key(c));
        (!duplicates.is_empty()).then(|| make(duplicates))
    });

    let region_checks = countries.iter().flat_map(region_violations);

    country_checks.chain(region_checks)
}

fn region_violations(country: &Country) -> impl Iterator<Item = ValidationError> + '_ {
    [KeyField::RegionName, KeyField::RegionShortCode]
        .into_iter()
        .filter_map(move |field| {
            let duplicates = find_duplicates(&country.regions, |r| field.region_key(r));
            if duplicates.is_empty() {
                return None;
            }
            let country = country.country_name.clone();
            Some(match field {
                KeyField::RegionShortCode => {
                    ValidationError::DuplicateRegionShortCodes { country, duplicates }
                }
                _ => ValidationError::DuplicateRegionNames { country, duplicates },
            })
        })
}

/// Fail-fast validation: the first violated invariant aborts the run
pub fn validate(dataset: &Dataset) -> Result<(), ValidationError> {
    match violations(dataset).next() {
        Some(err) => {
            tracing::debug!(field = %err.key_field(), "validation failed");
            Err(err)
        }
        None => {
            tracing::debug!(countries = dataset.len(), "validation passed");
            Ok(())
        }
    }
}

/// Aggregate validation: every violation, in fail-fast order
pub fn audit(dataset: &Dataset) -> ValidationReport {
    let report = ValidationReport {
        violations: violations(dataset).collect(),
    };
    tracing::debug!(violations = report.violations.len(), "audit complete");
    report
}
