//! Duplicate key detection
//!
//! Groups records by a key and reports every key seen more than once.
//! Records without the key are skipped: two absent values are missing,
//! not equal.

use crd_core::{Country, Region};
use std::collections::HashMap;
use std::fmt;

/// The identifying attributes the validator checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
    CountryName,
    CountryShortCode,
    RegionName,
    RegionShortCode,
}

impl KeyField {
    /// Attribute name as it appears in the source JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyField::CountryName => "countryName",
            KeyField::CountryShortCode => "countryShortCode",
            KeyField::RegionName => "name",
            KeyField::RegionShortCode => "shortCode",
        }
    }

    pub fn country_key(self, country: &Country) -> Option<&str> {
        match self {
            KeyField::CountryName => Some(&country.country_name),
            KeyField::CountryShortCode => Some(&country.country_short_code),
            KeyField::RegionName | KeyField::RegionShortCode => None,
        }
    }

    pub fn region_key(self, region: &Region) -> Option<&str> {
        match self {
            KeyField::RegionName => Some(&region.name),
            KeyField::RegionShortCode => region.short_code.as_deref(),
            KeyField::CountryName | KeyField::CountryShortCode => None,
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct key values occurring more than once, in order of first occurrence
pub fn find_duplicates<'a, T, F>(records: &'a [T], key: F) -> Vec<String>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for value in records.iter().filter_map(key) {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter(|value| counts[value] > 1)
        .map(String::from)
        .collect()
}
