//! CRD Validate: dataset consistency checks
//!
//! Two independent checks over a loaded [`Dataset`]:
//!
//! - uniqueness of country names and codes across the dataset, and of
//!   region names and codes within each country ([`validate`], [`audit`])
//! - completeness of region short codes ([`find_incomplete`])
//!
//! # Example
//!
//! ```ignore
//! use crd_validate::{validate, find_incomplete};
//!
//! let dataset = crd_core::load("data.json")?;
//! validate(&dataset)?;
//! println!("{}", find_incomplete(&dataset));
//! ```

pub mod completeness;
pub mod duplicates;
pub mod uniqueness;

pub use completeness::{find_incomplete, IncompleteReport};
pub use duplicates::{find_duplicates, KeyField};
pub use uniqueness::{audit, validate, ValidationError, ValidationReport};

use crd_core::Dataset;

/// Check if a dataset would pass validation
pub fn is_valid(dataset: &Dataset) -> bool {
    validate(dataset).is_ok()
}
