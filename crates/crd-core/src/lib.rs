//! CRD Core: data model, dataset loader and configuration
//!
//! Shared by the validator (`crd-validate`), the generators (`crd-out`)
//! and the `crd` binary. Every operation loads its own [`Dataset`] through
//! [`load`]; nothing here caches or writes back to the source file.

pub mod config;
pub mod data_model;
pub mod error;
pub mod loader;

pub use config::CrdConfig;
pub use data_model::{Country, Dataset, Region};
pub use error::{ConfigError, LoadError};
pub use loader::load;

/// Version of the crd toolchain
pub const CRD_VERSION: &str = env!("CARGO_PKG_VERSION");
