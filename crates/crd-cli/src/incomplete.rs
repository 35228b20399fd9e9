//! `crd find-incomplete`: countries with regions lacking short codes.

use std::io::Write;

use crd_core::CrdConfig;

use crate::load_dataset;

/// Print the completeness report. Never fails on incomplete data.
pub fn run_find_incomplete(config: &CrdConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let dataset = load_dataset(config)?;
    let report = crd_validate::find_incomplete(&dataset);
    writeln!(out, "{report}")?;
    Ok(())
}
