//! `crd validate`: uniqueness checks over the dataset.

use std::io::Write;

use anyhow::bail;
use clap::Args;
use crd_core::CrdConfig;

use crate::load_dataset;

#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Report every violation instead of stopping at the first.
    #[arg(long)]
    pub all: bool,
}

/// Validate the configured dataset; prints `PASS!` on success.
pub fn run_validate(
    args: &ValidateArgs,
    config: &CrdConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let dataset = load_dataset(config)?;

    if args.all {
        let report = crd_validate::audit(&dataset);
        if !report.is_valid() {
            let lines: Vec<String> = report
                .violations
                .iter()
                .map(|v| format!("- {v}"))
                .collect();
            bail!(
                "{} uniqueness violations:\n{}",
                report.violations.len(),
                lines.join("\n")
            );
        }
    } else {
        crd_validate::validate(&dataset)?;
    }

    writeln!(out, "PASS!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_for(dir: &Path, content: &str) -> CrdConfig {
        let input = dir.join("data.json");
        std::fs::write(&input, content).unwrap();
        CrdConfig::default().with_input(input)
    }

    #[test]
    fn validate_prints_pass() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), "[]");
        let mut out = Vec::new();
        run_validate(&ValidateArgs::default(), &config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "PASS!\n");
    }

    #[test]
    fn validate_all_lists_every_violation() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(
            dir.path(),
            r#"[
                {"countryName":"A","countryShortCode":"X","regions":[]},
                {"countryName":"A","countryShortCode":"X","regions":[]}
            ]"#,
        );
        let mut out = Vec::new();
        let err = run_validate(&ValidateArgs { all: true }, &config, &mut out).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("2 uniqueness violations:"));
        assert!(message.contains("- The country names are not unique - duplicates: A"));
        assert!(message.contains("- The country short codes are not unique - duplicates: X"));
        assert!(out.is_empty());
    }
}
