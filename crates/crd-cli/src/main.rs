//! # crd CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! With no subcommand, `crd` validates the dataset.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crd_cli::build::{run_build, BuildTarget};
use crd_cli::incomplete::run_find_incomplete;
use crd_cli::resolve_config;
use crd_cli::validate::{run_validate, ValidateArgs};

/// Country/region dataset toolchain
///
/// Validates the dataset for duplicate names and codes, reports countries
/// with incomplete regions, and builds the UMD, ES module and typings
/// artifacts.
#[derive(Parser, Debug)]
#[command(name = "crd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to crd.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset to read, overriding the configured input.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output directory for generated artifacts.
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check country and region names and short codes are unique (default).
    Validate(ValidateArgs),

    /// List countries that have regions without a short code.
    #[command(name = "find-incomplete", alias = "findIncomplete")]
    FindIncomplete,

    /// Generate every artifact (umdify, then es6ify).
    Build,

    /// Generate the universal module.
    Umdify,

    /// Generate the ES module and its type declarations.
    Es6ify,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("crd v{} starting", crd_core::CRD_VERSION);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.input, cli.out_dir.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or(Commands::Validate(ValidateArgs::default())) {
        Commands::Validate(args) => run_validate(&args, &config, &mut stdout),
        Commands::FindIncomplete => run_find_incomplete(&config, &mut stdout),
        Commands::Build => run_build(BuildTarget::All, &config, &mut stdout),
        Commands::Umdify => run_build(BuildTarget::Umd, &config, &mut stdout),
        Commands::Es6ify => run_build(BuildTarget::Es6, &config, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_no_subcommand_defaults_to_validate() {
        let cli = Cli::try_parse_from(["crd"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_validate_all() {
        let cli = Cli::try_parse_from(["crd", "validate", "--all"]).unwrap();
        if let Some(Commands::Validate(args)) = cli.command {
            assert!(args.all);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_find_incomplete_alias() {
        let cli = Cli::try_parse_from(["crd", "findIncomplete"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::FindIncomplete)));
        let cli = Cli::try_parse_from(["crd", "find-incomplete"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::FindIncomplete)));
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "crd", "build", "--input", "data/countries.json", "--out-dir", "out", "-vv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Build)));
        assert_eq!(cli.input, Some(PathBuf::from("data/countries.json")));
        assert_eq!(cli.out_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["crd", "publish"]).is_err());
    }
}
