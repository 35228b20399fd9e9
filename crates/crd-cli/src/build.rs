//! `crd build`, `crd umdify`, `crd es6ify`: artifact generation.

use std::io::Write;

use crd_core::CrdConfig;

use crate::load_dataset;

/// Which artifacts to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    All,
    Umd,
    Es6,
}

/// Generate the requested artifacts and report each module written.
///
/// `All` renders every artifact before writing any of them.
pub fn run_build(target: BuildTarget, config: &CrdConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let dataset = load_dataset(config)?;

    let records = match target {
        BuildTarget::All => crd_out::build(&dataset, config)?,
        BuildTarget::Umd => crd_out::umdify(&dataset, config)?,
        BuildTarget::Es6 => crd_out::es6ify(&dataset, config)?,
    };

    for record in &records {
        match record.generator.as_str() {
            "umd" => writeln!(out, "UMD module created: {}", record.path.display())?,
            "es6" if record.path == config.es_module_output => {
                writeln!(out, "ES6 module created: {}", record.path.display())?
            }
            _ => {}
        }
    }
    Ok(())
}
