use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mapgen_csharp::Generator;
use mapgen_manifest::MapgenToml;

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mapgen.toml (defaults to ./mapgen.toml)
    #[arg(short, long, default_value = "mapgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mapgen_toml = MapgenToml::open(&self.config).unwrap_or_exit();
        let manifest = mapgen_toml.manifest();
        let generator = Generator::new(manifest);

        let report = CheckReport {
            config_path: self.config.clone(),
            namespace: manifest.csharp.namespace.clone(),
            arities: manifest.arity,
            files: generator
                .files()
                .iter()
                .map(|f| f.path(manifest).display().to_string())
                .collect(),
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
