use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mapgen_csharp::Generator;

use super::load_or_default;
use crate::reports::{GenerateReport, PreviewReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mapgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = "mapgen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Smallest key arity (overrides mapgen.toml)
    #[arg(long)]
    pub min: Option<u8>,

    /// Largest key arity (overrides mapgen.toml)
    #[arg(long)]
    pub max: Option<u8>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut manifest = load_or_default(&self.config);
        manifest.arity = manifest
            .arity
            .with_bounds(self.min, self.max)
            .wrap_err("Invalid arity override")?;

        let generator = Generator::new(&manifest);
        let mut out = TerminalOutput::new();

        if self.dry_run {
            let files = generator.preview().wrap_err("Failed to render code")?;
            PreviewReport { files }.render(&mut out);
        } else {
            let result = generator
                .generate(&self.output)
                .wrap_err("Failed to generate code")?;
            GenerateReport {
                namespace: manifest.csharp.namespace.clone(),
                result,
            }
            .render(&mut out);
        }

        Ok(())
    }
}
