use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use mapgen_core::{File, Overwrite, WriteResult};
use mapgen_manifest::DEFAULT_MANIFEST;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create mapgen.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing mapgen.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };
        let file = File::new(self.dir.join("mapgen.toml"), DEFAULT_MANIFEST).with_overwrite(overwrite);

        match file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?
        {
            WriteResult::Written => {
                println!("Created {}", file.path().display());
                println!();
                println!("Next: mapgen generate -c {}", file.path().display());
                Ok(())
            }
            WriteResult::Skipped => bail!(
                "{} already exists (use --force to overwrite)",
                file.path().display()
            ),
        }
    }
}
