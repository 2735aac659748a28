mod check;
mod completions;
mod generate;
mod init;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use mapgen_manifest::{Manifest, MapgenToml};
use tracing::debug;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mapgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `path`, or fall back to the default manifest when it does not exist.
pub(crate) fn load_or_default(path: &Path) -> Manifest {
    if path.exists() {
        MapgenToml::open(path).unwrap_or_exit().into_manifest()
    } else {
        debug!(path = %path.display(), "config not found, using defaults");
        Manifest::default()
    }
}

#[derive(Parser)]
#[command(name = "mapgen")]
#[command(version)]
#[command(about = "Generate arity-expanded C# mapping declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C# sources
    Generate(GenerateCommand),

    /// Validate mapgen.toml without generating code
    Check(CheckCommand),

    /// Write a default mapgen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
