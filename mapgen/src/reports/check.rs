//! Check command report data structures.

use std::path::PathBuf;

use mapgen_core::ArityRange;
use mapgen_csharp::DECLARATIONS;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub namespace: String,
    pub arities: ArityRange,
    /// Files a generation run would write, relative to the output directory.
    pub files: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Namespace", &self.namespace);
        out.key_value(
            "Arities",
            &format!(
                "{} ({} declarations each)",
                self.arities,
                DECLARATIONS.len()
            ),
        );
        out.newline();

        out.section("Files");
        for file in &self.files {
            out.list_item(file);
        }
    }
}
