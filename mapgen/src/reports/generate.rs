//! Generate command report data structures.

use mapgen_csharp::PreviewFile;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub namespace: String,
    pub result: mapgen_csharp::GenerateReport,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Namespace", &self.namespace);
        out.key_value("Arities", &self.result.arities.to_string());
        out.newline();

        out.section("Generated");
        for file in &self.result.files {
            out.added_item(&format!("{} ({} lines)", file.path.display(), file.lines));
        }
    }
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mapgen_core::ArityRange;
    use mapgen_csharp::WrittenFile;

    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_generate_report_lists_files() {
        let report = GenerateReport {
            namespace: "Reynolds.Mappings".to_string(),
            result: mapgen_csharp::GenerateReport {
                files: vec![WrittenFile {
                    path: PathBuf::from("out/Mapping.cs"),
                    lines: 2120,
                }],
                arities: ArityRange::default(),
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Namespace: Reynolds.Mappings",
                "Arities: 1..=5",
                "",
                "Generated:",
                "+ out/Mapping.cs (2120 lines)",
            ]
        );
    }

    #[test]
    fn test_preview_report_pluralizes() {
        let report = PreviewReport {
            files: vec![PreviewFile {
                path: "Mapping.cs".to_string(),
                content: "using System;".to_string(),
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "-- Mapping.cs --",
                "using System;",
                "-- Summary --",
                "1 file would be generated",
            ]
        );
    }
}
