use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use mapgen_codegen::{BraceStyle, Indent, Session, SessionOptions, render};
use mapgen_core::ArityRange;
use mapgen_manifest::{BracePlacement, IndentStyle, Manifest};
use tracing::{debug, info};

use crate::SourceFile;

/// A file rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// A file written by [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub lines: usize,
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub files: Vec<WrittenFile>,
    pub arities: ArityRange,
}

impl GenerateReport {
    /// Total number of lines written.
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.lines).sum()
    }
}

/// C# generator for the mapping declarations
pub struct Generator<'a> {
    manifest: &'a Manifest,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Files this manifest produces, main file first.
    pub fn files(&self) -> Vec<SourceFile> {
        let mut files = vec![SourceFile::Mapping];
        if self.manifest.output.support {
            files.push(SourceFile::Support);
        }
        files
    }

    /// Session options derived from the `[output]` section.
    pub fn options(&self) -> SessionOptions {
        let indent = match self.manifest.output.indent {
            IndentStyle::Tab => Indent::Tab,
            IndentStyle::Spaces(n) => Indent::Spaces(n),
        };
        let brace_style = match self.manifest.output.brace_style {
            BracePlacement::SameLine => BraceStyle::SameLine,
            BracePlacement::NextLine => BraceStyle::NextLine,
        };
        SessionOptions::new(indent, brace_style)
    }

    /// Render generated files without writing to disk
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.files()
            .into_iter()
            .map(|file| {
                let path = file.path(self.manifest);
                let content = render(self.options(), |s| file.emit(s, self.manifest))
                    .wrap_err_with(|| format!("failed to render {}", path.display()))?;
                Ok(PreviewFile {
                    path: path.display().to_string(),
                    content,
                })
            })
            .collect()
    }

    /// Generate all files into the specified output directory
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateReport> {
        let mut written = Vec::new();

        for file in self.files() {
            let path = output_dir.join(file.path(self.manifest));
            let lines = write_pass(&path, self.options(), |s| file.emit(s, self.manifest))?;
            info!(path = %path.display(), lines, "generated file");
            written.push(WrittenFile { path, lines });
        }

        Ok(GenerateReport {
            files: written,
            arities: self.manifest.arity,
        })
    }
}

/// Run one pass into `path` and return the number of lines written.
///
/// A failed pass leaves no file behind.
fn write_pass<F>(path: &Path, options: SessionOptions, emit: F) -> Result<usize>
where
    F: FnOnce(&mut Session<BufWriter<File>>) -> mapgen_codegen::Result<()>,
{
    let mut session = Session::new(options);
    session
        .begin(path)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;

    let emitted = emit(&mut session)
        .wrap_err_with(|| format!("failed to generate {}", path.display()))
        .and_then(|()| {
            session
                .end()
                .wrap_err_with(|| format!("failed to write {}", path.display()))
        });

    match emitted {
        Ok(_) => Ok(session.lines_written()),
        Err(err) => {
            // release the handle before removing the partial file
            let _ = session.end();
            if let Err(remove) = std::fs::remove_file(path) {
                debug!(path = %path.display(), error = %remove, "could not remove partial output");
            }
            Err(err)
        }
    }
}
