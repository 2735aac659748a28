use std::path::PathBuf;

use serde::Deserialize;

/// Default name of the main generated file.
pub const DEFAULT_OUTPUT_PATH: &str = "Mapping.cs";

/// `[output]` section: where and how files are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Main file, relative to the output directory
    pub path: PathBuf,
    /// Indentation unit
    pub indent: IndentStyle,
    /// Placement of opening braces
    pub brace_style: BracePlacement,
    /// Also emit the support file the weak mappings derive from
    pub support: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            indent: IndentStyle::default(),
            brace_style: BracePlacement::default(),
            support: true,
        }
    }
}

/// Indentation unit, written as `"tab"` or a space count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum IndentStyle {
    #[default]
    Tab,
    Spaces(u8),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Name(String),
    Width(i64),
}

impl TryFrom<RawIndent> for IndentStyle {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Name(name) if name == "tab" => Ok(Self::Tab),
            RawIndent::Name(name) => Err(format!(
                "unknown indent '{name}', expected \"tab\" or a space count"
            )),
            RawIndent::Width(n @ (2 | 4 | 8)) => Ok(Self::Spaces(n as u8)),
            RawIndent::Width(n) => Err(format!("unsupported indent width {n}, expected 2, 4 or 8")),
        }
    }
}

/// Where the opening brace of a block goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracePlacement {
    SameLine,
    #[default]
    NextLine,
}
