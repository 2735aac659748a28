//! Manifest parsing from files and strings.

use std::{
    ffi::OsStr,
    path::{Component, Path},
    str::FromStr,
};

use mapgen_core::{ArityError, ArityRange};

use super::{Manifest, RawArity, RawManifest, SUPPORT_FILE_NAME};
use crate::{Error, Result, error::SourceContext, validate::ParseContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "mapgen.toml")
    }
}

impl Manifest {
    /// Parse a mapgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a mapgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let ctx = ParseContext::new(content, filename);
    let arity = validate_arity(&raw.arity, &ctx.push("arity"))?;
    let manifest = Manifest {
        output: raw.output,
        arity,
        csharp: raw.csharp,
    };
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate_arity(raw: &RawArity, ctx: &ParseContext<'_>) -> Result<ArityRange> {
    ArityRange::new(raw.min, raw.max).map_err(|err| {
        let span = match err {
            ArityError::TooLarge { .. } => ctx.key_span("max"),
            ArityError::Zero | ArityError::Inverted { .. } => ctx.key_span("min"),
        };
        ctx.source_context()
            .invalid_arity_error(err.to_string(), span)
    })
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    let output = ctx.push("output");
    let path = &manifest.output.path;
    if path.as_os_str().is_empty() {
        return Err(output
            .source_context()
            .validation_error("output path cannot be empty", output.key_span("path")));
    }
    if path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(output.source_context().validation_error(
            "output path must stay inside the output directory",
            output.key_span("path"),
        ));
    }

    if manifest.output.support && path.file_name() == Some(OsStr::new(SUPPORT_FILE_NAME)) {
        return Err(output.source_context().validation_error(
            format!("output path collides with the support file {SUPPORT_FILE_NAME}"),
            output.key_span("path"),
        ));
    }

    let csharp = ctx.push("csharp");
    csharp.validate_dotted_name(&manifest.csharp.namespace, "namespace")?;
    for using in &manifest.csharp.usings {
        csharp.validate_dotted_name(using, "using")?;
    }

    let key = &manifest.csharp.key;
    csharp.validate_name(key, "key")?;
    if key.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(csharp.source_context().invalid_identifier_error(
            key,
            csharp.context_for("key"),
            "key base name must start with a lowercase letter",
            csharp.value_span(key, "key"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{BracePlacement, DEFAULT_MANIFEST, IndentStyle};

    fn parse(src: &str) -> Result<Manifest> {
        src.parse()
    }

    #[test]
    fn test_empty_manifest_uses_defaults() {
        assert_eq!(parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_default_template_matches_defaults() {
        assert_eq!(parse(DEFAULT_MANIFEST).unwrap(), Manifest::default());
    }

    #[test]
    fn test_full_manifest() {
        let manifest = parse(
            r#"
[output]
path = "Generated/Maps.cs"
indent = 4
brace_style = "same-line"
support = false

[arity]
min = 2
max = 3

[csharp]
namespace = "Acme.Collections"
usings = ["System"]
key = "id"
"#,
        )
        .unwrap();

        assert_eq!(manifest.output.path, PathBuf::from("Generated/Maps.cs"));
        assert_eq!(manifest.output.indent, IndentStyle::Spaces(4));
        assert_eq!(manifest.output.brace_style, BracePlacement::SameLine);
        assert!(!manifest.output.support);
        assert_eq!(manifest.arity, ArityRange::new(2, 3).unwrap());
        assert_eq!(manifest.csharp.namespace, "Acme.Collections");
        assert_eq!(manifest.csharp.usings, ["System"]);
        assert_eq!(manifest.csharp.key, "id");
    }

    #[test]
    fn test_partial_arity_keeps_other_default() {
        let manifest = parse("[arity]\nmax = 2\n").unwrap();
        assert_eq!(manifest.arity, ArityRange::new(1, 2).unwrap());
    }

    #[test]
    fn test_inverted_arity_points_at_min() {
        let src = "[arity]\nmin = 4\nmax = 2\n";
        let err = parse(src).unwrap_err();
        match *err {
            Error::InvalidArity { span, ref reason, .. } => {
                assert!(reason.contains("greater than"));
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "4");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_large_arity_points_at_max() {
        let src = "[arity]\nmax = 8\n";
        let err = parse(src).unwrap_err();
        match *err {
            Error::InvalidArity { span, .. } => {
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "8");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_arity_rejected() {
        assert!(matches!(
            *parse("[arity]\nmin = 0\n").unwrap_err(),
            Error::InvalidArity { .. }
        ));
    }

    #[test]
    fn test_negative_arity_is_parse_error() {
        assert!(matches!(
            *parse("[arity]\nmin = -1\n").unwrap_err(),
            Error::Parse { .. }
        ));
    }

    #[test]
    fn test_invalid_namespace() {
        let err = parse("[csharp]\nnamespace = \"My-Company.Maps\"\n").unwrap_err();
        match *err {
            Error::InvalidIdentifier {
                ref name,
                ref context,
                span,
                ..
            } => {
                assert_eq!(name, "My-Company.Maps");
                assert_eq!(context, "namespace in 'csharp'");
                assert!(span.is_some());
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_using() {
        let err = parse("[csharp]\nusings = [\"System\", \"System..Linq\"]\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "System..Linq"));
    }

    #[test]
    fn test_uppercase_key_rejected() {
        let err = parse("[csharp]\nkey = \"Key\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "Key"));
    }

    #[test]
    fn test_reserved_key_allowed() {
        let manifest = parse("[csharp]\nkey = \"base\"\n").unwrap();
        assert_eq!(manifest.csharp.key, "base");
    }

    #[test]
    fn test_output_path_escaping_directory_rejected() {
        for path in ["../Mapping.cs", "/tmp/Mapping.cs"] {
            let src = format!("[output]\npath = \"{path}\"\n");
            assert!(matches!(
                *parse(&src).unwrap_err(),
                Error::Validation { .. }
            ));
        }
    }

    #[test]
    fn test_output_path_colliding_with_support_file() {
        let src = "[output]\npath = \"WeakMapping.cs\"\n";
        assert!(matches!(*parse(src).unwrap_err(), Error::Validation { .. }));

        let src = "[output]\npath = \"WeakMapping.cs\"\nsupport = false\n";
        assert!(parse(src).is_ok());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        assert!(matches!(
            *parse("[output]\npath = \"\"\n").unwrap_err(),
            Error::Validation { .. }
        ));
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = parse("[rust]\nedition = \"2024\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        assert!(matches!(
            *parse("[arity\nmin = 1").unwrap_err(),
            Error::Parse { .. }
        ));
    }
}
