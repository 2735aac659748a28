//! Indentation and brace placement for generated code.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const TWO: Self = Self::Spaces(2);

    /// Tab indentation, the historical unit of the generated C# sources.
    pub const CSHARP: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

/// Where the opening brace of a block goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BraceStyle {
    /// `header {` on a single line.
    #[default]
    SameLine,
    /// The header line, then `{` alone on the next line.
    NextLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Indent::default(), Indent::Tab);
        assert_eq!(BraceStyle::default(), BraceStyle::SameLine);
    }
}
