//! Test utilities for generation passes.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use crate::{Result, Session, SessionOptions, render};

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());
        let mut shown = 0;

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
                shown += 1;
                if shown == 20 {
                    diff.push_str("  ...\n");
                    break;
                }
            }
        }

        if diff.is_empty() {
            diff.push_str("  (line terminators differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Render with 4-space indentation and same-line braces, panicking on error.
pub fn render_spaces<F>(body: F) -> String
where
    F: FnOnce(&mut Session<Vec<u8>>) -> Result<()>,
{
    let options = SessionOptions::new(crate::Indent::FOUR, crate::BraceStyle::SameLine);
    match render(options, body) {
        Ok(text) => text,
        Err(err) => panic!("generation failed: {err}"),
    }
}

/// Check that every `{` has a matching `}` and that nesting never goes negative.
pub fn braces_balanced(text: &str) -> bool {
    let mut depth: usize = 0;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_content_eq_passes_on_equal() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    fn test_braces_balanced() {
        assert!(braces_balanced("a {\n b {\n }\n}\n"));
        assert!(!braces_balanced("}{"));
        assert!(!braces_balanced("{"));
    }
}
