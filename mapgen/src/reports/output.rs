//! Where `check` and `generate` summaries are printed.

/// Line-oriented sink for command summaries.
///
/// `check` lists the files a config would produce, `generate` lists the
/// files it wrote and `--dry-run` prints each rendered file under a divider.
pub trait Output {
    /// Heading such as `Files` or `Generated`.
    fn section(&mut self, name: &str);

    /// `Namespace: ...`, `Arities: ...` and similar facts.
    fn key_value(&mut self, key: &str, value: &str);

    /// A file that was written.
    fn added_item(&mut self, text: &str);

    /// A file that would be written.
    fn list_item(&mut self, text: &str);

    /// Separator naming the file whose content follows.
    fn divider(&mut self, label: &str);

    /// Verbatim text, e.g. generated C# source.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A command summary.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout; logs stay on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{name}:");
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{key}: {value}");
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {text}");
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {text}");
    }

    fn divider(&mut self, label: &str) {
        println!("── {label} ──");
    }

    fn preformatted(&mut self, text: &str) {
        // generated files already end with a newline
        println!("{}", text.strip_suffix('\n').unwrap_or(text));
    }

    fn newline(&mut self) {
        println!();
    }
}
