//! Line writer with automatic indentation.

use std::io::Write;

use crate::{Error, Indent, Result};

/// Writes indented lines to an attached sink.
///
/// The writer is the only component that touches the sink. It starts
/// detached; [`Writer::attach`] and [`Writer::detach`] bracket one pass.
#[derive(Debug)]
pub struct Writer<W> {
    sink: Option<W>,
    indent: Indent,
    depth: usize,
    lines: usize,
}

impl<W: Write> Writer<W> {
    /// Create a detached writer using the given indent unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            sink: None,
            indent,
            depth: 0,
            lines: 0,
        }
    }

    /// Attach a sink and reset depth and line count.
    pub fn attach(&mut self, sink: W) -> Result<()> {
        if self.sink.is_some() {
            return Err(Error::SessionActive);
        }
        self.sink = Some(sink);
        self.depth = 0;
        self.lines = 0;
        Ok(())
    }

    /// Flush and hand back the sink.
    pub fn detach(&mut self) -> Result<W> {
        let mut sink = self.sink.take().ok_or(Error::SinkUnavailable)?;
        sink.flush()?;
        Ok(sink)
    }

    /// Whether a sink is attached.
    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Write `line` prefixed with the current indentation and followed by `\n`.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let sink = self.sink.as_mut().ok_or(Error::SinkUnavailable)?;
        for _ in 0..self.depth {
            sink.write_all(self.indent.as_str().as_bytes())?;
        }
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease indentation level.
    ///
    /// `construct` names what is being closed and ends up in the error when
    /// the depth is already zero.
    pub fn dedent(&mut self, construct: &str) -> Result<()> {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| Error::imbalance(format!("closing {construct}")))?;
        Ok(())
    }

    /// Get the current indentation level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of lines written since the sink was attached.
    pub fn lines_written(&self) -> usize {
        self.lines
    }
}
