//! Generation sessions.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    BraceStyle, Error, Indent, PendingBlock, Result, Scope, Writer, block::BlockModel,
    placeholder::Resolver,
};

/// Output options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub indent: Indent,
    pub brace_style: BraceStyle,
}

impl SessionOptions {
    pub fn new(indent: Indent, brace_style: BraceStyle) -> Self {
        Self {
            indent,
            brace_style,
        }
    }
}

/// One generator session: a writer, a scope stack and the block model.
///
/// A session is idle until [`Session::begin_with`] (or [`Session::begin`])
/// attaches a sink, and idle again after [`Session::end`]. Every emission
/// resolves placeholders against the live scopes and lets the block model
/// close whatever a new sibling supersedes.
///
/// # Example
///
/// ```
/// use mapgen_codegen::{Scope, Session, SessionOptions};
///
/// let mut session = Session::new(SessionOptions::default());
/// session.begin_with(Vec::new()).unwrap();
/// session
///     .with_scope(Scope::new().bind("param", "TKey key"), |s| {
///         s.block("get $param$", |s| s.stmt("return key"))
///     })
///     .unwrap();
/// let out = String::from_utf8(session.end().unwrap()).unwrap();
///
/// assert_eq!(out, "get TKey key {\n\treturn key;\n}\n");
/// ```
#[derive(Debug)]
pub struct Session<W: Write> {
    writer: Writer<W>,
    resolver: Resolver,
    blocks: BlockModel,
}

impl Session<BufWriter<File>> {
    /// Start a pass writing to `path`, replacing any existing content.
    pub fn begin(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if self.is_active() {
            return Err(Error::SessionActive);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        debug!(path = %path.display(), "begin generation pass");
        self.begin_with(BufWriter::new(file))
    }
}

impl<W: Write> Session<W> {
    /// Create an idle session.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            writer: Writer::new(options.indent),
            resolver: Resolver::new(),
            blocks: BlockModel::new(options.brace_style),
        }
    }

    /// Start a pass writing to `sink`.
    pub fn begin_with(&mut self, sink: W) -> Result<()> {
        self.writer.attach(sink)?;
        self.blocks.reset();
        Ok(())
    }

    /// Finish the pass: close pending top-level blocks, flush and return the sink.
    pub fn end(&mut self) -> Result<W> {
        if !self.writer.is_attached() {
            return Err(Error::SinkUnavailable);
        }
        if self.blocks.entered() > 0 {
            return Err(Error::imbalance("ending the pass inside an open block"));
        }
        self.blocks.settle(&mut self.writer)?;
        let lines = self.writer.lines_written();
        let sink = self.writer.detach()?;
        debug!(lines, "end generation pass");
        Ok(sink)
    }

    /// Whether a sink is attached.
    pub fn is_active(&self) -> bool {
        self.writer.is_attached()
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.writer.depth()
    }

    /// Lines written in the current pass.
    pub fn lines_written(&self) -> usize {
        self.writer.lines_written()
    }

    /// The block pending in the current region, if any.
    pub fn pending_block(&self) -> Option<&PendingBlock> {
        self.blocks.pending()
    }

    /// Resolve placeholders in `template` against the live scopes.
    pub fn resolve(&self, template: &str) -> Result<String> {
        self.resolver.resolve(template)
    }

    /// Run `body` with `scope` pushed as the innermost scope.
    ///
    /// The scope is popped on every exit path, so names never leak into
    /// sibling regions.
    pub fn with_scope<T, F>(&mut self, scope: Scope, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.resolver.push(scope);
        let result = body(self);
        self.resolver.pop();
        result
    }

    /// Emit `text` followed by `;` as a single line.
    pub fn stmt(&mut self, text: &str) -> Result<()> {
        self.stmt_with(text, ";")
    }

    /// Emit `text` followed by `terminator` as a single line.
    pub fn stmt_with(&mut self, text: &str, terminator: &str) -> Result<()> {
        self.blocks.settle(&mut self.writer)?;
        let line = self.resolver.resolve(text)?;
        self.writer.write_line(&format!("{line}{terminator}"))
    }

    /// Open a block without entering it.
    ///
    /// The block stays pending until the next statement or block in the same
    /// region, the end of the enclosing block, [`Session::close_block`] or
    /// [`Session::end`] closes it.
    pub fn open_block(&mut self, header: &str, suffix: &str) -> Result<()> {
        self.blocks.settle(&mut self.writer)?;
        let header = self.resolver.resolve(header)?;
        self.blocks.open(&mut self.writer, header, suffix)
    }

    /// Close the pending block of the current region.
    pub fn close_block(&mut self) -> Result<()> {
        self.blocks.close_pending(&mut self.writer)
    }

    /// Emit a block and run `body` inside it.
    pub fn block<T, F>(&mut self, header: &str, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.block_with_suffix(header, "", body)
    }

    /// Emit a block whose closing brace is followed by `suffix` and run `body` inside it.
    pub fn block_with_suffix<T, F>(&mut self, header: &str, suffix: &str, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.open_block(header, suffix)?;
        let block = self.blocks.enter()?;
        match body(self) {
            Ok(value) => {
                self.blocks.exit(&mut self.writer, block)?;
                Ok(value)
            }
            Err(err) => {
                self.blocks.leave(&block)?;
                Err(err)
            }
        }
    }

    /// Emit an empty block.
    pub fn empty_block(&mut self, header: &str) -> Result<()> {
        self.block(header, |_| Ok(()))
    }
}

/// Run a whole pass into memory and return the generated text.
pub fn render<F>(options: SessionOptions, body: F) -> Result<String>
where
    F: FnOnce(&mut Session<Vec<u8>>) -> Result<()>,
{
    let mut session = Session::new(options);
    session.begin_with(Vec::new())?;
    body(&mut session)?;
    let bytes = session.end()?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
