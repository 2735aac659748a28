//! Deferred-close block model.
//!
//! Blocks are tracked per *region*: the top level is region 0 and every
//! entered block opens a new region for its body. A region holds at most one
//! pending block, i.e. a block whose header and `{` are written but whose `}`
//! is not. The pending block of a region is closed when the next statement or
//! block is emitted in the same region, when the region itself is left, or
//! explicitly. Regions nest strictly, so pending blocks always close innermost
//! first.

use std::io::Write;

use tracing::trace;

use crate::{BraceStyle, Error, Result, Writer};

/// A block whose closing brace has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBlock {
    header: String,
    suffix: String,
}

impl PendingBlock {
    /// Resolved header text, used to name the block in diagnostics.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Text written directly after the closing brace.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

#[derive(Debug)]
pub(crate) struct BlockModel {
    style: BraceStyle,
    regions: Vec<Option<PendingBlock>>,
}

impl BlockModel {
    pub(crate) fn new(style: BraceStyle) -> Self {
        Self {
            style,
            regions: vec![None],
        }
    }

    /// Forget all state and start again at the top-level region.
    pub(crate) fn reset(&mut self) {
        self.regions.clear();
        self.regions.push(None);
    }

    /// Number of entered blocks.
    pub(crate) fn entered(&self) -> usize {
        self.regions.len() - 1
    }

    /// The current region's pending block.
    pub(crate) fn pending(&self) -> Option<&PendingBlock> {
        self.regions.last().and_then(Option::as_ref)
    }

    /// Close the pending block of the current region, if any.
    pub(crate) fn settle<W: Write>(&mut self, writer: &mut Writer<W>) -> Result<()> {
        if let Some(block) = self.current_mut()?.take() {
            close(writer, &block)?;
        }
        Ok(())
    }

    /// Write a block opening and make it the current region's pending block.
    ///
    /// The caller must have settled the region first.
    pub(crate) fn open<W: Write>(
        &mut self,
        writer: &mut Writer<W>,
        header: String,
        suffix: &str,
    ) -> Result<()> {
        match self.style {
            BraceStyle::SameLine if header.is_empty() => writer.write_line("{")?,
            BraceStyle::SameLine => writer.write_line(&format!("{header} {{"))?,
            BraceStyle::NextLine => {
                writer.write_line(&header)?;
                writer.write_line("{")?;
            }
        }
        writer.indent();
        trace!(header = %header, depth = writer.depth(), "open block");

        let slot = self.current_mut()?;
        debug_assert!(slot.is_none(), "region must be settled before opening");
        *slot = Some(PendingBlock {
            header,
            suffix: suffix.to_string(),
        });
        Ok(())
    }

    /// Take the current pending block and start a region for its body.
    pub(crate) fn enter(&mut self) -> Result<PendingBlock> {
        let block = self
            .current_mut()?
            .take()
            .ok_or_else(|| Error::imbalance("entering a block that was never opened"))?;
        self.regions.push(None);
        Ok(block)
    }

    /// Finish the body of `block`: settle its region, leave it and close it.
    pub(crate) fn exit<W: Write>(
        &mut self,
        writer: &mut Writer<W>,
        block: PendingBlock,
    ) -> Result<()> {
        self.settle(writer)?;
        self.leave(&block)?;
        close(writer, &block)
    }

    /// Leave the region of `block` without writing anything.
    pub(crate) fn leave(&mut self, block: &PendingBlock) -> Result<()> {
        if self.regions.len() == 1 {
            return Err(Error::imbalance(format!(
                "leaving '{}' at the top level",
                block.header
            )));
        }
        self.regions.pop();
        Ok(())
    }

    /// Close the current region's pending block, failing when there is none.
    pub(crate) fn close_pending<W: Write>(&mut self, writer: &mut Writer<W>) -> Result<()> {
        let block = self
            .current_mut()?
            .take()
            .ok_or_else(|| Error::imbalance("closing a block with none pending"))?;
        close(writer, &block)
    }

    fn current_mut(&mut self) -> Result<&mut Option<PendingBlock>> {
        self.regions
            .last_mut()
            .ok_or_else(|| Error::imbalance("emitting outside of any region"))
    }
}

fn close<W: Write>(writer: &mut Writer<W>, block: &PendingBlock) -> Result<()> {
    writer.dedent(&format!("block '{}'", block.header))?;
    writer.write_line(&format!("}}{}", block.suffix))?;
    trace!(header = %block.header, depth = writer.depth(), "close block");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Indent;

    fn setup(style: BraceStyle) -> (BlockModel, Writer<Vec<u8>>) {
        let mut writer = Writer::new(Indent::TWO);
        writer.attach(Vec::new()).unwrap();
        (BlockModel::new(style), writer)
    }

    fn output(mut writer: Writer<Vec<u8>>) -> String {
        String::from_utf8(writer.detach().unwrap()).unwrap()
    }

    #[test]
    fn test_open_leaves_block_pending() {
        let (mut blocks, mut writer) = setup(BraceStyle::SameLine);
        blocks.open(&mut writer, "A".into(), "").unwrap();

        assert!(blocks.pending().is_some());
        assert_eq!(writer.depth(), 1);

        blocks.settle(&mut writer).unwrap();
        assert!(blocks.pending().is_none());
        assert_eq!(writer.depth(), 0);
        assert_eq!(output(writer), "A {\n}\n");
    }

    #[test]
    fn test_next_line_style() {
        let (mut blocks, mut writer) = setup(BraceStyle::NextLine);
        blocks.open(&mut writer, "get".into(), ";").unwrap();
        blocks.close_pending(&mut writer).unwrap();
        assert_eq!(output(writer), "get\n{\n};\n");
    }

    #[test]
    fn test_enter_and_exit() {
        let (mut blocks, mut writer) = setup(BraceStyle::SameLine);
        blocks.open(&mut writer, "outer".into(), "").unwrap();
        let outer = blocks.enter().unwrap();
        assert_eq!(blocks.entered(), 1);

        blocks.open(&mut writer, "inner".into(), ";").unwrap();
        blocks.exit(&mut writer, outer).unwrap();

        assert_eq!(blocks.entered(), 0);
        assert_eq!(writer.depth(), 0);
        assert_eq!(output(writer), "outer {\n  inner {\n  };\n}\n");
    }

    #[test]
    fn test_close_without_pending_fails() {
        let (mut blocks, mut writer) = setup(BraceStyle::SameLine);
        assert!(matches!(
            blocks.close_pending(&mut writer),
            Err(Error::Imbalance { .. })
        ));
    }

    #[test]
    fn test_enter_without_open_fails() {
        let (mut blocks, _writer) = setup(BraceStyle::SameLine);
        assert!(matches!(blocks.enter(), Err(Error::Imbalance { .. })));
    }

    #[test]
    fn test_leave_top_level_fails() {
        let (mut blocks, mut writer) = setup(BraceStyle::SameLine);
        blocks.open(&mut writer, "A".into(), "").unwrap();
        let block = blocks.current_mut().unwrap().take().unwrap();
        assert!(matches!(blocks.leave(&block), Err(Error::Imbalance { .. })));
    }

    #[test]
    fn test_reset() {
        let (mut blocks, mut writer) = setup(BraceStyle::SameLine);
        blocks.open(&mut writer, "A".into(), "").unwrap();
        blocks.enter().unwrap();
        blocks.reset();
        assert_eq!(blocks.entered(), 0);
        assert!(blocks.pending().is_none());
    }
}
