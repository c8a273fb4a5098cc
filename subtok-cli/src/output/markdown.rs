//! Markdown output formatter

use super::{OutputFormatter, SubtokenRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs subtokens as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    subtoken_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            subtoken_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_subtoken(&mut self, record: &SubtokenRecord<'_>) -> Result<()> {
        self.subtoken_count += 1;
        let annotation = record.annotation().replace('\t', " ");
        writeln!(
            self.writer,
            "{}. `{}` {}",
            self.subtoken_count, record.text, annotation
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total subtokens: {}*", self.subtoken_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
