//! JSON output formatter

use super::{OutputFormatter, SubtokenRecord};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use subtok_core::{Span, SubtokenMetadata};

/// JSON formatter - outputs subtokens as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    subtokens: Vec<SubtokenData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct SubtokenData {
    /// The subtoken text
    pub text: String,
    /// Input the subtoken came from
    pub source: String,
    #[serde(flatten)]
    pub annotation: AnnotationData,
}

/// Annotation fields; an undetermined language serializes as `null`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnnotationData {
    Language { language: Option<String>, base: Span },
    Depth { depth: usize },
}

impl From<&SubtokenRecord<'_>> for SubtokenData {
    fn from(record: &SubtokenRecord<'_>) -> Self {
        let annotation = match record.metadata {
            SubtokenMetadata::Depth(depth) => AnnotationData::Depth { depth },
            SubtokenMetadata::Language { base, .. } => AnnotationData::Language {
                language: record.language_name.map(str::to_string),
                base,
            },
        };
        Self {
            text: record.text.to_string(),
            source: record.source.to_string(),
            annotation,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            subtokens: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_subtoken(&mut self, record: &SubtokenRecord<'_>) -> Result<()> {
        self.subtokens.push(record.into());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.subtokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::*;
    use serde_json::{json, Value};

    fn render(records: &[SubtokenRecord<'_>]) -> Value {
        let mut formatter = JsonFormatter::new(Vec::new());
        for record in records {
            formatter.format_subtoken(record).unwrap();
        }
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_language_records() {
        let registry = registry();
        let value = render(&[
            SubtokenRecord::new("123", "<text>", language(None, 0, 0), &registry),
            SubtokenRecord::new("hello123", "<text>", language(Some(0), 0, 5), &registry),
        ]);

        assert_eq!(
            value,
            json!([
                {"text": "123", "source": "<text>", "language": null, "base": {"start": 0, "end": 0}},
                {"text": "hello123", "source": "<text>", "language": "Latin", "base": {"start": 0, "end": 5}}
            ])
        );
    }

    #[test]
    fn test_depth_records() {
        let registry = registry();
        let value = render(&[SubtokenRecord::new(
            "a.b",
            "notes.txt",
            SubtokenMetadata::Depth(2),
            &registry,
        )]);
        assert_eq!(
            value,
            json!([{"text": "a.b", "source": "notes.txt", "depth": 2}])
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        assert_eq!(render(&[]), json!([]));
    }
}
