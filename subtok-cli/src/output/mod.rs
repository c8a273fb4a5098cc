//! Output formatting module

use anyhow::Result;
use subtok_core::{LanguageRegistry, Span, SubtokenMetadata};

/// One subtoken ready to be written
#[derive(Debug, Clone, Copy)]
pub struct SubtokenRecord<'a> {
    /// Subtoken text
    pub text: &'a str,
    /// Input the subtoken came from
    pub source: &'a str,
    /// Generated metadata
    pub metadata: SubtokenMetadata,
    /// Registry name of the detected language
    pub language_name: Option<&'a str>,
}

impl<'a> SubtokenRecord<'a> {
    /// Build a record, resolving the language index against `registry`
    pub fn new(
        text: &'a str,
        source: &'a str,
        metadata: SubtokenMetadata,
        registry: &'a LanguageRegistry,
    ) -> Self {
        let language_name = metadata
            .language()
            .and_then(|index| registry.name(index));
        Self {
            text,
            source,
            metadata,
            language_name,
        }
    }

    /// Annotation rendered for plain-text formats
    pub fn annotation(&self) -> String {
        match self.metadata {
            SubtokenMetadata::Depth(depth) => depth.to_string(),
            SubtokenMetadata::Language { base, .. } => format!(
                "{}\t{}",
                self.language_name.unwrap_or("-"),
                format_span(base)
            ),
        }
    }
}

fn format_span(span: Span) -> String {
    format!("{}..{}", span.start, span.end)
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single subtoken
    fn format_subtoken(&mut self, record: &SubtokenRecord<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use subtok_core::LanguageRegistry;

    pub fn registry() -> LanguageRegistry {
        LanguageRegistry::from_script_names(["Latin", "Cyrillic"]).unwrap()
    }

    pub fn language(language: Option<usize>, start: usize, end: usize) -> SubtokenMetadata {
        SubtokenMetadata::Language {
            language,
            base: Span::new(start, end),
        }
    }
}
