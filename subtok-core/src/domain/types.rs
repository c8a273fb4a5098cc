//! Core value types shared by the subtoken pipeline

use serde::Serialize;
use std::collections::BTreeMap;

/// Coarse character class used for boundary detection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuneClass {
    /// Unicode letter (general category L)
    Letter,
    /// Decimal digit (general category Nd)
    Digit,
    /// Punctuation (general category P)
    Punctuation,
    /// Anything else: symbols, marks, control characters
    Other,
    /// Reset sentinel, never produced for a real character
    #[default]
    Undefined,
}

/// Class and language of a run of characters
///
/// `language` is only ever `Some` for letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundaryState {
    /// Character class of the run
    pub class: RuneClass,
    /// Registry index of the run's script, if identified
    pub language: Option<usize>,
}

impl BoundaryState {
    /// The reset state `(Undefined, None)`
    pub const UNDEFINED: Self = Self {
        class: RuneClass::Undefined,
        language: None,
    };

    /// Create a state for a letter in the given script
    pub fn letter(language: Option<usize>) -> Self {
        Self {
            class: RuneClass::Letter,
            language,
        }
    }

    /// Create a state for a non-letter class
    pub fn of_class(class: RuneClass) -> Self {
        Self {
            class,
            language: None,
        }
    }

    /// Check if this state has been set by a real character
    pub fn is_defined(&self) -> bool {
        self.class != RuneClass::Undefined
    }

    /// Check if this is a letter run in an identified script
    pub fn is_word(&self) -> bool {
        self.class == RuneClass::Letter && self.language.is_some()
    }
}

/// Byte range relative to the start of a subtoken
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a span from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if the span is the undetermined `(0, 0)` span
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Dominant language and base span inferred for a subtoken
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Detection {
    /// Registry index of the dominant language
    pub language: Option<usize>,
    /// Span of the subtoken's root word
    pub base: Span,
}

impl Detection {
    /// No language, `(0, 0)` base
    pub const UNDETERMINED: Self = Self {
        language: None,
        base: Span { start: 0, end: 0 },
    };

    /// Create a detection result
    pub fn new(language: Option<usize>, base: Span) -> Self {
        Self { language, base }
    }
}

/// Metadata attached to each generated subtoken
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtokenMetadata {
    /// Number of boundary segments between the window's left edge and the
    /// subtoken's end, minus one
    Depth(usize),
    /// Inferred dominant language and base span
    Language {
        /// Registry index of the dominant language
        language: Option<usize>,
        /// Span of the root word, relative to the subtoken
        base: Span,
    },
}

impl SubtokenMetadata {
    /// Detected language, if this is language metadata with a result
    pub fn language(&self) -> Option<usize> {
        match self {
            SubtokenMetadata::Language { language, .. } => *language,
            SubtokenMetadata::Depth(_) => None,
        }
    }

    /// Base span, if this is language metadata
    pub fn base(&self) -> Option<Span> {
        match self {
            SubtokenMetadata::Language { base, .. } => Some(*base),
            SubtokenMetadata::Depth(_) => None,
        }
    }

    /// Depth, if this is depth metadata
    pub fn depth(&self) -> Option<usize> {
        match self {
            SubtokenMetadata::Depth(depth) => Some(*depth),
            SubtokenMetadata::Language { .. } => None,
        }
    }
}

impl From<Detection> for SubtokenMetadata {
    fn from(detection: Detection) -> Self {
        SubtokenMetadata::Language {
            language: detection.language,
            base: detection.base,
        }
    }
}

/// Which metadata the generator attaches to each subtoken
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Annotation {
    /// Detected language and base span
    #[default]
    Language,
    /// Window depth
    Depth,
}

/// Subtoken text mapped to its metadata; later writes overwrite earlier ones
pub type Subtokens = BTreeMap<String, SubtokenMetadata>;
