//! Character classification into rune classes and registry languages

use crate::domain::script::LanguageRegistry;
use crate::domain::types::{BoundaryState, RuneClass};
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Unicode general category patterns, compiled once per process
struct Categories {
    letter: Regex,
    digit: Regex,
    punctuation: Regex,
}

static CATEGORIES: OnceLock<Categories> = OnceLock::new();

fn categories() -> &'static Categories {
    CATEGORIES.get_or_init(|| Categories {
        letter: Regex::new(r"\A\p{L}\z").expect("letter category pattern is valid"),
        digit: Regex::new(r"\A\p{Nd}\z").expect("digit category pattern is valid"),
        punctuation: Regex::new(r"\A\p{P}\z").expect("punctuation category pattern is valid"),
    })
}

/// Classify a character: letter, else digit, else punctuation, else other
pub fn classify(ch: char) -> RuneClass {
    if ch.is_ascii_alphabetic() {
        return RuneClass::Letter;
    }
    if ch.is_ascii_digit() {
        return RuneClass::Digit;
    }

    let mut buf = [0u8; 4];
    let encoded: &str = ch.encode_utf8(&mut buf);
    let categories = categories();

    if !ch.is_ascii() && categories.letter.is_match(encoded) {
        RuneClass::Letter
    } else if !ch.is_ascii() && categories.digit.is_match(encoded) {
        RuneClass::Digit
    } else if categories.punctuation.is_match(encoded) {
        RuneClass::Punctuation
    } else {
        RuneClass::Other
    }
}

/// Classifier pairing the rune classes with a language registry
#[derive(Debug, Clone)]
pub struct RuneClassifier {
    registry: Arc<LanguageRegistry>,
}

impl RuneClassifier {
    /// Create a classifier over a shared registry
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self { registry }
    }

    /// Classify a character
    pub fn classify(&self, ch: char) -> RuneClass {
        classify(ch)
    }

    /// Registry index of the first script containing `ch`
    ///
    /// Only meaningful for letters.
    pub fn language_index(&self, ch: char) -> Option<usize> {
        self.registry.index_of(ch)
    }

    /// Boundary state a single character would open
    pub fn state_of(&self, ch: char) -> BoundaryState {
        match self.classify(ch) {
            RuneClass::Letter => BoundaryState::letter(self.language_index(ch)),
            class => BoundaryState::of_class(class),
        }
    }

    /// The registry backing this classifier
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }
}
