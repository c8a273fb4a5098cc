//! Boundary tracking across the characters of one word

use crate::domain::classifier::RuneClassifier;
use crate::domain::types::BoundaryState;

/// Remembers the current and previous run state while scanning a word
///
/// A boundary occurs whenever the class or the letter language of the next
/// character differs from the current run. The tracker is a plain value:
/// each scan owns one and resets it before the first character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryTracker {
    previous: BoundaryState,
    current: BoundaryState,
}

impl BoundaryTracker {
    /// Create a tracker in the reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both states to `(Undefined, None)`
    pub fn flush(&mut self) {
        *self = Self::default();
    }

    /// Classify `ch` and feed it to the tracker
    ///
    /// Returns `true` if a boundary occurs at this character.
    pub fn push_char(&mut self, ch: char, classifier: &RuneClassifier) -> bool {
        self.push_state(classifier.state_of(ch))
    }

    /// Feed the state of the next character
    ///
    /// Non-letters never carry a language, so comparing whole states covers
    /// both a class change and a letter switching script.
    pub fn push_state(&mut self, next: BoundaryState) -> bool {
        if next == self.current {
            return false;
        }
        self.previous = self.current;
        self.current = next;
        true
    }

    /// State of the run closed by the most recent boundary
    pub fn previous(&self) -> BoundaryState {
        self.previous
    }

    /// State of the run currently open
    pub fn current(&self) -> BoundaryState {
        self.current
    }
}
