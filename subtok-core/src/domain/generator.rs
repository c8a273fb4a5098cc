//! Window-bounded subtoken generation for a single word
//!
//! The scan pushes every boundary offset of the word into a circular window
//! of `depth + 1` offsets, and the state of each closed segment into a
//! parallel window of `depth` segments. Each time the offset window is
//! full, every prefix of the window is a subtoken. Once the word ends, the
//! last segment is closed and the window drains from the left, emitting
//! the shorter windows at the tail of the word.

use crate::circular_window::CircularWindow;
use crate::domain::boundary::BoundaryTracker;
use crate::domain::classifier::RuneClassifier;
use crate::domain::depth_policy::DepthPolicy;
use crate::domain::detector::{LanguageDetector, MAX_SEGMENTS};
use crate::domain::types::{Annotation, BoundaryState, Detection, SubtokenMetadata, Subtokens};

/// Drives boundary tracking and windowing over one word at a time
#[derive(Debug, Clone, Copy)]
pub struct SubtokenGenerator<'a> {
    classifier: &'a RuneClassifier,
    policy: &'a DepthPolicy,
    annotation: Annotation,
}

impl<'a> SubtokenGenerator<'a> {
    /// Create a generator over shared, read-only configuration
    pub fn new(
        classifier: &'a RuneClassifier,
        policy: &'a DepthPolicy,
        annotation: Annotation,
    ) -> Self {
        Self {
            classifier,
            policy,
            annotation,
        }
    }

    /// Generate the subtokens of `word` into a fresh map
    pub fn generate(&self, word: &str) -> Subtokens {
        let mut subtokens = Subtokens::new();
        self.generate_into(word, &mut subtokens);
        subtokens
    }

    /// Generate the subtokens of `word`, overwriting existing keys in `out`
    pub fn generate_into(&self, word: &str, out: &mut Subtokens) {
        if word.is_empty() {
            return;
        }

        // A word of n chars has at most n segments, so a wider window never
        // fills and only costs memory
        let chars = word.chars().count();
        let depth = self.policy.depth(chars).min(chars).max(1);
        log::trace!("word {word:?}: depth {depth}");

        let mut scan = WordScan::new(depth);
        for (offset, ch) in word.char_indices() {
            if scan.tracker.push_char(ch, self.classifier) {
                scan.offsets.push(offset);
                let closed = scan.tracker.previous();
                if closed.is_defined() {
                    scan.segments.push(closed);
                }
                if scan.offsets.is_full() {
                    scan.emit(word, self.annotation, out);
                }
            }
        }

        // Close the last open segment at the end of the word
        scan.offsets.push(word.len());
        scan.segments.push(scan.tracker.current());

        while !scan.offsets.is_empty() {
            scan.emit(word, self.annotation, out);
            scan.offsets.pop();
            scan.segments.pop();
        }
    }
}

/// Per-word scan state; discarded after the word is done
struct WordScan {
    tracker: BoundaryTracker,
    detector: LanguageDetector,
    offsets: CircularWindow<usize>,
    segments: CircularWindow<BoundaryState>,
    // Reused linear copies of the windows for the detector
    offset_scratch: Vec<usize>,
    segment_scratch: Vec<BoundaryState>,
}

impl WordScan {
    fn new(depth: usize) -> Self {
        Self {
            tracker: BoundaryTracker::new(),
            detector: LanguageDetector,
            offsets: CircularWindow::new(depth + 1),
            segments: CircularWindow::new(depth),
            offset_scratch: Vec::with_capacity(MAX_SEGMENTS + 1),
            segment_scratch: Vec::with_capacity(MAX_SEGMENTS),
        }
    }

    /// Record every subtoken starting at the window's left edge
    fn emit(&mut self, word: &str, annotation: Annotation, out: &mut Subtokens) {
        let Some((left, rest)) = self.offsets.extract() else {
            return;
        };

        if annotation == Annotation::Language {
            self.offset_scratch.clear();
            self.offset_scratch
                .extend(self.offsets.iter().take(MAX_SEGMENTS + 1));
            self.segment_scratch.clear();
            self.segment_scratch
                .extend(self.segments.iter().take(MAX_SEGMENTS));
        }

        for (index, right) in rest.enumerate() {
            let metadata = match annotation {
                Annotation::Depth => SubtokenMetadata::Depth(index),
                Annotation::Language if index < MAX_SEGMENTS => {
                    self.detector
                        .detect(
                            &self.offset_scratch[..=index + 1],
                            &self.segment_scratch[..=index],
                        )
                        .into()
                }
                Annotation::Language => Detection::UNDETERMINED.into(),
            };
            out.insert(word[left..right].to_string(), metadata);
        }
    }
}
