//! Dominant-language and base-span inference for composite subtokens
//!
//! A subtoken covering one to three segments is resolved by looking at
//! which of its segments are words, i.e. letter runs in an identified
//! script. Anything wider, and three words in a row, stay undetermined.

use crate::domain::types::{BoundaryState, Detection, Span};

/// Widest subtoken, in segments, the detector resolves
pub const MAX_SEGMENTS: usize = 3;

/// Infer language and base for a subtoken
///
/// `offsets` holds the segment edges: `offsets[0]` is the subtoken's
/// absolute left edge and `offsets[i + 1]` is the end of segment `i`.
/// `segments` holds the state of each segment. Base spans are returned
/// relative to `offsets[0]`.
pub fn detect(offsets: &[usize], segments: &[BoundaryState]) -> Detection {
    let count = segments.len();
    if count == 0 || count > MAX_SEGMENTS || offsets.len() <= count {
        return Detection::UNDETERMINED;
    }

    let left = offsets[0];
    // Span of segments first..=last, relative to the subtoken
    let span = |first: usize, last: usize| Span::new(offsets[first] - left, offsets[last + 1] - left);
    let language = |index: usize| segments[index].language;

    match segments {
        [a] if a.is_word() => Detection::new(a.language, span(0, 0)),
        [_] => Detection::UNDETERMINED,

        [a, b] => match (a.is_word(), b.is_word()) {
            (true, true) => Detection::new(language(1), span(0, 1)),
            (true, false) => Detection::new(language(0), span(0, 0)),
            (false, true) => Detection::new(language(1), span(1, 1)),
            (false, false) => Detection::UNDETERMINED,
        },

        [a, b, c] => match (a.is_word(), b.is_word(), c.is_word()) {
            // Three consecutive words cannot be resolved
            (true, true, true) => Detection::UNDETERMINED,
            (true, true, false) => Detection::new(language(1), span(0, 1)),
            (true, false, true) => {
                if language(0) == language(2) {
                    Detection::new(language(0), span(0, 2))
                } else {
                    Detection::new(language(2), span(2, 2))
                }
            }
            (false, true, true) => Detection::new(language(2), span(1, 2)),
            (true, false, false) => Detection::new(language(0), span(0, 0)),
            (false, true, false) => Detection::new(language(1), span(1, 1)),
            (false, false, true) => Detection::new(language(2), span(2, 2)),
            (false, false, false) => Detection::UNDETERMINED,
        },

        _ => Detection::UNDETERMINED,
    }
}

/// Stateless detector handle
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// See [`detect`]
    pub fn detect(&self, offsets: &[usize], segments: &[BoundaryState]) -> Detection {
        detect(offsets, segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RuneClass;

    const LATIN: usize = 0;
    const CYRILLIC: usize = 1;

    fn word(language: usize) -> BoundaryState {
        BoundaryState::letter(Some(language))
    }

    fn digits() -> BoundaryState {
        BoundaryState::of_class(RuneClass::Digit)
    }

    fn dots() -> BoundaryState {
        BoundaryState::of_class(RuneClass::Punctuation)
    }

    // Segments of widths 2, 3, 4 starting at absolute offset 10
    const OFFSETS: [usize; 4] = [10, 12, 15, 19];

    fn run(segments: &[BoundaryState]) -> Detection {
        detect(&OFFSETS[..=segments.len()], segments)
    }

    fn found(language: usize, start: usize, end: usize) -> Detection {
        Detection::new(Some(language), Span::new(start, end))
    }

    #[test]
    fn test_one_segment() {
        assert_eq!(run(&[word(LATIN)]), found(LATIN, 0, 2));
        assert_eq!(run(&[digits()]), Detection::UNDETERMINED);
    }

    #[test]
    fn test_two_segments() {
        assert_eq!(run(&[word(LATIN), word(CYRILLIC)]), found(CYRILLIC, 0, 5));
        assert_eq!(run(&[word(LATIN), digits()]), found(LATIN, 0, 2));
        assert_eq!(run(&[digits(), word(CYRILLIC)]), found(CYRILLIC, 2, 5));
        assert_eq!(run(&[digits(), dots()]), Detection::UNDETERMINED);
    }

    #[test]
    fn test_three_segments() {
        let (l, c, n) = (word(LATIN), word(CYRILLIC), dots());

        assert_eq!(run(&[l, c, l]), Detection::UNDETERMINED);
        assert_eq!(run(&[l, c, n]), found(CYRILLIC, 0, 5));
        assert_eq!(run(&[n, l, c]), found(CYRILLIC, 2, 9));
        assert_eq!(run(&[l, n, n]), found(LATIN, 0, 2));
        assert_eq!(run(&[n, c, n]), found(CYRILLIC, 2, 5));
        assert_eq!(run(&[n, n, c]), found(CYRILLIC, 5, 9));
        assert_eq!(run(&[n, n, n]), Detection::UNDETERMINED);
    }

    #[test]
    fn test_word_punct_word_same_language() {
        let detection = run(&[word(LATIN), dots(), word(LATIN)]);
        assert_eq!(detection, found(LATIN, 0, 9));
    }

    #[test]
    fn test_word_punct_word_mixed_language() {
        let detection = run(&[word(LATIN), dots(), word(CYRILLIC)]);
        assert_eq!(detection, found(CYRILLIC, 5, 9));
    }

    #[test]
    fn test_every_flag_combination_has_one_outcome() {
        let choices = [word(LATIN), digits()];
        for count in 1..=MAX_SEGMENTS {
            let combinations = 1 << count;
            let mut seen = 0;
            for mask in 0..combinations {
                let segments: Vec<_> = (0..count)
                    .map(|bit| choices[(mask >> bit) & 1])
                    .collect();
                let detection = run(&segments);
                if let Some(language) = detection.language {
                    assert_eq!(language, LATIN);
                    assert!(!detection.base.is_empty());
                    assert!(detection.base.end <= OFFSETS[count] - OFFSETS[0]);
                } else {
                    assert_eq!(detection.base, Span::default());
                }
                seen += 1;
            }
            assert_eq!(seen, combinations);
        }
    }

    #[test]
    fn test_unidentified_letters_are_not_words() {
        let han = BoundaryState::letter(None);
        assert_eq!(run(&[han]), Detection::UNDETERMINED);
        assert_eq!(run(&[han, word(CYRILLIC)]), found(CYRILLIC, 2, 5));
    }

    #[test]
    fn test_unsupported_segment_counts() {
        assert_eq!(detect(&[0], &[]), Detection::UNDETERMINED);

        let four = [word(LATIN), dots(), word(LATIN), dots()];
        assert_eq!(detect(&[0, 1, 2, 3, 4], &four), Detection::UNDETERMINED);
    }

    #[test]
    fn test_missing_offsets() {
        assert_eq!(detect(&[0], &[word(LATIN)]), Detection::UNDETERMINED);
    }

    #[test]
    fn test_detector_handle() {
        let detector = LanguageDetector;
        assert_eq!(
            detector.detect(&[3, 8], &[word(LATIN)]),
            found(LATIN, 0, 5)
        );
    }
}
