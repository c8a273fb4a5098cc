//! Property tests for the subtoken pipeline

use proptest::prelude::*;
use subtok_core::{Annotation, Config, DepthPolicy, Tokenizer};

fn tokenizer(policy: DepthPolicy) -> Tokenizer {
    let config = Config::builder()
        .script("Latin")
        .unwrap()
        .script("Cyrillic")
        .unwrap()
        .depth_policy(policy)
        .build()
        .unwrap();
    Tokenizer::with_config(config)
}

/// Words mixing scripts, digits, punctuation and symbols
fn word() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('z'),
            Just('а'),
            Just('ж'),
            Just('7'),
            Just('.'),
            Just('-'),
            Just('☭'),
            Just('你'),
        ],
        1..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_unbounded_window_yields_whole_word(w in word()) {
        let result = tokenizer(DepthPolicy::Unbounded).tokenize(&w);
        prop_assert!(result.contains_key(&w));
    }

    #[test]
    fn prop_subtokens_are_substrings(w in word()) {
        let result = tokenizer(DepthPolicy::default()).tokenize(&w);
        for key in result.keys() {
            prop_assert!(!key.is_empty());
            prop_assert!(w.contains(key.as_str()));
        }
    }

    #[test]
    fn prop_depth_zero_subtokens_are_homogeneous(w in word()) {
        let config = Config::builder()
            .script("Latin")
            .unwrap()
            .script("Cyrillic")
            .unwrap()
            .annotation(Annotation::Depth)
            .build()
            .unwrap();
        let tokenizer = Tokenizer::with_config(config);
        for (key, meta) in tokenizer.tokenize(&w) {
            if meta.depth() == Some(0) {
                // A single segment never contains a boundary of its own
                let inner = tokenizer.tokenize(&key);
                prop_assert_eq!(inner.len(), 1);
            }
        }
    }

    #[test]
    fn prop_whitespace_partitions_words(a in word(), b in word()) {
        let tokenizer = tokenizer(DepthPolicy::default());
        let joined = tokenizer.tokenize(&format!("{a} {b}"));
        let mut separate = tokenizer.tokenize(&a);
        separate.extend(tokenizer.tokenize(&b));
        prop_assert_eq!(joined, separate);
    }

    #[test]
    fn prop_deterministic(text in proptest::collection::vec(word(), 0..6)) {
        let text = text.join(" ");
        let tokenizer = tokenizer(DepthPolicy::default());
        prop_assert_eq!(tokenizer.tokenize(&text), tokenizer.tokenize(&text));
    }

    #[test]
    fn prop_interpolated_depth_is_non_increasing(length in 0usize..200) {
        let policy = DepthPolicy::interpolated(20, 100, 120, 10).unwrap();
        prop_assert!(policy.depth(length + 1) <= policy.depth(length));
        prop_assert!((10..=100).contains(&policy.depth(length)));
    }
}
