//! End-to-end tests for whitespace splitting and subtoken extraction

use std::collections::BTreeSet;
use subtok_core::{
    Annotation, Config, DepthPolicy, Span, SubtokenMetadata, Subtokens, Tokenizer,
};

const LATIN: Option<usize> = Some(0);
const CYRILLIC: Option<usize> = Some(1);

/// Latin = 0, Cyrillic = 1, interpolated (10, 10, 18, 2)
fn tokenizer() -> Tokenizer {
    let config = Config::builder()
        .script("Latin")
        .unwrap()
        .script("Cyrillic")
        .unwrap()
        .depth_policy(DepthPolicy::interpolated(10, 10, 18, 2).unwrap())
        .build()
        .unwrap();
    Tokenizer::with_config(config)
}

fn language(language: Option<usize>, start: usize, end: usize) -> SubtokenMetadata {
    SubtokenMetadata::Language {
        language,
        base: Span::new(start, end),
    }
}

fn keys(subtokens: &Subtokens) -> BTreeSet<&str> {
    subtokens.keys().map(String::as_str).collect()
}

#[test]
fn test_single_word() {
    let result = tokenizer().tokenize("hello");
    assert_eq!(result.len(), 1);
    assert_eq!(result["hello"], language(LATIN, 0, 5));
}

#[test]
fn test_token_separation() {
    let result = tokenizer().tokenize("hello world");
    assert_eq!(result.len(), 2);
    assert_eq!(result["hello"], language(LATIN, 0, 5));
    assert_eq!(result["world"], language(LATIN, 0, 5));
}

#[test]
fn test_language_then_number() {
    let result = tokenizer().tokenize("hello123");
    assert_eq!(result.len(), 3);
    assert_eq!(result["hello"], language(LATIN, 0, 5));
    assert_eq!(result["123"].language(), None);
    assert_eq!(result["hello123"], language(LATIN, 0, 5));
}

#[test]
fn test_unknown_language_then_known() {
    let result = tokenizer().tokenize("你好привет");
    assert_eq!(result.len(), 3);
    assert_eq!(result["你好"].language(), None);
    assert_eq!(result["привет"], language(CYRILLIC, 0, 12));
    // Base is the Cyrillic part, after six bytes of Han
    assert_eq!(result["你好привет"], language(CYRILLIC, 6, 18));
}

#[test]
fn test_known_language_then_unknown() {
    let result = tokenizer().tokenize("hello你好");
    assert_eq!(result["hello你好"], language(LATIN, 0, 5));
    assert_eq!(result["你好"].language(), None);
}

#[test]
fn test_known_language_then_known() {
    let result = tokenizer().tokenize("helloпривет");
    assert_eq!(result["hello"], language(LATIN, 0, 5));
    assert_eq!(result["привет"], language(CYRILLIC, 0, 12));
    assert_eq!(result["helloпривет"], language(CYRILLIC, 0, 17));
}

#[test]
fn test_similar_language_separation() {
    // Latin a, Cyrillic а, Latin a, Cyrillic а
    let result = tokenizer().tokenize("aаaа");
    assert_eq!(
        keys(&result),
        BTreeSet::from(["a", "а", "aа", "аa", "aаa", "аaа", "aаaа"])
    );
    assert_eq!(result["a"].language(), LATIN);
    assert_eq!(result["а"].language(), CYRILLIC);
    assert_eq!(result["aаaа"], language(None, 0, 0));
}

#[test]
fn test_word_punct_word() {
    let result = tokenizer().tokenize("e.g.");
    assert_eq!(result["e.g"], language(LATIN, 0, 3));

    let result = tokenizer().tokenize("hi-мир");
    assert_eq!(result["hi-мир"], language(CYRILLIC, 3, 9));
}

#[test]
fn test_depth_annotation() {
    let config = Config::builder()
        .script("Latin")
        .unwrap()
        .annotation(Annotation::Depth)
        .build()
        .unwrap();
    let result = Tokenizer::with_config(config).tokenize("abc.def");
    assert_eq!(result["abc"], SubtokenMetadata::Depth(0));
    assert_eq!(result["abc."], SubtokenMetadata::Depth(1));
    assert_eq!(result["abc.def"], SubtokenMetadata::Depth(2));
}

#[test]
fn test_repeated_subtokens_collapse_to_one_key() {
    let config = Config::builder()
        .script("Latin")
        .unwrap()
        .annotation(Annotation::Depth)
        .build()
        .unwrap();
    let tokenizer = Tokenizer::with_config(config);

    // ".", ".b" and "b" come out of both words and are stored once
    let result = tokenizer.tokenize("a.b x.b");
    assert_eq!(result.len(), 9);
    assert_eq!(result[".b"], SubtokenMetadata::Depth(1));
    assert_eq!(result["b"], SubtokenMetadata::Depth(0));
    assert_eq!(result["x.b"], SubtokenMetadata::Depth(2));
}

#[test]
fn test_deterministic_across_calls() {
    let tokenizer = tokenizer();
    let text = "hello123 мир-world 你好привет a.b.c.d";
    let first = tokenizer.tokenize(text);
    for _ in 0..3 {
        assert_eq!(tokenizer.tokenize(text), first);
    }
}

/// Key sets for class transitions in every direction
#[test]
fn test_transition_table() {
    let cases: &[(&str, &[&str])] = &[
        ("hello...", &["hello", "...", "hello..."]),
        ("hello☭", &["hello", "☭", "hello☭"]),
        ("123hello", &["123", "hello", "123hello"]),
        ("123...", &["123", "...", "123..."]),
        ("123☭", &["123", "☭", "123☭"]),
        ("...hello", &["...", "hello", "...hello"]),
        ("...123", &["...", "123", "...123"]),
        ("...☭", &["...", "☭", "...☭"]),
        ("☭hello", &["☭", "hello", "☭hello"]),
        ("☭123", &["☭", "123", "☭123"]),
        ("☭...", &["☭", "...", "☭..."]),
    ];

    let tokenizer = tokenizer();
    for (input, expected) in cases {
        let result = tokenizer.tokenize(input);
        let expected: BTreeSet<&str> = expected.iter().copied().collect();
        assert_eq!(keys(&result), expected, "wrong tokenization of {input:?}");
    }
}

#[test]
fn test_short_word_spans_every_window() {
    let result = tokenizer().tokenize("a.b.c.d");
    let expected = BTreeSet::from([
        "a", "b", "c", "d", ".", "a.", "b.", "c.", ".b", ".c", ".d", "a.b", "b.c", "c.d", ".b.",
        ".c.", "a.b.", "b.c.", ".b.c", ".c.d", "a.b.c", "b.c.d", ".b.c.", "a.b.c.", ".b.c.d",
        "a.b.c.d",
    ]);
    assert_eq!(keys(&result), expected);
}

#[test]
fn test_medium_word_is_depth_bounded() {
    // 15 characters: depth 2 + 8 * 3 / 8 = 5 segments
    let result = tokenizer().tokenize("aaa.bbb.ccc.ddd");
    let expected = BTreeSet::from([
        "aaa", "bbb", "ccc", "ddd", ".", "aaa.", "bbb.", "ccc.", ".bbb", ".ccc", ".ddd",
        "aaa.bbb", "bbb.ccc", "ccc.ddd", ".bbb.", ".ccc.", "aaa.bbb.", "bbb.ccc.", ".bbb.ccc",
        ".ccc.ddd", "aaa.bbb.ccc", "bbb.ccc.ddd", ".bbb.ccc.",
    ]);
    assert_eq!(keys(&result), expected);
}

#[test]
fn test_long_word_is_shallow() {
    // 21 characters: at least min_length, depth 2
    let result = tokenizer().tokenize("aaa...bbb...ccc...ddd");
    let expected = BTreeSet::from([
        "aaa", "bbb", "ccc", "ddd", "...", "aaa...", "bbb...", "ccc...", "...bbb", "...ccc",
        "...ddd",
    ]);
    assert_eq!(keys(&result), expected);
}

#[test]
fn test_unbounded_policy_always_reaches_whole_word() {
    let config = Config::builder()
        .script("Latin")
        .unwrap()
        .depth_policy(DepthPolicy::Unbounded)
        .build()
        .unwrap();
    let word = "aaa...bbb...ccc...ddd";
    let result = Tokenizer::with_config(config).tokenize(word);
    assert!(result.contains_key(word));
}

#[test]
fn test_multibyte_offsets_are_char_aligned() {
    let result = tokenizer().tokenize("мир→world");
    for key in result.keys() {
        assert!(!key.is_empty());
    }
    assert!(result.contains_key("мир→world"));
    assert!(result.contains_key("→"));
}
