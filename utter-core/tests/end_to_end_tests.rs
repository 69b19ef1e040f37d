//! End-to-end tests for the complete segmentation pipeline

use utter_core::{CoreError, Segmenter, SymbolConfig};

fn segment(text: &str, max_size: usize) -> Vec<String> {
    Segmenter::new(max_size).unwrap().segment(text).unwrap()
}

#[test]
fn test_tone_marks_pipeline() {
    let text = "Hello! How are you? I am fine.";
    assert_eq!(segment(text, 100), vec![text]);
    assert_eq!(segment(text, 20), vec!["Hello!", "How are you?", "I am fine."]);
    assert_eq!(
        segment(text, 10),
        vec!["Hello!", "How are", "you?", "I am fine."]
    );
}

#[test]
fn test_abbreviation_and_time_pipeline() {
    let text = "Dr. Smith arrived at 10:01. He said: hello, world.";
    assert_eq!(
        segment(text, 100),
        vec!["Dr Smith arrived at 10:01. He said: hello, world."]
    );
    assert_eq!(
        segment(text, 20),
        vec!["Dr Smith arrived at", "10:01", "He said", "hello", "world."]
    );
    assert_eq!(
        segment(text, 10),
        vec!["Dr Smith", "arrived at", "10:01", "He said", "hello", "world."]
    );
}

#[test]
fn test_glued_tone_marks_pipeline() {
    let text = "Is this thing on?Yes!It is.";
    assert_eq!(segment(text, 100), vec!["Is this thing on? Yes! It is."]);
    assert_eq!(
        segment(text, 20),
        vec!["Is this thing on?", "Yes!", "It is."]
    );
    assert_eq!(
        segment(text, 10),
        vec!["Is this", "thing on?", "Yes!", "It is."]
    );
}

#[test]
fn test_unpunctuated_run_packed_at_spaces() {
    let text = "The quick brown fox jumps over the lazy dog and keeps on running far away.";
    assert_eq!(
        segment(text, 20),
        vec![
            "The quick brown fox",
            "jumps over the lazy",
            "dog and keeps on",
            "running far away."
        ]
    );
    assert_eq!(
        segment(text, 10),
        vec![
            "The quick",
            "brown fox",
            "jumps over",
            "the lazy",
            "dog and",
            "keeps on",
            "running",
            "far away."
        ]
    );
}

#[test]
fn test_hyphen_and_substitution_pipeline() {
    let text = "Hyphen-\nated words, M. Dupont. Yes...";
    assert_eq!(
        segment(text, 100),
        vec!["Hyphenated words, Monsieur Dupont. Yes..."]
    );
    assert_eq!(
        segment(text, 20),
        vec!["Hyphenated words", "Monsieur Dupont", "Yes..."]
    );
    assert_eq!(
        segment(text, 10),
        vec!["Hyphenated", "words", "Monsieur", "Dupont", "Yes..."]
    );
}

#[test]
fn test_cjk_text_counts_characters() {
    let text = "我们好。你好，世界！";
    for max_size in [100, 20, 10] {
        assert_eq!(segment(text, max_size), vec![text]);
    }
    assert_eq!(segment(text, 5), vec!["我们好", "你好", "世界！"]);
}

#[test]
fn test_brackets_and_inverted_marks() {
    let text = "Mr. Smith, Jr. met Prof. Xavier (at St. Mary) ¿Qué? Sí.";
    assert_eq!(
        segment(text, 20),
        vec!["Mr Smith", "Jr met Prof Xavier ", "at St Mary", "Qué?", "Sí."]
    );
    assert_eq!(
        segment(text, 10),
        vec![
            "Mr Smith",
            "Jr met",
            "Prof",
            "Xavier ",
            "at St Mary",
            "Qué?",
            "Sí."
        ]
    );
}

#[test]
fn test_every_token_within_limit() {
    let text = "Supercalifragilisticexpialidocious is long. So is pneumonoultramicroscopicsilicovolcanoconiosis!";
    for max_size in [5, 8, 13, 40] {
        for token in segment(text, max_size) {
            assert!(
                token.chars().count() <= max_size,
                "token {token:?} exceeds {max_size}"
            );
        }
    }
}

#[test]
fn test_empty_and_noise_input() {
    let segmenter = Segmenter::new(100).unwrap();
    assert_eq!(segmenter.segment("   "), Err(CoreError::EmptyInput));
    assert_eq!(segmenter.segment("…!?").unwrap(), Vec::<String>::new());
}

#[test]
fn test_custom_symbol_set() {
    let symbols = SymbolConfig::from_toml_str(
        r#"
        [metadata]
        name = "semicolons"

        [punctuation]
        all = ";"

        [substitutions]
        pairs = [["w/", "with"]]
        "#,
    )
    .unwrap();
    let segmenter = Segmenter::builder()
        .max_size(12)
        .symbols(symbols)
        .build()
        .unwrap();

    assert_eq!(
        segmenter.segment("tea w/ milk; coffee. black").unwrap(),
        vec!["tea with", "milk", "coffee.", "black"]
    );
}
