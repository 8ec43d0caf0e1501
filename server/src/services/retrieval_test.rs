use super::*;

fn doc(text: &str, score: f64) -> ScoredDoc {
    ScoredDoc { text: text.to_owned(), score }
}

// ===== full-text query building =====

#[test]
fn removes_lucene_special_chars() {
    assert_eq!(remove_lucene_chars("nurse (ICU) ~shift"), "nurse  ICU   shift");
    assert_eq!(remove_lucene_chars("plain words"), "plain words");
}

#[test]
fn fuzzy_query_joins_words_with_and() {
    assert_eq!(generate_full_text_query("automotive engineer"), "automotive~2 AND engineer~2");
}

#[test]
fn fuzzy_query_single_word_has_no_and() {
    assert_eq!(generate_full_text_query("nurse"), "nurse~2");
}

#[test]
fn fuzzy_query_empty_input_is_empty() {
    assert_eq!(generate_full_text_query(""), "");
    assert_eq!(generate_full_text_query("(){}"), "");
}

// ===== row extraction =====

#[test]
fn docs_from_rows_reads_text_and_score() {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_value(serde_json::json!([
            { "text": "chunk one", "score": 0.9 },
            { "text": null, "score": 0.5 },
            { "score": 0.4 }
        ]))
        .unwrap();
    let docs = docs_from_rows(&rows);
    assert_eq!(docs, vec![doc("chunk one", 0.9)]);
}

// ===== hybrid merge =====

#[test]
fn merge_keeps_best_score_per_document() {
    let merged = merge_hybrid(
        vec![doc("a", 0.7), doc("b", 0.5)],
        vec![doc("a", 0.9), doc("c", 0.6)],
        10,
    );
    assert_eq!(merged, vec![doc("a", 0.9), doc("c", 0.6), doc("b", 0.5)]);
}

#[test]
fn merge_truncates_to_k() {
    let merged = merge_hybrid(
        vec![doc("a", 0.9), doc("b", 0.8)],
        vec![doc("c", 0.7)],
        2,
    );
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].text, "a");
    assert_eq!(merged[1].text, "b");
}

#[test]
fn merge_of_empty_lists_is_empty() {
    assert!(merge_hybrid(Vec::new(), Vec::new(), 4).is_empty());
}

// ===== formatting =====

#[test]
fn format_docs_joins_with_blank_line() {
    let formatted = format_docs(&[doc("first", 1.0), doc("second", 0.5)]);
    assert_eq!(formatted, "first\n\nsecond");
}

#[test]
fn format_docs_empty_is_empty_string() {
    assert_eq!(format_docs(&[]), "");
}
