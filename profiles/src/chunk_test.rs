use super::*;

fn numbered_words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn short_text_yields_single_chunk() {
    let chunks = split_into_chunks("one two three", 500, 50);
    assert_eq!(chunks, vec!["one two three".to_owned()]);
}

#[test]
fn empty_text_yields_no_chunks() {
    assert!(split_into_chunks("", 500, 50).is_empty());
    assert!(split_into_chunks("   \n\t ", 500, 50).is_empty());
}

#[test]
fn windows_advance_by_size_minus_overlap() {
    let text = numbered_words(10);
    let chunks = split_into_chunks(&text, 4, 1);
    assert_eq!(chunks[0], "w0 w1 w2 w3");
    assert_eq!(chunks[1], "w3 w4 w5 w6");
    assert_eq!(chunks[2], "w6 w7 w8 w9");
    assert_eq!(chunks.len(), 3);
}

#[test]
fn final_window_may_be_short() {
    let text = numbered_words(5);
    let chunks = split_into_chunks(&text, 4, 1);
    assert_eq!(chunks, vec!["w0 w1 w2 w3".to_owned(), "w3 w4".to_owned()]);
}

#[test]
fn overlap_at_least_size_still_makes_progress() {
    let text = numbered_words(6);
    let chunks = split_into_chunks(&text, 2, 5);
    // Step clamps to one word; every window still ends.
    assert_eq!(chunks.len(), 5);
    assert_eq!(chunks[0], "w0 w1");
    assert_eq!(chunks[4], "w4 w5");
}

#[test]
fn zero_size_yields_no_chunks() {
    assert!(split_into_chunks("a b c", 0, 0).is_empty());
}

#[test]
fn chunk_text_assigns_stable_ids() {
    let text = numbered_words(600);
    let chunks = chunk_text("abc123", &text);
    assert!(chunks.len() > 1);
    assert_eq!(chunks[0].id, "abc123-0");
    assert_eq!(chunks[1].id, "abc123-1");

    let again = chunk_text("abc123", &text);
    assert_eq!(chunks, again);
}

#[test]
fn default_windows_overlap_by_fifty_words() {
    let text = numbered_words(CHUNK_SIZE_WORDS + 100);
    let chunks = chunk_text("a", &text);
    assert_eq!(chunks.len(), 2);
    let first: Vec<&str> = chunks[0].text.split(' ').collect();
    let second: Vec<&str> = chunks[1].text.split(' ').collect();
    assert_eq!(first.len(), CHUNK_SIZE_WORDS);
    assert_eq!(&first[first.len() - CHUNK_OVERLAP_WORDS..], &second[..CHUNK_OVERLAP_WORDS]);
}
