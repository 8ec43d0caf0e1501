use super::*;

// ===== chat completions =====

#[test]
fn parse_chat_text_and_usage() {
    let body = serde_json::json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Nurses earn ₹3,00,000." },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 18 }
    })
    .to_string();
    let (content, usage) = parse_chat_response(&body).unwrap();
    assert_eq!(content, "Nurses earn ₹3,00,000.");
    assert_eq!(usage, Usage { prompt_tokens: 120, completion_tokens: 18 });
}

#[test]
fn parse_chat_missing_choices_is_error() {
    let body = serde_json::json!({ "model": "gpt-4o-mini", "choices": [] }).to_string();
    assert!(matches!(parse_chat_response(&body), Err(LlmError::ApiParse(_))));
}

#[test]
fn parse_chat_null_content_is_error() {
    let body = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert!(parse_chat_response(&body).is_err());
}

#[test]
fn parse_chat_missing_usage_defaults_to_zero() {
    let body = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
    })
    .to_string();
    let (_, usage) = parse_chat_response(&body).unwrap();
    assert_eq!(usage, Usage::default());
}

// ===== embeddings =====

#[test]
fn parse_embeddings_sorted_by_index() {
    let body = serde_json::json!({
        "data": [
            { "index": 1, "embedding": [0.4, 0.5] },
            { "index": 0, "embedding": [0.1, 0.2] }
        ],
        "usage": { "prompt_tokens": 12 }
    })
    .to_string();
    let (vectors, usage) = parse_embeddings_response(&body).unwrap();
    assert_eq!(vectors, vec![vec![0.1, 0.2], vec![0.4, 0.5]]);
    assert_eq!(usage.prompt_tokens, 12);
    assert_eq!(usage.completion_tokens, 0);
}

#[test]
fn parse_embeddings_missing_data_is_error() {
    let body = serde_json::json!({ "object": "list" }).to_string();
    assert!(matches!(parse_embeddings_response(&body), Err(LlmError::ApiParse(_))));
}

#[test]
fn parse_embeddings_entry_without_vector_is_error() {
    let body = serde_json::json!({ "data": [{ "index": 0 }] }).to_string();
    assert!(parse_embeddings_response(&body).is_err());
}

// ===== message constructors =====

#[test]
fn chat_message_roles_serialize_lowercase() {
    let messages = [
        ChatMessage::system("s"),
        ChatMessage::user("u"),
        ChatMessage::assistant("a"),
    ];
    let json = serde_json::to_value(messages).unwrap();
    assert_eq!(json[0]["role"], "system");
    assert_eq!(json[1]["role"], "user");
    assert_eq!(json[2]["role"], "assistant");
}
