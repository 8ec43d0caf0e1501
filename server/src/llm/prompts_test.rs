use super::*;

#[test]
fn answer_prompt_embeds_context_between_tags() {
    let prompt = answer_system_prompt("salary data here");
    assert!(prompt.contains("<context>\nsalary data here\n</context>"));
    assert!(!prompt.contains("{context}"));
}

#[test]
fn cypher_prompt_fills_schema_and_question() {
    let prompt = cypher_generation_prompt("JobProfile {id: String}", "Top aptitudes for a nurse?");
    assert!(prompt.contains("Schema:\nJobProfile {id: String}"));
    assert!(prompt.contains("Question: Top aptitudes for a nurse?"));
    assert!(!prompt.contains("{schema}"));
    assert!(!prompt.contains("{question}"));
}

#[test]
fn cypher_prompt_keeps_literal_braces_in_samples() {
    let prompt = cypher_generation_prompt("s", "q");
    assert!(prompt.contains(r#"{jobRole: "Retail Sales Associate"}"#));
}

#[test]
fn qa_prompt_fills_both_placeholders() {
    let prompt = qa_prompt("[role:Nurse]", "Which roles?");
    assert!(prompt.contains("Information:\n[role:Nurse]"));
    assert!(prompt.ends_with("Question: Which roles?\nHelpful Answer:"));
}

#[test]
fn condense_prompt_fills_history_and_question() {
    let prompt = condense_prompt("Human: hello\nAssistant: hi", "what about salaries?");
    assert!(prompt.contains("Chat History:\nHuman: hello\nAssistant: hi"));
    assert!(prompt.contains("Follow Up Input: what about salaries?"));
}
