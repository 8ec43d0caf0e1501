use super::*;

#[test]
fn default_state_is_empty_basic_mode() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.pending);
    assert_eq!(state.mode, ChatMode::BasicHybridSearch);
}

#[test]
fn history_pairs_questions_with_answers() {
    let mut state = ChatState::default();
    state.push_user("What does a nurse earn?");
    state.push_assistant("₹3,00,000 to ₹5,50,000.");
    state.push_user("And in large cities?");
    state.push_assistant("Towards the upper end.");

    let history = state.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].question, "What does a nurse earn?");
    assert_eq!(history[1].answer, "Towards the upper end.");
}

#[test]
fn history_excludes_failed_turns() {
    let mut state = ChatState::default();
    state.push_user("first question");
    state.push_failure("Failed to get a response.");
    state.push_user("second question");
    state.push_assistant("an answer");

    let history = state.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].question, "second question");
}

#[test]
fn history_excludes_unanswered_trailing_question() {
    let mut state = ChatState::default();
    state.push_user("still waiting");
    assert!(state.history().is_empty());
}

#[test]
fn assistant_without_question_is_ignored() {
    let mut state = ChatState::default();
    state.push_assistant("orphan answer");
    assert!(state.history().is_empty());
}
