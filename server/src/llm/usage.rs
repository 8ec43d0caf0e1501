//! Process-wide token-usage accounting.
//!
//! Counters accumulate from API-reported `usage` blocks. The summary
//! endpoint reports the delta since its previous call, so a UI polling it
//! sees per-interval consumption rather than lifetime totals.

#[cfg(test)]
#[path = "usage_test.rs"]
mod usage_test;

use std::sync::atomic::{AtomicU64, Ordering};

use super::types::Usage;

#[derive(Debug, Default)]
pub struct UsageMeter {
    prompt_tokens: AtomicU64,
    completion_tokens: AtomicU64,
    requests: AtomicU64,
    reported_prompt_tokens: AtomicU64,
    reported_completion_tokens: AtomicU64,
    reported_requests: AtomicU64,
}

impl UsageMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful request's token counts.
    pub fn record(&self, usage: Usage) {
        self.prompt_tokens.fetch_add(usage.prompt_tokens, Ordering::Relaxed);
        self.completion_tokens.fetch_add(usage.completion_tokens, Ordering::Relaxed);
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Render the consumption since the previous `summary` call and advance
    /// the reporting baseline.
    pub fn summary(&self) -> String {
        let prompt = delta(&self.prompt_tokens, &self.reported_prompt_tokens);
        let completion = delta(&self.completion_tokens, &self.reported_completion_tokens);
        let requests = delta(&self.requests, &self.reported_requests);
        format!(
            "Tokens Used: {}\n\tPrompt Tokens: {prompt}\n\tCompletion Tokens: {completion}\nSuccessful Requests: {requests}\n",
            prompt + completion
        )
    }
}

/// Advance `reported` to the current counter value and return the difference.
fn delta(current: &AtomicU64, reported: &AtomicU64) -> u64 {
    let now = current.load(Ordering::Relaxed);
    let before = reported.swap(now, Ordering::Relaxed);
    now.saturating_sub(before)
}
