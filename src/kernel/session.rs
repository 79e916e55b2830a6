use super::intent::types::Intent;
use super::rng::{ReplyRng, SineRng};

/// Per-conversation memory. Owned by exactly one `Conversation`; never shared.
///
/// The generator lives here too, so two conversations never advance each
/// other's reply cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState<R = SineRng> {
    pub last_intent: Option<Intent>,
    pub last_normalized_utterance: Option<String>,
    pub repetition_count: u32,
    pub rng: R,
}

/// Repeat count at which detection is bypassed (third identical utterance in a row).
pub const REPETITION_LIMIT: u32 = 2;

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ReplyRng> SessionState<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            last_intent: None,
            last_normalized_utterance: None,
            repetition_count: 0,
            rng,
        }
    }

    pub fn rng_cursor(&self) -> u64 {
        self.rng.cursor()
    }

    /// Records `normalized` as the latest utterance and reports whether it
    /// completes a run long enough to short-circuit detection.
    pub fn observe_utterance(&mut self, normalized: &str) -> bool {
        if self.last_normalized_utterance.as_deref() == Some(normalized) {
            self.repetition_count += 1;
        } else {
            self.repetition_count = 0;
        }
        self.last_normalized_utterance = Some(normalized.to_string());

        self.repetition_count >= REPETITION_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_identical_utterance_trips() {
        let mut state = SessionState::new();
        assert!(!state.observe_utterance("hi"));
        assert!(!state.observe_utterance("hi"));
        assert!(state.observe_utterance("hi"));
        assert!(state.observe_utterance("hi"));
        assert_eq!(state.repetition_count, 3);
    }

    #[test]
    fn different_utterance_resets() {
        let mut state = SessionState::new();
        state.observe_utterance("hi");
        state.observe_utterance("hi");
        assert!(!state.observe_utterance("bye"));
        assert_eq!(state.repetition_count, 0);
        assert_eq!(state.last_normalized_utterance.as_deref(), Some("bye"));
    }

    #[test]
    fn fresh_state_starts_cursor_at_one() {
        let state = SessionState::new();
        assert_eq!(state.rng_cursor(), 1);
        assert_eq!(state.last_intent, None);
    }
}
