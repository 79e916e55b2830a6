use std::collections::VecDeque;

use super::event::TurnEvent;
use super::metrics::{compute_summary, SessionSummary};

const MAX_EVENTS: usize = 10_000;

#[derive(Debug, Clone, Default)]
pub struct TurnRecorder {
    buffer: VecDeque<TurnEvent>,
}

impl TurnRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: TurnEvent) {
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    #[cfg(test)]
    pub(crate) fn events(&self) -> &VecDeque<TurnEvent> {
        &self.buffer
    }

    pub fn summary(&self) -> SessionSummary {
        compute_summary(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::intent::types::Intent;
    use crate::kernel::response::ToneBand;

    #[test]
    fn summary_counts_each_kind() {
        let mut recorder = TurnRecorder::new();
        recorder.record(TurnEvent::Answered { intent: Intent::Help, band: ToneBand::Hedged });
        recorder.record(TurnEvent::Answered { intent: Intent::Help, band: ToneBand::Confident });
        recorder.record(TurnEvent::EasterEgg { intent: Intent::Salutation });
        recorder.record(TurnEvent::BelowThreshold);
        recorder.record(TurnEvent::Repetition);

        let summary = recorder.summary();
        assert_eq!(summary.turns, 5);
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.easter_eggs, 1);
        assert_eq!(summary.hedged_replies, 1);
        assert_eq!(summary.below_threshold, 1);
        assert_eq!(summary.repetitions, 1);
        assert_eq!(summary.intents.get("help"), Some(&2));
        assert_eq!(summary.intents.get("salutation"), Some(&1));
    }

    #[test]
    fn buffer_is_bounded() {
        let mut recorder = TurnRecorder::new();
        for _ in 0..MAX_EVENTS + 5 {
            recorder.record(TurnEvent::Repetition);
        }
        assert_eq!(recorder.events().len(), MAX_EVENTS);
    }
}
