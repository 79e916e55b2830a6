use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

use super::event::TurnEvent;
use crate::kernel::response::ToneBand;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub turns: u64,
    pub answered: u64,
    pub below_threshold: u64,
    pub repetitions: u64,
    pub easter_eggs: u64,
    pub hedged_replies: u64,
    pub tentative_replies: u64,
    /// Keyed by intent label; covers answered turns and easter eggs.
    pub intents: BTreeMap<String, u64>,
}

pub fn compute_summary(events: &VecDeque<TurnEvent>) -> SessionSummary {
    let mut summary = SessionSummary::default();

    for event in events {
        summary.turns += 1;
        match event {
            TurnEvent::Answered { intent, band } => {
                summary.answered += 1;
                *summary.intents.entry(intent.label().to_string()).or_default() += 1;
                match band {
                    ToneBand::Confident => {}
                    ToneBand::Hedged => summary.hedged_replies += 1,
                    ToneBand::Tentative => summary.tentative_replies += 1,
                }
            }
            TurnEvent::EasterEgg { intent } => {
                summary.answered += 1;
                summary.easter_eggs += 1;
                *summary.intents.entry(intent.label().to_string()).or_default() += 1;
            }
            TurnEvent::BelowThreshold => summary.below_threshold += 1,
            TurnEvent::Repetition => summary.repetitions += 1,
        }
    }

    summary
}
