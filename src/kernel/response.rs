//! Reply selection, confidence tone, and easter eggs.
//!
//! All three draw from the conversation's own `ReplyRng`; none of them keep
//! state of their own.

use super::intent::catalog::{
    replies_for, BOT_IDENTITY_EASTER_EGG, SALUTATION_EASTER_EGG, UNKNOWN_REPLIES,
};
use super::intent::types::Intent;
use super::rng::ReplyRng;

pub const CONFIDENT_THRESHOLD: f64 = 1.4;
pub const HEDGED_THRESHOLD: f64 = 0.9;
pub const EASTER_EGG_PROBABILITY: f64 = 0.05;

const HEDGED_PREFIX: &str = "I think I can help. ";
const TENTATIVE_PREFIX: &str = "I might be mistaken, but ";

/// Confidence band that decides how a reply is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ToneBand {
    Confident,
    Hedged,
    Tentative,
}

impl ToneBand {
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence >= CONFIDENT_THRESHOLD {
            ToneBand::Confident
        } else if confidence >= HEDGED_THRESHOLD {
            ToneBand::Hedged
        } else {
            ToneBand::Tentative
        }
    }
}

/// One draw; index `floor(r * pool_len)`. Intents without a pool use the unknown pool.
pub fn pick_response<R: ReplyRng>(intent: Intent, rng: &mut R) -> &'static str {
    let options = replies_for(intent).unwrap_or(UNKNOWN_REPLIES);
    let index = (rng.next_f64() * options.len() as f64).floor() as usize;
    // a misbehaving generator returning 1.0 still lands on the last reply
    options[index.min(options.len() - 1)]
}

pub fn apply_tone(reply: &str, confidence: f64) -> String {
    match ToneBand::for_confidence(confidence) {
        ToneBand::Confident => reply.to_string(),
        ToneBand::Hedged => format!("{HEDGED_PREFIX}{reply}"),
        ToneBand::Tentative => format!("{TENTATIVE_PREFIX}{reply}"),
    }
}

/// Always consumes exactly one draw, whether or not it overrides.
pub fn maybe_easter_egg<R: ReplyRng>(intent: Intent, rng: &mut R) -> Option<&'static str> {
    let roll = rng.next_f64();

    match intent {
        Intent::Salutation if roll < EASTER_EGG_PROBABILITY => Some(SALUTATION_EASTER_EGG),
        Intent::BotIdentity if roll < EASTER_EGG_PROBABILITY => Some(BOT_IDENTITY_EASTER_EGG),
        _ => None,
    }
}
