use tracing::debug;

use super::catalog::INTENT_CATALOG;
use super::types::{DetectionResult, Intent, PatternEntry};
use crate::kernel::distance::levenshtein;
use crate::kernel::normalize::normalize;

pub const EXACT_MATCH_BONUS: f64 = 0.6;
pub const FUZZY_PENALTY_PER_EDIT: f64 = 0.15;
pub const FUZZY_DISTANCE_RATIO: f64 = 0.25;
pub const MIN_FUZZY_DISTANCE: usize = 2;
pub const CONTINUITY_BOOST: f64 = 0.2;
pub const MAX_CONFIDENCE: f64 = 2.0;

/// (previous intent, newly detected intent) -> additive boost.
const FLOW_BOOSTS: &[(Intent, Intent, f64)] = &[
    (Intent::Salutation, Intent::Help, 0.3),
    (Intent::Help, Intent::BotIdentity, 0.2),
    (Intent::Salutation, Intent::BotIdentity, 0.2),
];

/// How an utterance matched a single cataloged phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhraseMatch {
    Exact,
    Partial,
    Fuzzy { distance: usize },
}

impl PhraseMatch {
    pub fn score(&self, base_score: f64) -> f64 {
        match self {
            PhraseMatch::Exact => base_score + EXACT_MATCH_BONUS,
            PhraseMatch::Partial => base_score,
            PhraseMatch::Fuzzy { distance } => {
                base_score - *distance as f64 * FUZZY_PENALTY_PER_EDIT
            }
        }
    }
}

/// Pure function: classify one normalized utterance against one normalized phrase.
/// Exact beats partial beats fuzzy; returns `None` when the edit distance
/// exceeds `max(2, floor(len(phrase) * 0.25))`.
pub fn match_phrase(input: &str, phrase: &str) -> Option<PhraseMatch> {
    if input == phrase {
        return Some(PhraseMatch::Exact);
    }
    if input.contains(phrase) {
        return Some(PhraseMatch::Partial);
    }

    let distance = levenshtein(input, phrase);
    let phrase_len = phrase.chars().count();
    let scaled = (phrase_len as f64 * FUZZY_DISTANCE_RATIO).floor() as usize;
    let max_allowed = MIN_FUZZY_DISTANCE.max(scaled);

    (distance <= max_allowed).then_some(PhraseMatch::Fuzzy { distance })
}

/// Scores utterances against an ordered catalog.
///
/// Stateless: the previous turn's intent is passed in by the caller, which
/// keeps each conversation's context out of the detector.
#[derive(Debug, Clone, Copy)]
pub struct IntentDetector {
    catalog: &'static [(Intent, &'static [PatternEntry])],
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentDetector {
    pub fn new() -> Self {
        Self { catalog: INTENT_CATALOG }
    }

    #[cfg(test)]
    pub(crate) fn with_catalog(catalog: &'static [(Intent, &'static [PatternEntry])]) -> Self {
        Self { catalog }
    }

    pub fn detect(&self, utterance: &str, last_intent: Option<Intent>) -> DetectionResult {
        let input = normalize(utterance);

        let mut best_intent = Intent::Unknown;
        let mut best_score = 0.0_f64;

        // 1. Phrase matching, catalog order, strictly-greater wins
        if !input.is_empty() {
            for (intent, patterns) in self.catalog {
                for entry in patterns.iter() {
                    let phrase = normalize(entry.phrase);
                    let Some(found) = match_phrase(&input, &phrase) else {
                        continue;
                    };
                    let score = found.score(entry.base_score);
                    if score > best_score {
                        best_score = score;
                        best_intent = *intent;
                    }
                }
            }
        }

        // 2. Flow boosts, only once something meaningful matched
        if best_score > 0.0 {
            if let Some(last) = last_intent {
                best_score += FLOW_BOOSTS
                    .iter()
                    .filter(|(from, to, _)| *from == last && *to == best_intent)
                    .map(|(_, _, boost)| boost)
                    .sum::<f64>();
            }
        }

        // 3. Continuity
        if last_intent == Some(best_intent) && best_intent != Intent::Unknown {
            best_score += CONTINUITY_BOOST;
        }

        let confidence = best_score.clamp(0.0, MAX_CONFIDENCE);
        debug!(intent = %best_intent, confidence, "intent detected");

        DetectionResult {
            intent: best_intent,
            confidence,
        }
    }
}
