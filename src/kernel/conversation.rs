use serde::{Deserialize, Serialize};
use tracing::trace;

use super::intent::catalog::REPETITION_REPLY;
use super::intent::detector::IntentDetector;
use super::intent::types::Intent;
use super::normalize::normalize;
use super::response::{apply_tone, maybe_easter_egg, pick_response, ToneBand};
use super::rng::{ReplyRng, SineRng};
use super::session::SessionState;
use super::telemetry::event::TurnEvent;
use super::telemetry::metrics::SessionSummary;
use super::telemetry::recorder::TurnRecorder;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotConfig {
    /// Lower values answer more aggressively on weaker matches.
    pub confidence_threshold: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

/// What one step hands back to the transport. Not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotReply {
    pub intent: Intent,
    pub confidence: f64,
    pub response: String,
}

/// Pure step over an explicit session. Synchronous, no I/O.
///
/// Sequence: repetition check -> detection -> threshold gate -> easter egg ->
/// selection -> tone. Returns the reply plus the telemetry event describing
/// which path was taken.
pub fn step<R: ReplyRng>(
    detector: &IntentDetector,
    session: &mut SessionState<R>,
    utterance: &str,
    confidence_threshold: f64,
) -> (BotReply, TurnEvent) {
    // 1. Repetition awareness
    let normalized = normalize(utterance);
    if session.observe_utterance(&normalized) {
        let reply = BotReply {
            intent: session.last_intent.unwrap_or(Intent::Unknown),
            confidence: 1.0,
            response: REPETITION_REPLY.to_string(),
        };
        return (reply, TurnEvent::Repetition);
    }

    // 2. Detection
    let detection = detector.detect(utterance, session.last_intent);

    // 3. Threshold gate
    if detection.confidence < confidence_threshold {
        session.last_intent = Some(Intent::Unknown);
        let reply = BotReply {
            intent: Intent::Unknown,
            confidence: detection.confidence,
            response: pick_response(Intent::Unknown, &mut session.rng).to_string(),
        };
        return (reply, TurnEvent::BelowThreshold);
    }

    session.last_intent = Some(detection.intent);

    // 4. Easter egg pre-empts tone
    if let Some(egg) = maybe_easter_egg(detection.intent, &mut session.rng) {
        let reply = BotReply {
            intent: detection.intent,
            confidence: detection.confidence,
            response: egg.to_string(),
        };
        return (reply, TurnEvent::EasterEgg { intent: detection.intent });
    }

    // 5. Selection + tone
    let base = pick_response(detection.intent, &mut session.rng);
    let reply = BotReply {
        intent: detection.intent,
        confidence: detection.confidence,
        response: apply_tone(base, detection.confidence),
    };
    let band = ToneBand::for_confidence(detection.confidence);
    (reply, TurnEvent::Answered { intent: detection.intent, band })
}

/// One live conversation. Owns its session, generator and telemetry; drop it
/// when the conversation ends.
#[derive(Debug)]
pub struct Conversation<R = SineRng> {
    detector: IntentDetector,
    session: SessionState<R>,
    config: BotConfig,
    telemetry: TurnRecorder,
}

impl Conversation {
    pub fn new(config: BotConfig) -> Self {
        Self::with_rng(config, SineRng::default())
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

impl<R: ReplyRng> Conversation<R> {
    pub fn with_rng(config: BotConfig, rng: R) -> Self {
        Self {
            detector: IntentDetector::new(),
            session: SessionState::with_rng(rng),
            config,
            telemetry: TurnRecorder::new(),
        }
    }

    /// Step with the configured threshold.
    pub fn step(&mut self, utterance: &str) -> BotReply {
        self.step_with_threshold(utterance, self.config.confidence_threshold)
    }

    pub fn step_with_threshold(&mut self, utterance: &str, confidence_threshold: f64) -> BotReply {
        let (reply, event) =
            step(&self.detector, &mut self.session, utterance, confidence_threshold);
        trace!(?event, cursor = self.session.rng_cursor(), "conversation step");
        self.telemetry.record(event);
        reply
    }

    pub fn session(&self) -> &SessionState<R> {
        &self.session
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn summary(&self) -> SessionSummary {
        self.telemetry.summary()
    }
}
