use serde::{Deserialize, Serialize};

use crate::kernel::intent::types::Intent;
use crate::kernel::response::ToneBand;

/// Exactly one event is recorded per conversation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Threshold met, reply selected and toned.
    Answered { intent: Intent, band: ToneBand },
    /// Threshold met, reply replaced by an easter egg.
    EasterEgg { intent: Intent },
    /// Confidence under threshold, unknown pool used.
    BelowThreshold,
    /// Repetition short-circuit, detection skipped.
    Repetition,
}
