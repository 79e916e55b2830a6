use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of intents the bot can assign to an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Salutation,
    Help,
    BotIdentity,
    EndChat,
    /// Fallback when nothing clears the confidence threshold.
    Unknown,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Salutation,
        Intent::Help,
        Intent::BotIdentity,
        Intent::EndChat,
        Intent::Unknown,
    ];

    /// Wire label, also used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Salutation => "salutation",
            Intent::Help => "help",
            Intent::BotIdentity => "bot_identity",
            Intent::EndChat => "end_chat",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cataloged phrase and the score it contributes on a partial match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEntry {
    pub phrase: &'static str,
    pub base_score: f64,
}

impl PatternEntry {
    pub const fn new(phrase: &'static str, base_score: f64) -> Self {
        Self { phrase, base_score }
    }
}

/// Output of a single detection pass. Confidence is clamped to `[0.0, 2.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionResult {
    pub intent: Intent,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serde_names() {
        for intent in Intent::ALL {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.label()));
        }
    }
}
