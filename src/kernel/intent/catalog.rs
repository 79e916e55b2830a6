//! Static pattern catalog and reply pools.
//!
//! # ORDERING INVARIANT
//! Detection walks `INTENT_CATALOG` front to back and only replaces the
//! running best on a strictly greater score, so the first entry wins a tie.
//! Reordering intents or phrases here changes classification results.

use super::types::{Intent, PatternEntry};

pub const INTENT_CATALOG: &[(Intent, &[PatternEntry])] = &[
    (
        Intent::Salutation,
        &[
            PatternEntry::new("hi", 1.0),
            PatternEntry::new("hello", 1.0),
            PatternEntry::new("hey", 0.9),
        ],
    ),
    (
        Intent::Help,
        &[
            PatternEntry::new("help", 1.2),
            PatternEntry::new("need help", 1.4),
            PatternEntry::new("can you help", 1.4),
            PatternEntry::new("assist", 1.1),
            PatternEntry::new("support", 1.1),
            PatternEntry::new("what can you do", 1.5),
            PatternEntry::new("how can you help", 1.5),
        ],
    ),
    (
        Intent::BotIdentity,
        &[
            PatternEntry::new("who are you", 1.2),
            PatternEntry::new("what are you", 1.0),
        ],
    ),
    (
        Intent::EndChat,
        &[
            PatternEntry::new("bye", 1.0),
            PatternEntry::new("goodbye", 1.2),
            PatternEntry::new("see you", 0.9),
        ],
    ),
];

const SALUTATION_REPLIES: &[&str] = &[
    "Hello! How may I help you today?",
    "Hi there! What can I do for you?",
    "Hey! How can I assist you?",
];

const HELP_REPLIES: &[&str] = &[
    "Sure! You can ask me who I am, or say hello, or just tell me what you need help with.",
    "I can help with basic questions about this system. Try asking \u{201c}Who are you?\u{201d}",
    "I\u{2019}m here to assist. Tell me what you need help with.",
];

const BOT_IDENTITY_REPLIES: &[&str] = &[
    "I am your RuleEngineBot. Ask me anything.",
    "I am RuleEngineBot, here to help you.",
];

const END_CHAT_REPLIES: &[&str] = &["Goodbye! Have a great day \u{1f44b}", "See you later!"];

pub const UNKNOWN_REPLIES: &[&str] = &[
    "I don't understand. Please rephrase.",
    "Sorry, I didn\u{2019}t quite get that.",
];

pub const REPETITION_REPLY: &str = "\u{1f604} We already covered that \u{2014} how else can I help?";

pub const SALUTATION_EASTER_EGG: &str = "\u{1f440} Hello there, human.";

pub const BOT_IDENTITY_EASTER_EGG: &str =
    "I am\u{2026} inevitable. Just kidding \u{1f604} I\u{2019}m RuleEngineBot.";

/// Reply pool for `intent`, or `None` when the intent has no dedicated pool.
/// Every pool is non-empty.
pub fn replies_for(intent: Intent) -> Option<&'static [&'static str]> {
    match intent {
        Intent::Salutation => Some(SALUTATION_REPLIES),
        Intent::Help => Some(HELP_REPLIES),
        Intent::BotIdentity => Some(BOT_IDENTITY_REPLIES),
        Intent::EndChat => Some(END_CHAT_REPLIES),
        Intent::Unknown => Some(UNKNOWN_REPLIES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::normalize::normalize;

    #[test]
    fn catalog_order_is_fixed() {
        let order: Vec<Intent> = INTENT_CATALOG.iter().map(|(intent, _)| *intent).collect();
        assert_eq!(
            order,
            vec![Intent::Salutation, Intent::Help, Intent::BotIdentity, Intent::EndChat]
        );
    }

    #[test]
    fn phrases_are_already_normalized() {
        for (_, patterns) in INTENT_CATALOG {
            for entry in patterns.iter() {
                assert_eq!(normalize(entry.phrase), entry.phrase);
            }
        }
    }

    #[test]
    fn every_intent_has_a_non_empty_pool() {
        for intent in Intent::ALL {
            let pool = replies_for(intent).expect("pool exists");
            assert!(!pool.is_empty(), "{} pool is empty", intent);
        }
    }
}
