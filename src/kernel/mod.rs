//! Pure, synchronous chat kernel: utterance in, intent + confidence + reply out.
//! No I/O happens below this module.

pub mod conversation;
pub mod distance;
pub mod intent;
pub mod normalize;
pub mod response;
pub mod rng;
pub mod session;
pub mod telemetry;

pub use conversation::{BotConfig, BotReply, Conversation};
pub use intent::types::Intent;
