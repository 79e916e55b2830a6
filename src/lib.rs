pub mod config;
pub mod error;
pub mod kernel;
pub mod services;

// Convenience re-exports for binaries and tests
pub use kernel::{BotConfig, BotReply, Conversation, Intent};
