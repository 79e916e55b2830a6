//! Per-conversation turn telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer. It must **NEVER** be read by
//! detection, selection or tone logic.
//!
//! # PRIVACY INVARIANT
//! Events carry intents, tone bands and counts only. Never utterance or reply text.

pub mod event;
pub mod metrics;
pub mod recorder;
