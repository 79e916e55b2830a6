//! Transport glue around the kernel: WebSocket chat, JSON fixtures, static files.

pub mod chat;
pub mod mocks;
pub mod router;
pub mod server;
pub mod state;

pub use router::create_router;
pub use state::AppState;
