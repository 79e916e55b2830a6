use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::state::AppState;
use crate::kernel::conversation::{BotConfig, BotReply, Conversation};
use crate::kernel::telemetry::metrics::SessionSummary;

/// What the socket loop should do after one inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Reply(String),
    Ignore,
    Close,
}

/// One connection's conversation. Created on upgrade, dropped on close;
/// nothing here is visible to any other connection.
#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    conversation: Conversation,
}

impl ChatSession {
    pub fn new(config: BotConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation: Conversation::new(config),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn summary(&self) -> SessionSummary {
        self.conversation.summary()
    }

    pub fn handle_text(&mut self, text: &str) -> BotReply {
        debug!(connection = %self.id, utterance = text, "chat frame received");
        let reply = self.conversation.step(text);
        info!(
            connection = %self.id,
            "Bot | Intent: {} | Confidence: {:.2}",
            reply.intent,
            reply.confidence
        );
        reply
    }

    pub fn handle_frame(&mut self, message: Message) -> FrameOutcome {
        match message {
            Message::Text(text) => FrameOutcome::Reply(self.handle_text(&text).response),
            Message::Binary(bytes) => match String::from_utf8(bytes) {
                Ok(text) => FrameOutcome::Reply(self.handle_text(&text).response),
                Err(e) => {
                    warn!(connection = %self.id, "Dropping non-UTF-8 binary frame: {}", e);
                    FrameOutcome::Ignore
                }
            },
            // Transport answers pings itself
            Message::Ping(_) | Message::Pong(_) => FrameOutcome::Ignore,
            Message::Close(_) => FrameOutcome::Close,
        }
    }
}

/// Frames or messages above the configured limit end the connection with a
/// receive error; the bot never sees them.
pub async fn chat_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let bot = state.config.bot;
    let limit = state.config.max_message_bytes;
    ws.max_message_size(limit)
        .max_frame_size(limit)
        .on_upgrade(move |socket| run_connection(socket, bot))
}

/// Per-connection dispatch loop. Frames are handled strictly in arrival order.
pub async fn run_connection(mut socket: WebSocket, bot: BotConfig) {
    let mut session = ChatSession::new(bot);
    info!(connection = %session.id(), "Client connected to chat bot");

    while let Some(frame) = socket.recv().await {
        let message = match frame {
            Ok(message) => message,
            Err(e) => {
                warn!(connection = %session.id(), "Chat socket receive failed: {}", e);
                break;
            }
        };

        match session.handle_frame(message) {
            FrameOutcome::Reply(text) => {
                if let Err(e) = socket.send(Message::Text(text)).await {
                    warn!(connection = %session.id(), "Chat socket send failed: {}", e);
                    break;
                }
            }
            FrameOutcome::Ignore => continue,
            FrameOutcome::Close => break,
        }
    }

    let summary = session.summary();
    info!(
        connection = %session.id(),
        turns = summary.turns,
        answered = summary.answered,
        below_threshold = summary.below_threshold,
        repetitions = summary.repetitions,
        easter_eggs = summary.easter_eggs,
        "Client disconnected"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_frame_gets_one_reply() {
        let mut session = ChatSession::new(BotConfig::default());
        let outcome = session.handle_frame(Message::Text("hi".to_string()));
        assert_eq!(outcome, FrameOutcome::Reply("Hey! How can I assist you?".to_string()));
    }

    #[test]
    fn binary_utf8_is_treated_as_text() {
        let mut session = ChatSession::new(BotConfig::default());
        let outcome = session.handle_frame(Message::Binary(b"hi".to_vec()));
        assert_eq!(outcome, FrameOutcome::Reply("Hey! How can I assist you?".to_string()));
    }

    #[test]
    fn invalid_binary_and_control_frames_are_ignored() {
        let mut session = ChatSession::new(BotConfig::default());
        let invalid = Message::Binary(vec![0xff, 0xfe]);
        assert_eq!(session.handle_frame(invalid), FrameOutcome::Ignore);
        assert_eq!(session.handle_frame(Message::Ping(vec![1])), FrameOutcome::Ignore);
        assert_eq!(session.handle_frame(Message::Close(None)), FrameOutcome::Close);
        assert_eq!(session.summary().turns, 0);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let mut first = ChatSession::new(BotConfig::default());
        let mut second = ChatSession::new(BotConfig::default());
        first.handle_text("hi");
        first.handle_text("hi");

        // A fresh connection sees a fresh cursor and no repetition history
        let reply = second.handle_text("hi");
        assert_eq!(reply.response, "Hey! How can I assist you?");
        assert!((reply.confidence - 1.6).abs() < 1e-9);
        assert_ne!(first.id(), second.id());
    }
}
