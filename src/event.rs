//! Typed events relayed to the host conversation stream.

use serde::{Deserialize, Serialize};

/// One record emitted to the host while a request is processed.
///
/// Serializes to the host's wire shape:
/// `{"type": "status", "data": {"description": ..., "done": ...}}` and
/// `{"type": "message", "data": {"content": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum OutputEvent {
    /// A progress notification.
    Status {
        /// Human-readable progress description
        description: String,
        /// Whether the operation has reached a terminal state
        done: bool,
    },
    /// A content delivery notification.
    Message {
        /// Text or image reference to display
        content: String,
    },
}

impl OutputEvent {
    /// Creates a status event.
    pub fn status(description: impl Into<String>, done: bool) -> Self {
        Self::Status {
            description: description.into(),
            done,
        }
    }

    /// Creates a message event.
    pub fn message(content: impl Into<String>) -> Self {
        Self::Message {
            content: content.into(),
        }
    }
}

/// Receives output events in emission order.
///
/// Ordering is guaranteed by the handler awaiting each emission before the
/// next; delivery confirmation is not part of the contract.
#[async_trait::async_trait]
pub trait EventSink: Send + Sync {
    /// Delivers one event to the host.
    async fn emit(&self, event: OutputEvent);
}
