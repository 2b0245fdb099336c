//! Domain events published by ShareKit operations.
//!
//! Every successful operation publishes exactly one event on the event
//! bus. Caller-owned listeners (a share list view, a password prompt)
//! subscribe and react. Failures are not republished here; they reach
//! the caller through the operation's resolved `Err`.

pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

pub use share::ShareEvent;

/// Default buffer size for the event broadcast channel.
pub const DEFAULT_EVENT_BUFFER: usize = 64;

/// Wrapper for all events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub event: ShareEvent,
}

impl EventEnvelope {
    /// Create a new envelope around an event.
    pub fn new(event: ShareEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// In-process broadcast bus for completion events.
///
/// Cloning the bus clones the sending side; all clones feed the same
/// subscribers. Publishing with no live subscribers is a no-op.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a bus with the given channel buffer size.
    pub fn new(buffer: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer);
        Self { tx }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: ShareEvent) {
        let _ = self.tx.send(EventEnvelope::new(event));
    }

    /// Subscribe to events, returns a receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER)
    }
}
