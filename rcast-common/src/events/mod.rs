//! Event types for the replay-cast event system
//!
//! The spectator runtime publishes everything it does on one broadcast
//! [`EventBus`]; reporting and stat-notification consumers subscribe to it.

mod decision_types;
mod playback_types;

pub use decision_types::{DecisionLogEntry, ParticipantStats, SourceTag};
pub use playback_types::{PanelKind, PlaybackState};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::match_data::Seat;
use crate::time::MatchSecond;

/// How a spectator session ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum SessionOutcome {
    /// Clock reached the match duration
    Completed,
    /// Clock lost or never acquired within the retry budget
    Desynchronized,
    /// Process-wide shutdown requested
    Cancelled,
}

impl std::fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOutcome::Completed => write!(f, "Completed"),
            SessionOutcome::Desynchronized => write!(f, "Desynchronized"),
            SessionOutcome::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Replay-cast event types
///
/// Events are broadcast via [`EventBus`] and serialize as tagged JSON for
/// downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DirectorEvent {
    /// Spectator session started for a match
    SessionStarted {
        session_id: Uuid,
        duration_secs: MatchSecond,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Playback state changed after a clock reading
    PlaybackStateChanged {
        session_id: Uuid,
        old_state: PlaybackState,
        new_state: PlaybackState,
        elapsed: Option<MatchSecond>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A focus command was delivered
    FocusChanged {
        session_id: Uuid,
        second: MatchSecond,
        slot: Seat,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A panel command was delivered
    PanelChanged {
        session_id: Uuid,
        second: MatchSecond,
        panel: PanelKind,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Decision in effect for a newly reached second
    DecisionLogged {
        session_id: Uuid,
        entry: DecisionLogEntry,
    },

    /// Live per-seat tally
    StatsSnapshot {
        session_id: Uuid,
        second: MatchSecond,
        stats: Vec<ParticipantStats>,
    },

    /// Session ended; the director is ready for the next match
    SessionEnded {
        session_id: Uuid,
        outcome: SessionOutcome,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

/// Broadcast bus shared by every loop of every session
pub struct EventBus {
    tx: broadcast::Sender<DirectorEvent>,
    capacity: usize,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per slow subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<DirectorEvent> {
        self.tx.subscribe()
    }

    /// Emit an event, ignoring the absence of subscribers.
    ///
    /// Never blocks: a lagging subscriber loses the oldest events instead.
    pub fn emit_lossy(&self, event: DirectorEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
