//! Session event types and the event log.
//!
//! Every successful mutating operation on a [`MapSession`] records one
//! event stamped with the session's mutation counter. A rendering shell
//! drains the log each frame and patches its scene graph from the payloads
//! instead of re-deriving everything from scratch. In particular, token
//! removal is only observable here once the record itself is gone.
//!
//! [`MapSession`]: crate::session::MapSession

use bm_core::{GridCell, ScenePoint, TokenId};

/// What kind of session mutation occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEventKind {
    // Map lifecycle
    /// A map was loaded and the fog mask rebuilt, fully hidden.
    MapLoaded {
        /// Map width in scene units.
        width: u32,
        /// Map height in scene units.
        height: u32,
    },
    /// The cell size changed; any loaded fog mask was rebuilt, fully
    /// hidden.
    CellSizeChanged {
        /// The new cell size in scene units.
        cell_size: u32,
    },

    // Fog
    /// A brush application changed cell visibility.
    FogPainted {
        /// `true` if the cells were revealed, `false` if hidden.
        reveal: bool,
        /// The cells whose visibility actually changed.
        cells: Vec<GridCell>,
    },
    /// The whole mask was revealed at once; the shell re-reads the grid
    /// rather than patching per cell.
    FogCleared {
        /// How many cells flipped from hidden.
        revealed: usize,
    },

    // Tokens
    /// A token was created.
    TokenAdded {
        /// Id of the new token.
        id: TokenId,
    },
    /// A token's name or combat attributes changed.
    TokenUpdated {
        /// Id of the changed token.
        id: TokenId,
    },
    /// A token moved to a new scene position.
    TokenMoved {
        /// Id of the moved token.
        id: TokenId,
        /// The token's new position.
        position: ScenePoint,
    },
    /// A token was removed. The shell drops its cached visual handle for
    /// this id; the id itself will never come back.
    TokenRemoved {
        /// Id of the removed token.
        id: TokenId,
    },
}

impl SessionEventKind {
    /// Check whether a given token is involved in this event.
    pub fn involves(&self, id: TokenId) -> bool {
        match self {
            Self::TokenAdded { id: involved }
            | Self::TokenUpdated { id: involved }
            | Self::TokenMoved { id: involved, .. }
            | Self::TokenRemoved { id: involved } => *involved == id,
            Self::MapLoaded { .. }
            | Self::CellSizeChanged { .. }
            | Self::FogPainted { .. }
            | Self::FogCleared { .. } => false,
        }
    }
}

/// A record of one session mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// Value of the session's mutation counter when this event occurred.
    pub seq: u64,
    /// The specific kind of mutation.
    pub kind: SessionEventKind,
    /// A human-readable description of the mutation.
    pub description: String,
}

impl SessionEvent {
    /// Create a new session event with the given counter value, kind, and
    /// description.
    pub fn new(seq: u64, kind: SessionEventKind, description: impl Into<String>) -> Self {
        Self {
            seq,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SessionEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its
    /// capacity.
    pub fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Return all events recorded after the given counter value. Shells
    /// that poll instead of draining remember the last seq they saw.
    pub fn events_since(&self, seq: u64) -> Vec<&SessionEvent> {
        self.events.iter().filter(|e| e.seq > seq).collect()
    }

    /// Return all events involving the given token.
    pub fn events_for_token(&self, id: TokenId) -> Vec<&SessionEvent> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }

    /// Take every accumulated event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fog_event(seq: u64) -> SessionEvent {
        SessionEvent::new(
            seq,
            SessionEventKind::FogPainted {
                reveal: true,
                cells: vec![GridCell::new(0, 0)],
            },
            "test",
        )
    }

    #[test]
    fn event_log_push_and_query() {
        let mut log = EventLog::new(0);
        let id = TokenId::new();
        log.push(SessionEvent::new(
            1,
            SessionEventKind::TokenAdded { id },
            "test",
        ));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events_since(0).len(), 1);
        assert_eq!(log.events_for_token(id).len(), 1);
    }

    #[test]
    fn event_log_max_events_trims() {
        let mut log = EventLog::new(2);
        for seq in 1..=5 {
            log.push(fog_event(seq));
        }
        assert_eq!(log.len(), 2);
        // Oldest events were dropped, newest remain
        assert_eq!(log.events()[0].seq, 4);
        assert_eq!(log.events()[1].seq, 5);
    }

    #[test]
    fn event_kind_involves_token() {
        let a = TokenId::new();
        let b = TokenId::new();

        let kind = SessionEventKind::TokenMoved {
            id: a,
            position: ScenePoint::new(1.0, 2.0),
        };
        assert!(kind.involves(a));
        assert!(!kind.involves(b));

        let kind = SessionEventKind::TokenRemoved { id: b };
        assert!(kind.involves(b));
        assert!(!kind.involves(a));

        // Fog and map events involve no token
        let kind = SessionEventKind::FogCleared { revealed: 9 };
        assert!(!kind.involves(a));
        let kind = SessionEventKind::MapLoaded {
            width: 500,
            height: 500,
        };
        assert!(!kind.involves(a));
    }

    #[test]
    fn events_since_filters_by_counter() {
        let mut log = EventLog::new(0);
        for seq in 1..=4 {
            log.push(fog_event(seq));
        }
        assert_eq!(log.events_since(0).len(), 4);
        assert_eq!(log.events_since(2).len(), 2);
        assert_eq!(log.events_since(4).len(), 0);
    }

    #[test]
    fn drain_takes_everything() {
        let mut log = EventLog::new(0);
        log.push(fog_event(1));
        log.push(fog_event(2));
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn event_log_clear() {
        let mut log = EventLog::new(0);
        log.push(fog_event(1));
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn event_log_unlimited_capacity() {
        let mut log = EventLog::new(0);
        for seq in 0..1000 {
            log.push(fog_event(seq));
        }
        // With max_events=0 (unlimited), all events retained
        assert_eq!(log.len(), 1000);
    }
}
