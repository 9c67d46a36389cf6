//! Domain events published by the player model.
//!
//! Events go out on a `tokio::sync::broadcast` channel owned by the player.
//! Publishing never blocks and never fails: with no receivers the event is
//! dropped, and a receiver that falls more than the configured capacity
//! behind skips the oldest events. The save coordinator subscribes here and
//! stores a snapshot on [`PlayerEvent::ShinyCaptured`].

use tokio::sync::broadcast;

use crate::types::Badge;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A species was caught for the first time.
    PokemonCaptured { name: String },

    /// First shiny of a species. The save layer should persist immediately.
    ShinyCaptured { name: String },

    BadgeEarned(Badge),
}

impl PlayerEvent {
    /// Whether the event asks the save layer to store a snapshot right away.
    pub fn requests_save(&self) -> bool {
        matches!(self, Self::ShinyCaptured { .. })
    }
}

/// Sending half of the player's event channel.
#[derive(Clone, Debug)]
pub(crate) struct EventSender {
    tx: broadcast::Sender<PlayerEvent>,
}

impl EventSender {
    pub(crate) fn new(capacity: usize) -> Self {
        // broadcast::channel panics on zero capacity
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.tx.subscribe()
    }

    pub(crate) fn publish(&self, event: PlayerEvent) {
        if let Err(broadcast::error::SendError(event)) = self.tx.send(event) {
            tracing::trace!(?event, "no subscribers for player event");
        }
    }
}
