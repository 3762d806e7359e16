//! Notifications sent from the engine to the presentation layer.
//!
//! Every mutating engine call takes an [`EventSink`]. The engine pushes one
//! [`GameEvent`] per visible change, in the order the presentation layer
//! should render them.

use serde::{Deserialize, Serialize};

use super::timer::HideTicket;
use crate::core::TileId;

/// A state change the presentation layer should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A tile was turned face up.
    TileRevealed {
        /// The tile.
        tile: TileId,
    },

    /// A tile was turned face down.
    TileHidden {
        /// The tile.
        tile: TileId,
    },

    /// Two tiles formed a pair.
    MatchConfirmed {
        /// First tile picked.
        first: TileId,
        /// Second tile picked.
        second: TileId,
        /// Score after this match.
        score: u32,
    },

    /// The score changed (after a match or a restart).
    ScoreChanged {
        /// New score.
        score: u32,
    },

    /// A mismatched pair will be hidden after the configured delay.
    ///
    /// Hosts driving their own timer pass the ticket back to
    /// [`MatchEngine::fire_hide`](super::MatchEngine::fire_hide).
    HideScheduled {
        /// Identifies the pending hide.
        ticket: HideTicket,
    },

    /// Every tile is matched.
    GameWon,

    /// The engine was reset for a new game.
    Restarted,
}

/// Receiver for engine notifications.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut events: Vec<GameEvent> = Vec::new();
        events.emit(GameEvent::TileRevealed { tile: TileId(1) });
        events.emit(GameEvent::GameWon);

        assert_eq!(
            events,
            vec![GameEvent::TileRevealed { tile: TileId(1) }, GameEvent::GameWon]
        );
    }

    #[test]
    fn test_sink_through_reference() {
        fn forward(mut sink: impl EventSink) {
            sink.emit(GameEvent::Restarted);
        }

        let mut events: Vec<GameEvent> = Vec::new();
        forward(&mut events);
        assert_eq!(events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_json_shape() {
        let event = GameEvent::MatchConfirmed {
            first: TileId(0),
            second: TileId(3),
            score: 2,
        };
        let json = serde_json::to_value(event).unwrap();

        assert_eq!(json["type"], "match_confirmed");
        assert_eq!(json["score"], 2);

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
