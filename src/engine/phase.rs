//! Engine phases and selection outcomes.

use serde::{Deserialize, Serialize};

use super::timer::HideTicket;

/// Where the engine is in the pick-compare cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No tile selected.
    #[default]
    Idle,
    /// One tile face up, waiting for the second pick.
    OneSelected,
    /// Two mismatched tiles face up, waiting for the delayed hide.
    Resolving,
    /// All tiles matched. Only a restart leaves this phase.
    Won,
}

impl Phase {
    /// Can `select` change anything in this phase?
    #[must_use]
    pub const fn accepts_selection(self) -> bool {
        matches!(self, Phase::Idle | Phase::OneSelected)
    }
}

/// Why a selection was ignored.
///
/// Rejections are normal play (clicking while the UI is still animating),
/// not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// A mismatched pair is still waiting to be hidden.
    Resolving,
    /// The game is over.
    GameWon,
    /// The tile is already face up in the current selection.
    AlreadyRevealed,
    /// The tile is part of a confirmed pair.
    AlreadyMatched,
    /// No such tile on this board.
    UnknownTile,
}

/// Result of a `select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Ignored; nothing changed and nothing was emitted.
    Rejected(RejectReason),
    /// First tile of a pair turned face up.
    Revealed,
    /// Second tile matched the first.
    Matched {
        /// Score after the match.
        score: u32,
    },
    /// The final pair matched.
    Won {
        /// Final score.
        score: u32,
    },
    /// Second tile did not match; a hide has been scheduled.
    Mismatched(HideTicket),
}

impl SelectOutcome {
    /// Did the call change engine state?
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Rejected(_))
    }
}
