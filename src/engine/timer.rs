//! Delayed hide after a mismatch.
//!
//! A mismatch schedules exactly one hide. The schedule is captured in a
//! [`HideTicket`]: the game generation it belongs to, a serial number unique
//! for the engine's lifetime, and the two tiles to flip back. The engine only
//! honours the ticket that is currently pending, so a timer that outlives a
//! restart (or fires twice) cannot touch the new game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::TileId;

/// Handle for a scheduled hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HideTicket {
    /// Game generation at scheduling time (bumped on every restart).
    pub generation: u64,

    /// Per-engine schedule counter, never reused.
    pub serial: u64,

    /// The mismatched tiles, in pick order.
    pub tiles: [TileId; 2],

    /// How long the host should wait before firing (milliseconds).
    pub delay_ms: u64,
}

impl HideTicket {
    /// Wait time as a `Duration`.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// The engine-side countdown for the pending ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingHide {
    pub(crate) ticket: HideTicket,
    pub(crate) remaining: Duration,
}

impl PendingHide {
    pub(crate) fn new(ticket: HideTicket) -> Self {
        Self {
            remaining: ticket.delay(),
            ticket,
        }
    }

    /// Advance the countdown. Returns true once it has run out.
    pub(crate) fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero()
    }
}
