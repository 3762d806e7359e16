//! Match engine: the pick-compare-hide state machine.
//!
//! ## Flow
//!
//! ```text
//! Idle --select--> OneSelected --select (match)--> Idle | Won
//!                              --select (mismatch)--> Resolving --hide--> Idle
//! any --restart--> Idle
//! ```
//!
//! ## Key Types
//!
//! - `MatchEngine`: owns board, selection, score, pending hide
//! - `GameEvent` / `EventSink`: notifications to the presentation layer
//! - `HideTicket`: identity of a scheduled hide; stale tickets are no-ops
//! - `EngineSnapshot`: serializable render view

pub mod event;
pub mod match_engine;
pub mod phase;
pub mod snapshot;
pub mod timer;

pub use event::{EventSink, GameEvent, NullSink};
pub use match_engine::MatchEngine;
pub use phase::{Phase, RejectReason, SelectOutcome};
pub use snapshot::{EngineSnapshot, SnapshotError, TileView};
pub use timer::HideTicket;
