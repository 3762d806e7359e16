//! # memory-match
//!
//! Turn logic for two-card matching ("memory") games.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The crate resolves picks, pairs, scores and the
//!    mismatch delay. Rendering and input capture stay with the host.
//!
//! 2. **Explicit instances**: All state lives in a `MatchEngine`. Several
//!    games can run side by side.
//!
//! 3. **Fail at deal time**: A `Board` cannot be built unless every face
//!    appears exactly twice. Invalid clicks during play are no-ops.
//!
//! ## Timing
//!
//! A mismatch keeps both tiles face up for `EngineConfig::hide_delay_ms`.
//! Hosts either call `MatchEngine::tick` with elapsed time, or run their own
//! timer and hand the `HideTicket` back to `MatchEngine::fire_hide`. Tickets
//! from before a restart are ignored.
//!
//! ## Modules
//!
//! - `core`: Tile and face IDs, visibility, configuration, dealing RNG
//! - `board`: Validated boards and seeded dealing
//! - `engine`: The match state machine, events, snapshots

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{DealRng, EngineConfig, FaceId, Tile, TileId, Visibility};

pub use crate::board::{deal, redeal, Board, BoardError};

pub use crate::engine::{
    EngineSnapshot, EventSink, GameEvent, HideTicket, MatchEngine, NullSink, Phase, RejectReason,
    SelectOutcome, SnapshotError, TileView,
};
