//! Core types: tiles, faces, visibility, configuration, RNG.
//!
//! Nothing here knows about the match rules; the engine builds on these.

pub mod config;
pub mod rng;
pub mod tile;

pub use config::{EngineConfig, DEFAULT_HIDE_DELAY_MS};
pub use rng::DealRng;
pub use tile::{FaceId, Tile, TileId, Visibility};
