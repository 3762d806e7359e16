//! Board of tiles.
//!
//! ## Key Types
//!
//! - `Board`: validated, ordered tile set (every face exactly twice)
//! - `BoardError`: why a face assignment was rejected
//! - `deal` / `redeal`: seeded dealing helpers built on `DealRng`

pub mod deal;
pub mod error;
pub mod grid;

pub use deal::{deal, redeal};
pub use error::BoardError;
pub use grid::{Board, MAX_PAIRS};
