//! Tile identification and per-tile state.
//!
//! ## TileId
//!
//! Stable index of a tile in the board's grid. Presentation layers translate
//! raw clicks into a `TileId` and pass it to the engine.
//!
//! ## FaceId
//!
//! Opaque face value. The engine only compares faces for equality; mapping a
//! face to an image or glyph is up to the presentation layer.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{FaceId, Tile, TileId, Visibility};
//!
//! let tile = Tile::new(TileId::new(3), FaceId::new(7));
//! assert_eq!(tile.visibility, Visibility::Hidden);
//! assert!(tile.is_selectable());
//! ```

use serde::{Deserialize, Serialize};

/// Index of a tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the tile's position in the board's tile sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Face value of a tile.
///
/// Every face appears on exactly two tiles of a valid board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// What the player currently sees of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Face down.
    #[default]
    Hidden,
    /// Face up and under comparison.
    Revealed,
    /// Face up permanently; part of a confirmed pair.
    Matched,
}

impl Visibility {
    /// Is the face shown to the player?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, Visibility::Revealed | Visibility::Matched)
    }
}

/// A tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Position in the grid.
    pub id: TileId,

    /// Face value, compared when two tiles are selected.
    pub face: FaceId,

    /// Current visibility.
    pub visibility: Visibility,
}

impl Tile {
    /// Create a face-down tile.
    #[must_use]
    pub const fn new(id: TileId, face: FaceId) -> Self {
        Self {
            id,
            face,
            visibility: Visibility::Hidden,
        }
    }

    /// Only hidden tiles can be picked.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self.visibility, Visibility::Hidden)
    }

    /// Check if this tile has been paired.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.visibility, Visibility::Matched)
    }
}
