//! The board: an ordered, validated set of tiles.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::instrument;

use super::error::BoardError;
use crate::core::{FaceId, Tile, TileId, Visibility};

/// Largest supported pair count; every tile needs a `u32` ID.
pub const MAX_PAIRS: u32 = u32::MAX / 2;

/// Ordered sequence of tiles for one game.
///
/// A `Board` can only be built through [`Board::new`], which checks that the
/// size is even and that every face appears exactly twice. Tiles are stored
/// in an `im::Vector`, so cloning a board for a snapshot is O(1).
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::core::{FaceId, TileId};
///
/// let a = FaceId::new(0);
/// let b = FaceId::new(1);
/// let board = Board::new([a, b, b, a]).unwrap();
///
/// assert_eq!(board.len(), 4);
/// assert!(board.faces_match(TileId::new(0), TileId::new(3)));
/// assert!(!board.faces_match(TileId::new(0), TileId::new(1)));
/// ```
///
/// Boards serialize but do not deserialize; rebuild one with [`Board::new`]
/// from its [`faces`](Board::faces) so validation always runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    tiles: Vector<Tile>,
}

impl Board {
    /// Build a face-down board from a face assignment.
    ///
    /// The face at position `i` goes on `TileId(i)`.
    ///
    /// # Errors
    ///
    /// - [`BoardError::Empty`] if no faces are given.
    /// - [`BoardError::OddSize`] if the number of faces is odd.
    /// - [`BoardError::TooLarge`] if there are more than [`MAX_PAIRS`] pairs.
    /// - [`BoardError::BadMultiplicity`] if some face does not appear exactly
    ///   twice (the smallest such face is reported).
    #[instrument(skip(faces))]
    pub fn new(faces: impl IntoIterator<Item = FaceId>) -> Result<Self, BoardError> {
        let faces: Vec<FaceId> = faces.into_iter().collect();
        validate(&faces)?;
        Ok(Self::from_valid_faces(faces))
    }

    /// Build a board from faces already known to satisfy the pairing rules.
    pub(crate) fn from_valid_faces(faces: Vec<FaceId>) -> Self {
        let tiles = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Tile::new(TileId::new(i as u32), face))
            .collect();

        Self { tiles }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Does this board have a tile with this ID?
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    /// Get a tile.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Get a tile's face value.
    #[must_use]
    pub fn face(&self, id: TileId) -> Option<FaceId> {
        self.get(id).map(|t| t.face)
    }

    /// Get a tile's visibility.
    #[must_use]
    pub fn visibility(&self, id: TileId) -> Option<Visibility> {
        self.get(id).map(|t| t.visibility)
    }

    /// Iterate over tiles in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Face assignment in grid order.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.tiles.iter().map(|t| t.face)
    }

    /// Check if two tiles carry the same face.
    ///
    /// Returns false if either ID is off the board.
    #[must_use]
    pub fn faces_match(&self, a: TileId, b: TileId) -> bool {
        match (self.face(a), self.face(b)) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => false,
        }
    }

    /// Number of tiles in `Matched` state.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_matched()).count()
    }

    /// Check if every tile is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(Tile::is_matched)
    }

    /// Tiles currently in the given state.
    pub fn with_visibility(&self, visibility: Visibility) -> impl Iterator<Item = TileId> + '_ {
        self.tiles
            .iter()
            .filter(move |t| t.visibility == visibility)
            .map(|t| t.id)
    }

    /// Set a tile's visibility. Off-board IDs are ignored.
    pub(crate) fn set_visibility(&mut self, id: TileId, visibility: Visibility) {
        if let Some(tile) = self.tiles.get_mut(id.index()) {
            tile.visibility = visibility;
        }
    }

    /// Turn every tile face down.
    ///
    /// Returns the tiles that were face up, in grid order.
    pub(crate) fn hide_all(&mut self) -> Vec<TileId> {
        let mut flipped = Vec::new();
        for tile in self.tiles.iter_mut() {
            if tile.visibility.is_face_up() {
                tile.visibility = Visibility::Hidden;
                flipped.push(tile.id);
            }
        }
        flipped
    }
}

fn validate(faces: &[FaceId]) -> Result<(), BoardError> {
    if faces.is_empty() {
        return Err(BoardError::Empty);
    }
    if faces.len() % 2 != 0 {
        return Err(BoardError::OddSize { len: faces.len() });
    }
    if faces.len() / 2 > MAX_PAIRS as usize {
        return Err(BoardError::TooLarge { pairs: faces.len() / 2 });
    }

    let mut counts: FxHashMap<FaceId, usize> = FxHashMap::default();
    for &face in faces {
        *counts.entry(face).or_insert(0) += 1;
    }

    // Report the smallest offender so the error is deterministic.
    match counts
        .into_iter()
        .filter(|&(_, count)| count != 2)
        .min_by_key(|&(face, _)| face)
    {
        Some((face, count)) => Err(BoardError::BadMultiplicity { face, count }),
        None => Ok(()),
    }
}
