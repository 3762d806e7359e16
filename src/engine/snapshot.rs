//! Serializable view of an engine.
//!
//! Snapshots are what a presentation layer (or a remote client) renders
//! from. Faces of hidden tiles are left out so a snapshot can be shown to
//! the player without leaking the layout.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::match_engine::MatchEngine;
use super::phase::Phase;
use super::timer::HideTicket;
use crate::core::{FaceId, TileId, Visibility};

/// One tile as the player sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileView {
    /// Grid position.
    pub id: TileId,
    /// Current state.
    pub visibility: Visibility,
    /// `None` while the tile is face down.
    pub face: Option<FaceId>,
}

/// Everything a presentation layer needs to draw one frame.
///
/// Taken with [`MatchEngine::snapshot`]. Snapshots are detached copies;
/// they do not follow later changes to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Restart counter at capture time.
    pub generation: u64,
    /// Engine phase.
    pub phase: Phase,
    /// Score this game.
    pub score: u32,
    /// Every tile in grid order.
    pub tiles: Vec<TileView>,
    /// Tiles under comparison, in pick order.
    pub selection: SmallVec<[TileId; 2]>,
    /// Set while a mismatched pair waits to be hidden.
    pub pending_hide: Option<HideTicket>,
    /// Pairs on the board.
    pub pairs_total: u32,
    /// Pairs found so far this game.
    pub pairs_matched: u32,
}

/// Snapshot could not be encoded or decoded.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("snapshot codec error: {message}")]
pub struct SnapshotError {
    /// Codec message.
    pub message: String,
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl EngineSnapshot {
    pub(crate) fn capture(engine: &MatchEngine) -> Self {
        let board = engine.board();
        let tiles = board
            .iter()
            .map(|t| TileView {
                id: t.id,
                visibility: t.visibility,
                face: t.visibility.is_face_up().then_some(t.face),
            })
            .collect();

        Self {
            generation: engine.generation(),
            phase: engine.phase(),
            score: engine.score(),
            tiles,
            selection: SmallVec::from_slice(engine.selection()),
            pending_hide: engine.pending_hide(),
            pairs_total: board.pair_count() as u32,
            pairs_matched: (board.matched_count() / 2) as u32,
        }
    }

    /// Pairs still to find.
    #[must_use]
    pub fn pairs_remaining(&self) -> u32 {
        self.pairs_total - self.pairs_matched
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`EngineSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::EngineConfig;
    use crate::engine::NullSink;

    fn engine() -> MatchEngine {
        let faces = [0, 1, 1, 0].map(FaceId::new);
        MatchEngine::new(Board::new(faces).unwrap(), EngineConfig::default())
    }

    #[test]
    fn test_hidden_faces_are_concealed() {
        let mut engine = engine();
        engine.select(TileId(1), NullSink);

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.tiles[0].face, None);
        assert_eq!(snapshot.tiles[1].face, Some(FaceId::new(1)));
        assert_eq!(snapshot.tiles[1].visibility, Visibility::Revealed);
        assert_eq!(snapshot.phase, Phase::OneSelected);
        assert_eq!(snapshot.selection.as_slice(), &[TileId(1)]);
    }

    #[test]
    fn test_pair_counts() {
        let mut engine = engine();
        engine.select(TileId(1), NullSink);
        engine.select(TileId(2), NullSink);

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.pairs_total, 2);
        assert_eq!(snapshot.pairs_matched, 1);
        assert_eq!(snapshot.pairs_remaining(), 1);
        assert_eq!(snapshot.score, 1);
    }

    #[test]
    fn test_pending_hide_captured() {
        let mut engine = engine();
        engine.select(TileId(0), NullSink);
        engine.select(TileId(1), NullSink);

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.phase, Phase::Resolving);
        assert_eq!(snapshot.pending_hide, engine.pending_hide());
        assert!(snapshot.pending_hide.is_some());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut engine = engine();
        engine.select(TileId(0), NullSink);
        engine.select(TileId(1), NullSink);
        let snapshot = engine.snapshot();

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = EngineSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = engine().snapshot().to_bytes().unwrap();
        let err = EngineSnapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(err.to_string().starts_with("snapshot codec error"));
    }
}
