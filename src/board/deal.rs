//! Seeded dealing.
//!
//! Presentation layers usually own the deal. This helper exists so hosts and
//! tests can get a reproducible, valid board from a pair count and a seed.

use tracing::debug;

use super::error::BoardError;
use super::grid::{Board, MAX_PAIRS};
use crate::core::{DealRng, FaceId};

/// Deal `pair_count` pairs (faces `0..pair_count`) in shuffled order.
///
/// # Errors
///
/// Returns [`BoardError::Empty`] when `pair_count` is zero, and
/// [`BoardError::TooLarge`] when it exceeds [`MAX_PAIRS`].
///
/// ```
/// use memory_match::board::deal;
/// use memory_match::core::DealRng;
///
/// let board = deal(8, &mut DealRng::new(3)).unwrap();
/// assert_eq!(board.len(), 16);
/// ```
pub fn deal(pair_count: usize, rng: &mut DealRng) -> Result<Board, BoardError> {
    let pairs = u32::try_from(pair_count)
        .ok()
        .filter(|&pairs| pairs <= MAX_PAIRS)
        .ok_or(BoardError::TooLarge { pairs: pair_count })?;

    let mut faces: Vec<FaceId> = (0..pairs)
        .flat_map(|face| [FaceId::new(face), FaceId::new(face)])
        .collect();
    rng.shuffle(&mut faces);

    debug!(pair_count, seed = rng.seed(), "dealt board");
    Board::new(faces)
}

/// Shuffle an existing board's faces into a new face-down board.
///
/// Used to redeal the same set of faces for a fresh game. A permutation of a
/// valid board is always valid, so this cannot fail.
pub fn redeal(board: &Board, rng: &mut DealRng) -> Board {
    let mut faces: Vec<FaceId> = board.faces().collect();
    rng.shuffle(&mut faces);

    Board::from_valid_faces(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Visibility;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_deal_has_pairs() {
        let board = deal(6, &mut DealRng::new(42)).unwrap();

        let mut counts: FxHashMap<FaceId, usize> = FxHashMap::default();
        for face in board.faces() {
            *counts.entry(face).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = deal(10, &mut DealRng::new(5)).unwrap();
        let b = deal(10, &mut DealRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_zero_pairs() {
        assert_eq!(deal(0, &mut DealRng::new(1)), Err(BoardError::Empty));
    }

    #[test]
    fn test_redeal_keeps_faces_and_hides() {
        let mut rng = DealRng::new(11);
        let original = deal(12, &mut rng).unwrap();
        let next = redeal(&original, &mut rng);

        let mut a: Vec<_> = original.faces().collect();
        let mut b: Vec<_> = next.faces().collect();
        a.sort();
        b.sort();

        assert_eq!(a, b);
        assert!(next.iter().all(|t| t.visibility == Visibility::Hidden));
    }

    #[test]
    fn test_deal_rejects_pair_count_past_id_range() {
        let mut rng = DealRng::new(1);

        let too_many = usize::MAX;
        assert_eq!(
            deal(too_many, &mut rng),
            Err(BoardError::TooLarge { pairs: too_many })
        );

        let just_over = MAX_PAIRS as usize + 1;
        assert_eq!(
            deal(just_over, &mut rng),
            Err(BoardError::TooLarge { pairs: just_over })
        );
    }
}
