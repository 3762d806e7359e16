//! Board construction errors.

use derive_more::{Display, Error};

use super::grid::MAX_PAIRS;
use crate::core::FaceId;

/// Why a face assignment cannot form a board.
///
/// These are programming errors on the dealing side and are reported at
/// construction time, never mid-game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// No tiles were supplied.
    #[display("board has no tiles")]
    Empty,

    /// Tile count is odd, so the tiles cannot all be paired.
    #[display("board has an odd number of tiles ({len})")]
    OddSize {
        /// Number of tiles supplied.
        len: usize,
    },

    /// A face value does not appear exactly twice.
    #[display("{face} appears {count} times, expected exactly 2")]
    BadMultiplicity {
        /// Offending face.
        face: FaceId,
        /// How often it appeared.
        count: usize,
    },

    /// More pairs than tile IDs can address.
    #[display("{pairs} pairs exceed the limit of {}", MAX_PAIRS)]
    TooLarge {
        /// Number of pairs requested.
        pairs: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(BoardError::Empty.to_string(), "board has no tiles");
        assert_eq!(
            BoardError::OddSize { len: 5 }.to_string(),
            "board has an odd number of tiles (5)"
        );
        assert_eq!(
            BoardError::BadMultiplicity { face: FaceId::new(3), count: 4 }.to_string(),
            "Face(3) appears 4 times, expected exactly 2"
        );
        assert_eq!(
            BoardError::TooLarge { pairs: usize::MAX }.to_string(),
            format!("{} pairs exceed the limit of {}", usize::MAX, MAX_PAIRS)
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BoardError::Empty);
        assert!(err.source().is_none());
    }
}
