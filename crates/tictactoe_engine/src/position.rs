//! Board coordinates for tic-tac-toe moves.

use crate::error::PlacementError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A validated cell coordinate with `row` and `col` in `[0, 2]`.
///
/// Callers hand in raw signed values (straight from UI input) through
/// [`Coord::new`]; anything outside the grid comes back as
/// [`PlacementError::OutOfBounds`] instead of panicking on index.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates, row-major.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Validates a raw row/column pair.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] when either value is outside
    /// `[0, 2]`.
    #[instrument]
    pub fn new(row: i32, col: i32) -> Result<Self, PlacementError> {
        let in_range = |v: i32| usize::try_from(v).ok().filter(|&v| v < SIZE);
        match (in_range(row), in_range(col)) {
            (Some(r), Some(c)) => Ok(Self::at(r, c)),
            _ => Err(PlacementError::OutOfBounds { row, col }),
        }
    }

    /// Row index (0 is the top row).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 is the left column).
    pub fn col(self) -> usize {
        self.col
    }
}

/// Unchecked wire form of a [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: i32,
    col: i32,
}

impl TryFrom<RawCoord> for Coord {
    type Error = PlacementError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_grid() {
        let coord = Coord::new(2, 1).unwrap();
        assert_eq!(coord.row(), 2);
        assert_eq!(coord.col(), 1);
        assert_eq!(Coord::ALL[7], coord);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for (row, col) in [(3, 0), (0, 3), (-1, 0), (0, -1), (i32::MIN, i32::MAX)] {
            assert_eq!(
                Coord::new(row, col),
                Err(PlacementError::OutOfBounds { row, col })
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let coord: Coord = serde_json::from_str(r#"{"row":2,"col":0}"#).unwrap();
        assert_eq!(coord, Coord::ALL[6]);

        for json in [r#"{"row":5,"col":0}"#, r#"{"row":0,"col":-1}"#] {
            let err = serde_json::from_str::<Coord>(json).unwrap_err();
            assert!(err.to_string().contains("off the board"), "{json}: {err}");
        }
    }

    #[test]
    fn test_serialized_coord_reads_back() {
        for coord in Coord::ALL {
            let json = serde_json::to_string(&coord).unwrap();
            assert_eq!(serde_json::from_str::<Coord>(&json).unwrap(), coord);
        }
    }
}
