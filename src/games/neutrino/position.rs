//! Board coordinates.

use super::direction::Direction;
use super::types::{BOARD_SIZE, CELL_COUNT};
use serde::{Deserialize, Serialize};

/// A cell coordinate, possibly off the board.
///
/// Coordinates are signed so that a step past an edge is a
/// representable (and rejectable) value rather than a wrapped one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Coordinate {
    /// Column, 0 to 4 on the board.
    pub x: i8,
    /// Row, 0 to 4 on the board. Row 0 is player one's home row.
    pub y: i8,
}

impl Coordinate {
    /// Converts a board index (`x + 5 * y`) back into a coordinate.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT, "board index out of range");
        let size = BOARD_SIZE as usize;
        Self {
            x: (index % size) as i8,
            y: (index / size) as i8,
        }
    }

    /// True when both components lie in `[0, 4]`.
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// The coordinate `n` steps away in `direction`.
    ///
    /// The arithmetic is done in `i16`, so any result reachable from an
    /// `i8` origin with a small step count is exact. Returns `None` only
    /// when the result does not fit in `i8`, which is always off-board.
    pub fn step(self, direction: Direction, n: i16) -> Option<Coordinate> {
        let (dx, dy) = direction.offset();
        let x = i16::from(self.x) + i16::from(dx) * n;
        let y = i16::from(self.y) + i16::from(dy) * n;
        Some(Coordinate {
            x: i8::try_from(x).ok()?,
            y: i8::try_from(y).ok()?,
        })
    }

    /// The eight surrounding coordinates, including off-board ones.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(direction, 1))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..CELL_COUNT {
            let at = Coordinate::from_index(index);
            assert!(at.is_on_board());
            assert_eq!(at.x as usize + 5 * at.y as usize, index);
        }
    }

    #[test]
    fn test_step_past_edge_goes_negative() {
        let origin = Coordinate::new(0, 0);
        let past = origin.step(Direction::NorthWest, 1).unwrap();
        assert_eq!(past, Coordinate::new(-1, -1));
        assert!(!past.is_on_board());
    }

    #[test]
    fn test_step_many() {
        let origin = Coordinate::new(2, 2);
        assert_eq!(origin.step(Direction::South, 2), Some(Coordinate::new(2, 4)));
        assert_eq!(origin.step(Direction::NorthEast, 3), Some(Coordinate::new(5, -1)));
    }

    #[test]
    fn test_step_unrepresentable() {
        let origin = Coordinate::new(120, 0);
        assert_eq!(origin.step(Direction::East, 10), None);
    }

    #[test]
    fn test_corner_neighbours() {
        let on_board = Coordinate::new(0, 0)
            .neighbours()
            .filter(|c| c.is_on_board())
            .count();
        assert_eq!(on_board, 3);
        assert_eq!(Coordinate::new(2, 2).neighbours().count(), 8);
    }
}
