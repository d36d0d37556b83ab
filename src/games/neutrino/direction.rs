//! Compass directions and move geometry.

use serde::{Deserialize, Serialize};

/// One of the eight compass directions.
///
/// North is towards row 0, west towards column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Decreasing y.
    North,
    /// Decreasing y, increasing x.
    NorthEast,
    /// Increasing x.
    East,
    /// Increasing y and x.
    SouthEast,
    /// Increasing y.
    South,
    /// Increasing y, decreasing x.
    SouthWest,
    /// Decreasing x.
    West,
    /// Decreasing y and x.
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Derives the direction of a delta from its signs.
    ///
    /// The vertical and horizontal components are composed independently,
    /// so any non-zero delta maps to a direction; whether the delta is a
    /// straight line is a separate question. A zero delta has no direction.
    pub fn from_delta(dx: i16, dy: i16) -> Option<Self> {
        use std::cmp::Ordering::{Equal, Greater, Less};

        match (dy.cmp(&0), dx.cmp(&0)) {
            (Less, Equal) => Some(Direction::North),
            (Less, Greater) => Some(Direction::NorthEast),
            (Equal, Greater) => Some(Direction::East),
            (Greater, Greater) => Some(Direction::SouthEast),
            (Greater, Equal) => Some(Direction::South),
            (Greater, Less) => Some(Direction::SouthWest),
            (Equal, Less) => Some(Direction::West),
            (Less, Less) => Some(Direction::NorthWest),
            (Equal, Equal) => None,
        }
    }

    /// Unit step `(dx, dy)`.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// True when a delta is horizontal, vertical or a perfect diagonal.
///
/// The zero delta counts as straight; it is rejected separately.
pub fn is_straight(dx: i16, dy: i16) -> bool {
    dx == 0 || dy == 0 || dx.abs() == dy.abs()
}

/// Number of single steps a straight delta covers.
pub fn step_count(dx: i16, dy: i16) -> i16 {
    dx.abs().max(dy.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_delta_composes_components() {
        assert_eq!(Direction::from_delta(0, -3), Some(Direction::North));
        assert_eq!(Direction::from_delta(2, -2), Some(Direction::NorthEast));
        assert_eq!(Direction::from_delta(4, 0), Some(Direction::East));
        assert_eq!(Direction::from_delta(1, 1), Some(Direction::SouthEast));
        assert_eq!(Direction::from_delta(0, 2), Some(Direction::South));
        assert_eq!(Direction::from_delta(-1, 1), Some(Direction::SouthWest));
        assert_eq!(Direction::from_delta(-4, 0), Some(Direction::West));
        assert_eq!(Direction::from_delta(-2, -2), Some(Direction::NorthWest));
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn test_offset_matches_from_delta() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.offset();
            assert_eq!(Direction::from_delta(dx.into(), dy.into()), Some(direction));
        }
        assert_eq!(Direction::iter().count(), Direction::ALL.len());
    }

    #[test]
    fn test_straightness() {
        assert!(is_straight(0, 3));
        assert!(is_straight(-2, 0));
        assert!(is_straight(3, -3));
        assert!(!is_straight(1, 2));
        assert!(!is_straight(-3, 1));
        assert_eq!(step_count(-3, 3), 3);
        assert_eq!(step_count(0, -4), 4);
    }
}
