use std::fmt;

use strum_macros::{Display, EnumIter, EnumString};

/// Identifier of a room. Stable for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub u32);

impl RoomId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        RoomId(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A step from one room to an adjacent one.
///
/// The variant order is the order in which a room lists its exits
/// (`n`, `s`, `w`, `e`), so ordered maps keyed by `Direction` iterate the same way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display,
)]
pub enum Direction {
    #[strum(serialize = "n", serialize = "north", to_string = "n")]
    North,
    #[strum(serialize = "s", serialize = "south", to_string = "s")]
    South,
    #[strum(serialize = "w", serialize = "west", to_string = "w")]
    West,
    #[strum(serialize = "e", serialize = "east", to_string = "e")]
    East,
}

impl Direction {
    /// The direction that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Grid offset of one step, with `y` growing northwards.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}

/// Renders a sequence of moves the compact way (`n e e s`).
pub fn format_path(path: &[Direction]) -> String {
    path.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn inverse_is_an_involution() {
        for d in Direction::iter() {
            assert_ne!(d, d.inverse());
            assert_eq!(d, d.inverse().inverse());
            let (dx, dy) = d.offset();
            let (ix, iy) = d.inverse().offset();
            assert_eq!((dx + ix, dy + iy), (0, 0));
        }
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!(Direction::from_str("n"), Ok(Direction::North));
        assert_eq!(Direction::from_str("west"), Ok(Direction::West));
        assert!(Direction::from_str("up").is_err());
        assert_eq!(Direction::East.to_string(), "e");
    }

    #[test]
    fn exits_are_ordered_n_s_w_e() {
        let all: Vec<Direction> = Direction::iter().collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(
            format_path(&all),
            "n s w e"
        );
    }
}
