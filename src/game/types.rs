use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::game::error::GameError;

/// Grid coordinate, `(row, col)`, 0-indexed.
///
/// Signed so that a one-step offset from an edge cell can be represented
/// and rejected by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring point one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self { row: self.row + dr, col: self.col + dc }
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Scan order used when looking for an adjacent lever.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit `(row, col)` offset for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Accepts both the command names sent by the web client (`MoveUp`, ...)
/// and the bare direction names (`Up`, ...).
impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveUp" | "Up" => Ok(Direction::Up),
            "MoveDown" | "Down" => Ok(Direction::Down),
            "MoveLeft" | "Left" => Ok(Direction::Left),
            "MoveRight" | "Right" => Ok(Direction::Right),
            other => Err(GameError::UnknownDirection(other.to_string())),
        }
    }
}

/// Content of one grid cell.
///
/// An open gate has no tile of its own: the cell simply becomes `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Player,
    Currency,
    Wall,
    /// Lever whose gate is closed.
    LeverArmed,
    /// Lever whose gate is open.
    LeverDisarmed,
    /// Closed gate.
    Gate,
}

impl Tile {
    pub fn code(self) -> char {
        match self {
            Tile::Empty => '_',
            Tile::Player => 'P',
            Tile::Currency => '$',
            Tile::Wall => 'W',
            Tile::LeverArmed => 'I',
            Tile::LeverDisarmed => 'i',
            Tile::Gate => 'H',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '_' => Some(Tile::Empty),
            'P' => Some(Tile::Player),
            '$' => Some(Tile::Currency),
            'W' => Some(Tile::Wall),
            'I' => Some(Tile::LeverArmed),
            'i' => Some(Tile::LeverDisarmed),
            'H' => Some(Tile::Gate),
            _ => None,
        }
    }

    /// Walls, closed gates and levers (in either state) block movement.
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall | Tile::Gate | Tile::LeverArmed | Tile::LeverDisarmed)
    }

    pub fn is_lever(self) -> bool {
        matches!(self, Tile::LeverArmed | Tile::LeverDisarmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_codes_are_unique_and_reversible() {
        let tiles = [
            Tile::Empty, Tile::Player, Tile::Currency, Tile::Wall,
            Tile::LeverArmed, Tile::LeverDisarmed, Tile::Gate,
        ];
        for tile in tiles {
            assert_eq!(Tile::from_code(tile.code()), Some(tile));
        }
        assert_eq!(Tile::from_code('x'), None);
    }

    #[test]
    fn levers_block_but_are_interactable() {
        assert!(!Tile::LeverArmed.is_passable());
        assert!(!Tile::LeverDisarmed.is_passable());
        assert!(Tile::LeverArmed.is_lever());
        assert!(Tile::Currency.is_passable());
        assert!(!Tile::Gate.is_passable());
        assert!(!Tile::Wall.is_passable());
    }

    #[test]
    fn direction_parses_client_names() {
        assert_eq!("MoveUp".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "Diagonal".parse::<Direction>(),
            Err(GameError::UnknownDirection(s)) if s == "Diagonal"
        ));
    }

    #[test]
    fn step_applies_unit_delta() {
        let p = Point::new(3, 2);
        assert_eq!(p.step(Direction::Up), Point::new(2, 2));
        assert_eq!(p.step(Direction::Down), Point::new(4, 2));
        assert_eq!(p.step(Direction::Left), Point::new(3, 1));
        assert_eq!(p.step(Direction::Right), Point::new(3, 3));
    }
}
