use std::fmt;
use std::ops::Add;

use super::rules::CELL_SIZE;

/// A cell on the board. Columns grow to the right, rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub col: i32,
    pub row: i32,
}

impl GridPosition {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl Add<Direction> for GridPosition {
    type Output = GridPosition;

    fn add(self, direction: Direction) -> GridPosition {
        let (dx, dy) = direction.delta();
        GridPosition::new(self.col + dx, self.row + dy)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SnakeCollision,
    SelfCollision,
    ScoreDepleted,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeathReason::WallCollision => "hit the wall",
            DeathReason::SnakeCollision => "ran into the other snake",
            DeathReason::SelfCollision => "ran into itself",
            DeathReason::ScoreDepleted => "ran out of points",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Side,
    pub loser: Side,
    pub reason: DeathReason,
}

impl MatchOutcome {
    pub fn lost_by(loser: Side, reason: DeathReason) -> Self {
        Self {
            winner: loser.opponent(),
            loser,
            reason,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Wins! ({} {})", self.winner, self.loser, self.reason)
    }
}

/// Board dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub width: i32,
    pub height: i32,
}

impl BoardSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Partial cells at the right and bottom edges are not part of the board.
    pub fn from_pixels(width_px: u32, height_px: u32) -> Self {
        Self {
            width: (width_px / CELL_SIZE) as i32,
            height: (height_px / CELL_SIZE) as i32,
        }
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        (0..self.width).contains(&pos.col) && (0..self.height).contains(&pos.row)
    }
}
