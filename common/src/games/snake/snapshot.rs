use std::time::Duration;

use super::snake::Snake;
use super::types::{BoardSize, Direction, GridPosition, MatchOutcome, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    Running,
    Paused,
    GameOver(MatchOutcome),
}

impl MatchPhase {
    pub fn is_over(&self) -> bool {
        matches!(self, MatchPhase::GameOver(_))
    }
}

/// Something worth telling the presentation layer about, produced by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchEvent {
    FoodEaten { side: Side, at: GridPosition },
    PowerUpSpawned { at: GridPosition },
    PowerUpCollected { side: Side, at: GridPosition },
    BoostExpired,
    GameOver(MatchOutcome),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeView {
    pub body: Vec<GridPosition>,
    pub direction: Direction,
    pub speed: f64,
}

impl From<&Snake> for SnakeView {
    fn from(snake: &Snake) -> Self {
        Self {
            body: snake.body().iter().copied().collect(),
            direction: snake.direction(),
            speed: snake.speed,
        }
    }
}

impl SnakeView {
    pub fn head(&self) -> Option<GridPosition> {
        self.body.first().copied()
    }
}

/// Owned copy of everything needed to draw a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSnapshot {
    pub board: BoardSize,
    pub player: SnakeView,
    pub ai: SnakeView,
    pub food: GridPosition,
    pub power_up: Option<GridPosition>,
    pub player_score: i32,
    pub ai_score: i32,
    pub phase: MatchPhase,
    pub clock: Duration,
    pub frame: u64,
    pub events: Vec<MatchEvent>,
}

impl MatchSnapshot {
    pub fn snake(&self, side: Side) -> &SnakeView {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn score(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player_score,
            Side::Ai => self.ai_score,
        }
    }
}
