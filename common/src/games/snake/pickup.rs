use crate::games::SessionRng;
use super::rules::{Color, FOOD_COLOR, POWER_UP_COLOR};
use super::types::{BoardSize, GridPosition};

/// Uniform cell on the board. Snake bodies are not excluded.
pub fn random_position(board: BoardSize, rng: &mut SessionRng) -> GridPosition {
    GridPosition::new(
        rng.random_range(0..board.width),
        rng.random_range(0..board.height),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: GridPosition,
}

impl Food {
    pub const COLOR: Color = FOOD_COLOR;

    pub fn spawn(board: BoardSize, rng: &mut SessionRng) -> Self {
        Self {
            position: random_position(board, rng),
        }
    }

    pub fn relocate(&mut self, board: BoardSize, rng: &mut SessionRng) {
        self.position = random_position(board, rng);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUp {
    pub position: GridPosition,
}

impl PowerUp {
    pub const COLOR: Color = POWER_UP_COLOR;

    pub fn spawn(board: BoardSize, rng: &mut SessionRng) -> Self {
        Self {
            position: random_position(board, rng),
        }
    }
}
