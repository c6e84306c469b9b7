//! Fixed rules of the duel. None of these are exposed as options.

use std::time::Duration;

use super::types::GridPosition;

pub const CELL_SIZE: u32 = 20;

pub const PLAYER_START: GridPosition = GridPosition::new(10, 15);
pub const AI_START: GridPosition = GridPosition::new(30, 15);

pub const PLAYER_START_SPEED: f64 = 5.0;
pub const AI_START_SPEED: f64 = 3.0;

pub const STARTING_SCORE: i32 = 100;
pub const FOOD_SCORE_DELTA: i32 = 10;

/// A power-up spawns when a uniform draw from `0..=POWER_UP_SPAWN_RANGE` is zero.
pub const POWER_UP_SPAWN_RANGE: u32 = 500;
pub const POWER_UP_SPEED_BOOST: f64 = 2.0;
pub const POWER_UP_BOOST_DURATION: Duration = Duration::from_millis(5000);

pub type Color = (u8, u8, u8);

pub const PLAYER_COLOR: Color = (0, 255, 0);
pub const AI_COLOR: Color = (0, 0, 255);
pub const FOOD_COLOR: Color = (255, 0, 0);
pub const POWER_UP_COLOR: Color = (255, 255, 0);
