mod bot_controller;
mod duel_match;
mod input;
mod pickup;
pub mod rules;
mod session;
mod snake;
mod snapshot;
mod types;

pub use bot_controller::BotController;
pub use duel_match::DuelMatch;
pub use input::InputAction;
pub use pickup::{random_position, Food, PowerUp};
pub use session::{DuelSession, DuelSessionSettings};
pub use snake::Snake;
pub use snapshot::{MatchEvent, MatchPhase, MatchSnapshot, SnakeView};
pub use types::{BoardSize, DeathReason, Direction, GridPosition, MatchOutcome, Side};
