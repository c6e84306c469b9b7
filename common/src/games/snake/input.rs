use std::str::FromStr;

use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    SteerUp,
    SteerDown,
    SteerLeft,
    SteerRight,
    TogglePause,
    /// Resumes a paused match or restarts a finished one.
    Confirm,
}

impl InputAction {
    pub fn steering(&self) -> Option<Direction> {
        match self {
            InputAction::SteerUp => Some(Direction::Up),
            InputAction::SteerDown => Some(Direction::Down),
            InputAction::SteerLeft => Some(Direction::Left),
            InputAction::SteerRight => Some(Direction::Right),
            InputAction::TogglePause | InputAction::Confirm => None,
        }
    }
}

impl From<Direction> for InputAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => InputAction::SteerUp,
            Direction::Down => InputAction::SteerDown,
            Direction::Left => InputAction::SteerLeft,
            Direction::Right => InputAction::SteerRight,
        }
    }
}

impl FromStr for InputAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(InputAction::SteerUp),
            "down" => Ok(InputAction::SteerDown),
            "left" => Ok(InputAction::SteerLeft),
            "right" => Ok(InputAction::SteerRight),
            "pause" => Ok(InputAction::TogglePause),
            "confirm" | "enter" => Ok(InputAction::Confirm),
            other => Err(format!("Unknown input action: {}", other)),
        }
    }
}
