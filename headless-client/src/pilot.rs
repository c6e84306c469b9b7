use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use common::games::snake::{
    BotController, Direction, GridPosition, InputAction, MatchSnapshot, SnakeView,
};
use common::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PilotKind {
    /// Never steers.
    Idle,
    /// Heads for the food, avoiding walls and bodies one step ahead.
    Greedy,
    /// Replays `frame:action` pairs.
    Script,
}

/// Source of player input for a headless duel.
pub enum Pilot {
    Idle,
    Greedy,
    Script(ScriptedInputs),
}

impl Pilot {
    pub fn new(kind: PilotKind, script: Option<&str>) -> Self {
        match kind {
            PilotKind::Idle => Pilot::Idle,
            PilotKind::Greedy => Pilot::Greedy,
            PilotKind::Script => {
                let script = ScriptedInputs::parse(script.unwrap_or_default());
                if script.is_empty() {
                    log!("Script has no usable entries, the player will not steer");
                } else {
                    log!("Loaded {} scripted inputs", script.len());
                }
                Pilot::Script(script)
            }
        }
    }

    /// Called once per received frame.
    pub fn next_inputs(&mut self, snapshot: &MatchSnapshot) -> Vec<InputAction> {
        match self {
            Pilot::Idle => Vec::new(),
            Pilot::Greedy => greedy_turn(snapshot).map(InputAction::from).into_iter().collect(),
            Pilot::Script(script) => script.due(snapshot.frame),
        }
    }

    /// Scripts replay from the start each round.
    pub fn rewind(&mut self) {
        if let Pilot::Script(script) = self {
            script.cursor = 0;
        }
    }
}

fn greedy_turn(snapshot: &MatchSnapshot) -> Option<Direction> {
    let player = &snapshot.player;
    let head = player.head()?;

    [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        .into_iter()
        .filter(|direction| !direction.is_opposite(&player.direction))
        .filter(|&direction| is_safe(head + direction, snapshot))
        .min_by_key(|&direction| BotController::manhattan_distance(head + direction, snapshot.food))
        .filter(|&direction| direction != player.direction)
}

fn is_safe(pos: GridPosition, snapshot: &MatchSnapshot) -> bool {
    let occupied = |snake: &SnakeView| snake.body.contains(&pos);
    snapshot.board.contains(pos) && !occupied(&snapshot.player) && !occupied(&snapshot.ai)
}

pub struct ScriptedInputs {
    steps: Vec<(u64, InputAction)>,
    cursor: usize,
}

impl ScriptedInputs {
    /// Parses `frame:action` pairs separated by commas. Malformed entries are skipped.
    pub fn parse(script: &str) -> Self {
        let mut steps: Vec<(u64, InputAction)> = script
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match Self::parse_entry(entry) {
                Ok(step) => Some(step),
                Err(e) => {
                    log!("Skipping script entry '{}': {}", entry, e);
                    None
                }
            })
            .collect();
        steps.sort_by_key(|(frame, _)| *frame);
        Self { steps, cursor: 0 }
    }

    fn parse_entry(entry: &str) -> Result<(u64, InputAction), String> {
        let (frame, action) = entry
            .split_once(':')
            .ok_or_else(|| "expected frame:action".to_string())?;
        let frame = frame
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("bad frame number: {}", e))?;
        Ok((frame, action.parse()?))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn due(&mut self, frame: u64) -> Vec<InputAction> {
        let start = self.cursor;
        while self.cursor < self.steps.len() && self.steps[self.cursor].0 <= frame {
            self.cursor += 1;
        }
        self.steps[start..self.cursor].iter().map(|(_, action)| *action).collect()
    }
}
