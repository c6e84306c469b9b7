use std::path::{Path, PathBuf};
use std::time::Duration;

use common::config::{ensure_in_range, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::rules::{AI_START, PLAYER_START};
use common::games::snake::BoardSize;
use serde::{Deserialize, Serialize};

use crate::pilot::PilotKind;

const CONFIG_FILE_NAME: &str = "snake_duel_config.yaml";
const MAX_BOARD_CELLS: i32 = 200;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub frame_rate: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub pilot: PilotKind,
    #[serde(default)]
    pub script: Option<String>,
    pub rounds: u32,
    /// A round still running after this long is abandoned.
    pub max_round_seconds: u64,
    #[serde(default)]
    pub render: bool,
    /// Paint rendered boards with truecolor escapes.
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl ClientConfig {
    pub fn board(&self) -> BoardSize {
        BoardSize::from_pixels(self.screen_width, self.screen_height)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    pub fn max_round_duration(&self) -> Duration {
        Duration::from_secs(self.max_round_seconds)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        ensure_in_range("frame_rate", self.frame_rate, 1, 240)?;
        ensure_in_range("rounds", self.rounds, 1, 1000)?;
        ensure_in_range("max_round_seconds", self.max_round_seconds, 1, 86_400)?;

        let board = self.board();
        if board.width > MAX_BOARD_CELLS || board.height > MAX_BOARD_CELLS {
            return Err(format!(
                "Board of {}x{} cells is larger than {} cells per side",
                board.width, board.height, MAX_BOARD_CELLS
            ));
        }
        if !board.contains(PLAYER_START) || !board.contains(AI_START) {
            return Err(format!(
                "Screen of {}x{} pixels is too small: both snakes must start on the board",
                self.screen_width, self.screen_height
            ));
        }
        if self.pilot == PilotKind::Script && self.script.as_deref().is_none_or(str::is_empty) {
            return Err("Script pilot needs a script".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            frame_rate: 60,
            seed: None,
            pilot: PilotKind::Greedy,
            script: None,
            rounds: 1,
            max_round_seconds: 300,
            render: false,
            color: false,
            verbose: false,
        }
    }
}
