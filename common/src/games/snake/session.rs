use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::sync::Mutex;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::games::{FrameSink, SessionRng};
use crate::{debug_log, log};
use super::duel_match::DuelMatch;
use super::input::InputAction;
use super::snapshot::MatchPhase;
use super::types::{BoardSize, MatchOutcome};

pub struct DuelSessionSettings {
    pub board: BoardSize,
    pub frame_interval: Duration,
    /// Random when not set.
    pub seed: Option<u64>,
}

/// Drives a [`DuelMatch`] with a frame clock. The match is only touched inside a frame.
#[derive(Clone)]
pub struct DuelSession {
    pub duel: Arc<Mutex<DuelMatch>>,
    pub frame_interval: Duration,
}

impl DuelSession {
    pub fn create(settings: &DuelSessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!(
            "Creating duel on a {}x{} board, seed {}",
            settings.board.width,
            settings.board.height,
            rng.seed()
        );

        Self {
            duel: Arc::new(Mutex::new(DuelMatch::new(settings.board, rng))),
            frame_interval: settings.frame_interval,
        }
    }

    pub async fn seed(&self) -> u64 {
        self.duel.lock().await.seed()
    }

    /// Starts a fresh match if the current one is over.
    pub async fn restart(&self) -> bool {
        let mut duel = self.duel.lock().await;
        duel.phase().is_over() && duel.on_input(InputAction::Confirm)
    }

    /// Runs frames until the match ends or the input side hangs up.
    ///
    /// Inputs queued since the previous frame are applied before the frame's tick.
    /// Returns the outcome, or `None` if the input channel closed first.
    pub async fn run<S: FrameSink>(
        &self,
        mut input_rx: mpsc::UnboundedReceiver<InputAction>,
        sink: S,
    ) -> Option<MatchOutcome> {
        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        loop {
            frame_timer.tick().await;
            let now = Instant::now();
            let delta = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            let mut disconnected = false;
            let mut duel = self.duel.lock().await;
            loop {
                match input_rx.try_recv() {
                    Ok(action) => {
                        duel.on_input(action);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
            let snapshot = duel.tick(delta);
            drop(duel);

            if snapshot.frame % 300 == 0 {
                debug_log!(
                    "Frame {}: Player {} / AI {}",
                    snapshot.frame,
                    snapshot.player_score,
                    snapshot.ai_score
                );
            }

            let phase = snapshot.phase;
            sink.publish_frame(snapshot).await;

            if let MatchPhase::GameOver(outcome) = phase {
                sink.publish_game_over(outcome).await;
                return Some(outcome);
            }

            if disconnected {
                log!("Input channel closed, leaving the duel");
                return None;
            }
        }
    }
}
