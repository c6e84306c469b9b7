use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;

use common::games::snake::{DuelSession, DuelSessionSettings, MatchOutcome, MatchSnapshot, Side};
use common::log;

use crate::board_view::render_board;
use crate::broadcaster::LocalFrameSink;
use crate::config::ClientConfig;
use crate::pilot::Pilot;

#[derive(Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub round: u32,
    /// `None` when the round ran past the time limit and was abandoned.
    pub outcome: Option<MatchOutcome>,
    pub player_score: i32,
    pub ai_score: i32,
    pub frames: u64,
    pub clock: Duration,
}

impl RoundSummary {
    fn from_last_frame(round: u32, outcome: Option<MatchOutcome>, last: Option<&MatchSnapshot>) -> Self {
        Self {
            round,
            outcome,
            player_score: last.map_or(0, |s| s.score(Side::Player)),
            ai_score: last.map_or(0, |s| s.score(Side::Ai)),
            frames: last.map_or(0, |s| s.frame),
            clock: last.map_or(Duration::ZERO, |s| s.clock),
        }
    }
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => "abandoned".to_string(),
        };
        write!(
            f,
            "Round {}: {} | Player {} - AI {} after {} frames ({:.1}s)",
            self.round,
            result,
            self.player_score,
            self.ai_score,
            self.frames,
            self.clock.as_secs_f64()
        )
    }
}

/// Plays `config.rounds` matches back to back on one session, feeding the pilot every frame.
pub async fn run_duel_rounds(config: &ClientConfig, mut pilot: Pilot) -> Vec<RoundSummary> {
    let session = DuelSession::create(&DuelSessionSettings {
        board: config.board(),
        frame_interval: config.frame_interval(),
        seed: config.seed,
    });
    log!("Session seed: {}", session.seed().await);

    let mut summaries = Vec::with_capacity(config.rounds as usize);
    for round in 1..=config.rounds {
        let (outcome, last_frame) = play_round(&session, &mut pilot, config.max_round_duration()).await;
        let summary = RoundSummary::from_last_frame(round, outcome, last_frame.as_ref());
        log!("{}", summary);

        if config.render
            && let Some(frame) = &last_frame
        {
            println!("{}", render_board(frame, config.color));
        }
        summaries.push(summary);

        if round < config.rounds {
            if !session.restart().await {
                session.duel.lock().await.reset();
            }
            pilot.rewind();
        }
    }
    summaries
}

async fn play_round(
    session: &DuelSession,
    pilot: &mut Pilot,
    time_limit: Duration,
) -> (Option<MatchOutcome>, Option<MatchSnapshot>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    let mut input_tx = Some(input_tx);
    let mut last_frame: Option<MatchSnapshot> = None;

    let session_for_game = session.clone();
    let sink = LocalFrameSink::new(frame_tx);
    let mut game_handle = tokio::spawn(async move { session_for_game.run(input_rx, sink).await });

    let deadline = tokio::time::sleep(time_limit);
    tokio::pin!(deadline);

    let outcome = loop {
        tokio::select! {
            result = &mut game_handle => {
                break match result {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        log!("Duel task failed: {}", e);
                        None
                    }
                };
            }
            Some(snapshot) = frame_rx.recv() => {
                if let Some(tx) = &input_tx {
                    for action in pilot.next_inputs(&snapshot) {
                        // Fails only once the session task has returned.
                        let _ = tx.send(action);
                    }
                }
                last_frame = Some(snapshot);
            }
            _ = &mut deadline, if input_tx.is_some() => {
                log!("Round exceeded {:?}, abandoning", time_limit);
                input_tx = None;
            }
        }
    };

    while let Ok(snapshot) = frame_rx.try_recv() {
        last_frame = Some(snapshot);
    }
    (outcome, last_frame)
}
