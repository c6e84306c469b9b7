use tokio::sync::mpsc;

use common::games::FrameSink;
use common::games::snake::{MatchOutcome, MatchSnapshot};
use common::log;

/// Hands frames from the session task to the runner.
#[derive(Clone)]
pub struct LocalFrameSink {
    frame_tx: mpsc::UnboundedSender<MatchSnapshot>,
}

impl LocalFrameSink {
    pub fn new(frame_tx: mpsc::UnboundedSender<MatchSnapshot>) -> Self {
        Self { frame_tx }
    }
}

impl FrameSink for LocalFrameSink {
    async fn publish_frame(&self, snapshot: MatchSnapshot) {
        // Runner gone means the round was abandoned; frames are dropped.
        let _ = self.frame_tx.send(snapshot);
    }

    async fn publish_game_over(&self, outcome: MatchOutcome) {
        log!("Game over: {}", outcome);
    }
}
