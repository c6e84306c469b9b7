use std::future::Future;

use super::snake::{MatchOutcome, MatchSnapshot};

/// Receives what a running session produces each frame.
pub trait FrameSink: Send + Sync + Clone + 'static {
    fn publish_frame(&self, snapshot: MatchSnapshot) -> impl Future<Output = ()> + Send;

    fn publish_game_over(&self, outcome: MatchOutcome) -> impl Future<Output = ()> + Send;
}
