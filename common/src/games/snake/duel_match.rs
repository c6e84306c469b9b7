use std::time::Duration;

use crate::games::SessionRng;
use crate::{debug_log, log};
use super::bot_controller::BotController;
use super::input::InputAction;
use super::pickup::{Food, PowerUp};
use super::rules::{
    AI_START, AI_START_SPEED, FOOD_SCORE_DELTA, PLAYER_START, PLAYER_START_SPEED,
    POWER_UP_BOOST_DURATION, POWER_UP_SPAWN_RANGE, POWER_UP_SPEED_BOOST, STARTING_SCORE,
};
use super::snake::Snake;
use super::snapshot::{MatchEvent, MatchPhase, MatchSnapshot, SnakeView};
use super::types::{BoardSize, DeathReason, Direction, GridPosition, MatchOutcome, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Idle,
    Advanced,
    Grew,
}

/// One human-vs-AI match: both snakes, the food, the power-up, scores and timers.
///
/// Every tick runs the same fixed order: steps, collisions, food, power-up spawn,
/// power-up collection, boost expiry, score check. The player is always handled
/// before the AI, which decides head-on collisions in the AI's favour.
pub struct DuelMatch {
    board: BoardSize,
    rng: SessionRng,
    player: Snake,
    ai: Snake,
    food: Food,
    power_up: Option<PowerUp>,
    player_score: i32,
    ai_score: i32,
    player_move_timer: f64,
    ai_move_timer: f64,
    boost_started_at: Option<Duration>,
    clock: Duration,
    frame: u64,
    phase: MatchPhase,
}

impl DuelMatch {
    pub fn new(board: BoardSize, mut rng: SessionRng) -> Self {
        let food = Food::spawn(board, &mut rng);
        Self {
            board,
            rng,
            player: Snake::new(PLAYER_START, Direction::Right, PLAYER_START_SPEED),
            ai: Snake::new(AI_START, Direction::Right, AI_START_SPEED),
            food,
            power_up: None,
            player_score: STARTING_SCORE,
            ai_score: STARTING_SCORE,
            player_move_timer: 0.0,
            ai_move_timer: 0.0,
            boost_started_at: None,
            clock: Duration::ZERO,
            frame: 0,
            phase: MatchPhase::Running,
        }
    }

    /// Puts every owned entity back into its starting state. The RNG keeps its position,
    /// so the food lands somewhere new.
    pub fn reset(&mut self) {
        self.reset_entities();
        self.food.relocate(self.board, &mut self.rng);
        log!("Match reset, food at {}", self.food.position);
    }

    fn reset_entities(&mut self) {
        self.player = Snake::new(PLAYER_START, Direction::Right, PLAYER_START_SPEED);
        self.ai = Snake::new(AI_START, Direction::Right, AI_START_SPEED);
        self.power_up = None;
        self.boost_started_at = None;
        self.player_score = STARTING_SCORE;
        self.ai_score = STARTING_SCORE;
        self.player_move_timer = 0.0;
        self.ai_move_timer = 0.0;
        self.clock = Duration::ZERO;
        self.frame = 0;
        self.phase = MatchPhase::Running;
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            MatchPhase::GameOver(outcome) => Some(outcome),
            MatchPhase::Running | MatchPhase::Paused => None,
        }
    }

    pub fn snake(&self, side: Side) -> &Snake {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn score(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player_score,
            Side::Ai => self.ai_score,
        }
    }

    pub fn food(&self) -> GridPosition {
        self.food.position
    }

    pub fn power_up(&self) -> Option<GridPosition> {
        self.power_up.map(|p| p.position)
    }

    /// Applies one input event. Returns whether it changed anything.
    pub fn on_input(&mut self, action: InputAction) -> bool {
        match (self.phase, action) {
            (MatchPhase::Running, InputAction::TogglePause) => {
                self.phase = MatchPhase::Paused;
                true
            }
            (MatchPhase::Running, InputAction::Confirm) => false,
            (MatchPhase::Running, steer) => match steer.steering() {
                Some(direction) => self.player.set_direction(direction),
                None => false,
            },
            (MatchPhase::Paused, InputAction::TogglePause | InputAction::Confirm) => {
                self.phase = MatchPhase::Running;
                true
            }
            (MatchPhase::GameOver(_), InputAction::Confirm) => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Advances the match by `delta_seconds` of wall-clock time.
    ///
    /// Does nothing unless the match is running. Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, delta_seconds: f64) -> MatchSnapshot {
        if self.phase != MatchPhase::Running {
            return self.snapshot_with(Vec::new());
        }

        let delta = if delta_seconds.is_finite() && delta_seconds > 0.0 {
            delta_seconds
        } else {
            0.0
        };
        let mut events = Vec::new();

        self.frame += 1;
        self.clock += Duration::try_from_secs_f64(delta).unwrap_or_default();
        self.player_move_timer += delta;
        self.ai_move_timer += delta;

        let player_step = self.step_player();
        let ai_step = self.step_ai();

        if let Some(outcome) = self.fatal_collision() {
            self.finish(outcome, &mut events);
            return self.snapshot_with(events);
        }

        self.resolve_food(Side::Player, player_step, &mut events);
        self.resolve_food(Side::Ai, ai_step, &mut events);
        self.try_spawn_power_up(&mut events);
        self.resolve_power_up(&mut events);
        self.expire_boost(&mut events);

        if self.player_score <= 0 {
            self.finish(MatchOutcome::lost_by(Side::Player, DeathReason::ScoreDepleted), &mut events);
        } else if self.ai_score <= 0 {
            self.finish(MatchOutcome::lost_by(Side::Ai, DeathReason::ScoreDepleted), &mut events);
        }

        self.snapshot_with(events)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.snapshot_with(Vec::new())
    }

    fn snapshot_with(&self, events: Vec<MatchEvent>) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board,
            player: SnakeView::from(&self.player),
            ai: SnakeView::from(&self.ai),
            food: self.food.position,
            power_up: self.power_up(),
            player_score: self.player_score,
            ai_score: self.ai_score,
            phase: self.phase,
            clock: self.clock,
            frame: self.frame,
            events,
        }
    }

    fn step_player(&mut self) -> Step {
        let interval = 1.0 / self.player.speed;
        if self.player_move_timer < interval {
            return Step::Idle;
        }
        self.player_move_timer -= interval;
        Self::step_snake(&mut self.player, self.food.position)
    }

    fn step_ai(&mut self) -> Step {
        let interval = 1.0 / self.ai.speed;
        if self.ai_move_timer < interval {
            return Step::Idle;
        }
        self.ai_move_timer -= interval;
        if let Some(direction) = BotController::steer_towards(self.ai.head(), self.food.position) {
            self.ai.face(direction);
        }
        Self::step_snake(&mut self.ai, self.food.position)
    }

    /// A step that lands on the food grows the snake instead of moving it.
    fn step_snake(snake: &mut Snake, food: GridPosition) -> Step {
        if snake.next_head() == food {
            snake.grow();
            Step::Grew
        } else {
            snake.advance();
            Step::Advanced
        }
    }

    fn fatal_collision(&self) -> Option<MatchOutcome> {
        [Side::Player, Side::Ai].into_iter().find_map(|side| {
            self.death_reason(side)
                .map(|reason| MatchOutcome::lost_by(side, reason))
        })
    }

    fn death_reason(&self, side: Side) -> Option<DeathReason> {
        let snake = self.snake(side);
        let head = snake.head();

        if !self.board.contains(head) {
            Some(DeathReason::WallCollision)
        } else if self.snake(side.opponent()).contains(head) {
            Some(DeathReason::SnakeCollision)
        } else if snake.hits_own_body() {
            Some(DeathReason::SelfCollision)
        } else {
            None
        }
    }

    fn resolve_food(&mut self, side: Side, step: Step, events: &mut Vec<MatchEvent>) {
        let at = self.food.position;
        if self.snake(side).head() != at {
            return;
        }

        // Food can appear under a head that did not step this tick.
        if step != Step::Grew {
            self.snake_mut(side).grow();
        }

        *self.score_mut(side) += FOOD_SCORE_DELTA;
        *self.score_mut(side.opponent()) -= FOOD_SCORE_DELTA;
        self.food.relocate(self.board, &mut self.rng);

        log!(
            "{} ate food at {}. Scores: Player {} / AI {}. Next food at {}",
            side,
            at,
            self.player_score,
            self.ai_score,
            self.food.position
        );
        events.push(MatchEvent::FoodEaten { side, at });
    }

    fn try_spawn_power_up(&mut self, events: &mut Vec<MatchEvent>) {
        if self.power_up.is_some() || !self.rng.hits_zero_in(POWER_UP_SPAWN_RANGE) {
            return;
        }

        let power_up = PowerUp::spawn(self.board, &mut self.rng);
        log!("Power-up spawned at {}", power_up.position);
        events.push(MatchEvent::PowerUpSpawned { at: power_up.position });
        self.power_up = Some(power_up);
    }

    fn resolve_power_up(&mut self, events: &mut Vec<MatchEvent>) {
        let Some(power_up) = self.power_up else {
            return;
        };

        let Some(side) = [Side::Player, Side::Ai]
            .into_iter()
            .find(|&side| self.snake(side).head() == power_up.position)
        else {
            return;
        };

        let snake = self.snake_mut(side);
        snake.speed += POWER_UP_SPEED_BOOST;
        let speed = snake.speed;
        self.power_up = None;
        self.boost_started_at = Some(self.clock);

        log!("{} collected power-up at {}, speed now {}", side, power_up.position, speed);
        events.push(MatchEvent::PowerUpCollected { side, at: power_up.position });
    }

    /// Expiry restores both snakes, whoever collected the boost.
    fn expire_boost(&mut self, events: &mut Vec<MatchEvent>) {
        let Some(started_at) = self.boost_started_at else {
            return;
        };
        if self.clock.saturating_sub(started_at) < POWER_UP_BOOST_DURATION {
            return;
        }

        self.player.speed = PLAYER_START_SPEED;
        self.ai.speed = AI_START_SPEED;
        self.boost_started_at = None;

        debug_log!("Boost expired at {:?}", self.clock);
        events.push(MatchEvent::BoostExpired);
    }

    fn finish(&mut self, outcome: MatchOutcome, events: &mut Vec<MatchEvent>) {
        self.phase = MatchPhase::GameOver(outcome);
        log!(
            "{} Final scores: Player {} / AI {} after {} frames",
            outcome,
            self.player_score,
            self.ai_score,
            self.frame
        );
        events.push(MatchEvent::GameOver(outcome));
    }

    fn snake_mut(&mut self, side: Side) -> &mut Snake {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    fn score_mut(&mut self, side: Side) -> &mut i32 {
        match side {
            Side::Player => &mut self.player_score,
            Side::Ai => &mut self.ai_score,
        }
    }

    #[cfg(test)]
    pub(crate) fn replace_snake(&mut self, side: Side, snake: Snake) {
        *self.snake_mut(side) = snake;
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, position: GridPosition) {
        self.food.position = position;
    }

    #[cfg(test)]
    pub(crate) fn place_power_up(&mut self, position: GridPosition) {
        self.power_up = Some(PowerUp { position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: BoardSize = BoardSize::new(40, 30);
    const FAR_FOOD: GridPosition = GridPosition::new(30, 28);

    fn create_match() -> DuelMatch {
        let mut duel = DuelMatch::new(BOARD, SessionRng::new(42));
        duel.place_food(FAR_FOOD);
        duel
    }

    fn player_interval() -> f64 {
        1.0 / PLAYER_START_SPEED
    }

    fn ai_interval() -> f64 {
        1.0 / AI_START_SPEED
    }

    fn assert_lost(duel: &DuelMatch, loser: Side, reason: DeathReason) {
        assert_eq!(duel.outcome(), Some(MatchOutcome::lost_by(loser, reason)));
    }

    #[test]
    fn test_new_match_starting_state() {
        let duel = create_match();
        assert_eq!(duel.phase(), MatchPhase::Running);
        assert_eq!(duel.snake(Side::Player).head(), PLAYER_START);
        assert_eq!(duel.snake(Side::Ai).head(), AI_START);
        assert_eq!(duel.snake(Side::Player).direction(), Direction::Right);
        assert_eq!(duel.snake(Side::Ai).direction(), Direction::Right);
        assert_eq!(duel.score(Side::Player), STARTING_SCORE);
        assert_eq!(duel.score(Side::Ai), STARTING_SCORE);
        assert_eq!(duel.power_up(), None);
        assert!(BOARD.contains(DuelMatch::new(BOARD, SessionRng::new(1)).food()));
    }

    #[test]
    fn test_snakes_move_on_their_own_cadence() {
        let mut duel = create_match();
        duel.tick(player_interval());
        assert_eq!(duel.snake(Side::Player).head(), GridPosition::new(11, 15));
        assert_eq!(duel.snake(Side::Ai).head(), AI_START);

        duel.tick(player_interval());
        assert_eq!(duel.snake(Side::Player).head(), GridPosition::new(12, 15));
        assert_eq!(duel.snake(Side::Ai).head(), GridPosition::new(30, 16));
    }

    #[test]
    fn test_at_most_one_step_per_tick() {
        let mut duel = create_match();
        duel.tick(1.0);
        assert_eq!(duel.snake(Side::Player).head(), GridPosition::new(11, 15));
    }

    #[test]
    fn test_ai_steers_towards_food_before_stepping() {
        let mut duel = create_match();
        duel.place_food(GridPosition::new(30, 25));
        duel.tick(ai_interval());
        assert_eq!(duel.snake(Side::Ai).direction(), Direction::Down);
        assert_eq!(duel.snake(Side::Ai).head(), GridPosition::new(30, 16));
    }

    #[test]
    fn test_wall_collision_on_left_edge() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Player,
            Snake::new(GridPosition::new(0, 5), Direction::Left, PLAYER_START_SPEED),
        );
        let snapshot = duel.tick(player_interval());
        assert_lost(&duel, Side::Player, DeathReason::WallCollision);
        assert!(snapshot.events.contains(&MatchEvent::GameOver(MatchOutcome::lost_by(
            Side::Player,
            DeathReason::WallCollision
        ))));
    }

    #[test]
    fn test_wall_collision_on_right_edge() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Player,
            Snake::new(GridPosition::new(BOARD.width - 1, 5), Direction::Right, PLAYER_START_SPEED),
        );
        duel.tick(player_interval());
        assert_eq!(duel.snake(Side::Player).head().col, BOARD.width);
        assert_lost(&duel, Side::Player, DeathReason::WallCollision);
    }

    #[test]
    fn test_self_collision_ends_match() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Player,
            Snake::from_body(
                vec![
                    GridPosition::new(5, 5),
                    GridPosition::new(6, 5),
                    GridPosition::new(6, 6),
                    GridPosition::new(5, 6),
                    GridPosition::new(4, 6),
                ],
                Direction::Down,
                PLAYER_START_SPEED,
            ),
        );
        duel.tick(player_interval());
        assert_lost(&duel, Side::Player, DeathReason::SelfCollision);
    }

    #[test]
    fn test_ai_running_into_player_loses() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Player,
            Snake::from_body(
                vec![GridPosition::new(20, 10), GridPosition::new(20, 11), GridPosition::new(20, 12)],
                Direction::Up,
                PLAYER_START_SPEED,
            ),
        );
        duel.replace_snake(
            Side::Ai,
            Snake::new(GridPosition::new(21, 11), Direction::Left, AI_START_SPEED),
        );
        duel.place_food(GridPosition::new(0, 11));
        duel.tick(ai_interval());
        assert_lost(&duel, Side::Ai, DeathReason::SnakeCollision);
    }

    #[test]
    fn test_head_on_collision_is_reported_as_player_death() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Player,
            Snake::new(GridPosition::new(20, 15), Direction::Right, PLAYER_START_SPEED),
        );
        duel.replace_snake(
            Side::Ai,
            Snake::new(GridPosition::new(22, 15), Direction::Left, AI_START_SPEED),
        );
        duel.place_food(GridPosition::new(0, 15));
        duel.tick(ai_interval());
        assert_eq!(duel.snake(Side::Player).head(), duel.snake(Side::Ai).head());
        assert_lost(&duel, Side::Player, DeathReason::SnakeCollision);
    }

    #[test]
    fn test_ai_reversal_into_own_body_is_fatal() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Ai,
            Snake::from_body(
                vec![GridPosition::new(30, 15), GridPosition::new(29, 15), GridPosition::new(28, 15)],
                Direction::Right,
                AI_START_SPEED,
            ),
        );
        duel.place_food(GridPosition::new(5, 20));
        duel.tick(ai_interval());
        assert_lost(&duel, Side::Ai, DeathReason::SelfCollision);
    }

    #[test]
    fn test_eating_food_moves_score_and_relocates_food() {
        let mut duel = create_match();
        let food = GridPosition::new(11, 15);
        duel.place_food(food);

        let snapshot = duel.tick(player_interval());

        assert_eq!(duel.snake(Side::Player).len(), 2);
        assert_eq!(duel.snake(Side::Player).head(), food);
        assert_eq!(duel.score(Side::Player), STARTING_SCORE + FOOD_SCORE_DELTA);
        assert_eq!(duel.score(Side::Ai), STARTING_SCORE - FOOD_SCORE_DELTA);
        assert!(BOARD.contains(duel.food()));
        assert!(snapshot.events.contains(&MatchEvent::FoodEaten { side: Side::Player, at: food }));
    }

    #[test]
    fn test_food_under_idle_head_is_eaten_and_grows() {
        let mut duel = create_match();
        duel.place_food(PLAYER_START);
        duel.tick(0.01);
        assert_eq!(duel.snake(Side::Player).len(), 2);
        assert_eq!(duel.score(Side::Player), STARTING_SCORE + FOOD_SCORE_DELTA);
    }

    #[test]
    fn test_score_depletion_ends_match() {
        let mut duel = DuelMatch::new(BoardSize::new(60, 30), SessionRng::new(5));
        for round in 1..=10 {
            let next = duel.snake(Side::Ai).next_head();
            duel.place_food(next);
            duel.tick(ai_interval());
            assert_eq!(duel.score(Side::Ai), STARTING_SCORE + round * FOOD_SCORE_DELTA);
            if round < 10 {
                assert_eq!(duel.phase(), MatchPhase::Running);
            }
        }
        assert_eq!(duel.score(Side::Player), 0);
        assert_lost(&duel, Side::Player, DeathReason::ScoreDepleted);
        assert_eq!(duel.snake(Side::Ai).len(), 11);
    }

    #[test]
    fn test_collision_takes_precedence_over_score() {
        let mut duel = create_match();
        duel.player_score = FOOD_SCORE_DELTA;
        duel.replace_snake(
            Side::Player,
            Snake::new(GridPosition::new(0, 3), Direction::Left, PLAYER_START_SPEED),
        );
        duel.place_food(GridPosition::new(31, 15));
        duel.tick(ai_interval());
        assert_lost(&duel, Side::Player, DeathReason::WallCollision);
        assert_eq!(duel.score(Side::Player), FOOD_SCORE_DELTA);
    }

    #[test]
    fn test_power_up_collection_boosts_collector() {
        let mut duel = create_match();
        duel.place_power_up(GridPosition::new(11, 15));
        let snapshot = duel.tick(player_interval());
        assert_eq!(duel.power_up(), None);
        assert_eq!(duel.snake(Side::Player).speed, PLAYER_START_SPEED + POWER_UP_SPEED_BOOST);
        assert_eq!(duel.snake(Side::Ai).speed, AI_START_SPEED);
        assert!(snapshot.events.contains(&MatchEvent::PowerUpCollected {
            side: Side::Player,
            at: GridPosition::new(11, 15)
        }));
    }

    #[test]
    fn test_power_up_stays_until_collected() {
        let mut duel = create_match();
        duel.place_power_up(GridPosition::new(2, 28));
        for _ in 0..10 {
            duel.tick(0.5);
        }
        assert_eq!(duel.power_up(), Some(GridPosition::new(2, 28)));
    }

    #[test]
    fn test_boost_expires_after_exactly_five_seconds() {
        let mut duel = create_match();
        duel.place_food(GridPosition::new(30, 25));
        duel.place_power_up(GridPosition::new(11, 15));
        duel.tick(player_interval());
        let boosted = PLAYER_START_SPEED + POWER_UP_SPEED_BOOST;
        assert_eq!(duel.snake(Side::Player).speed, boosted);

        duel.tick(4.5);
        assert_eq!(duel.snake(Side::Player).speed, boosted);

        let snapshot = duel.tick(0.5);
        assert_eq!(duel.snake(Side::Player).speed, PLAYER_START_SPEED);
        assert_eq!(duel.snake(Side::Ai).speed, AI_START_SPEED);
        assert!(snapshot.events.contains(&MatchEvent::BoostExpired));
    }

    #[test]
    fn test_boost_expiry_resets_both_snakes() {
        let mut duel = create_match();
        duel.place_food(GridPosition::new(38, 15));
        duel.place_power_up(GridPosition::new(11, 15));
        duel.tick(player_interval());

        duel.place_power_up(GridPosition::new(31, 15));
        duel.tick(player_interval());
        assert_eq!(duel.snake(Side::Ai).head(), GridPosition::new(31, 15));
        assert_eq!(duel.snake(Side::Ai).speed, AI_START_SPEED + POWER_UP_SPEED_BOOST);
        assert_eq!(duel.snake(Side::Player).speed, PLAYER_START_SPEED + POWER_UP_SPEED_BOOST);

        duel.tick(5.0);
        assert_eq!(duel.snake(Side::Player).speed, PLAYER_START_SPEED);
        assert_eq!(duel.snake(Side::Ai).speed, AI_START_SPEED);
    }

    fn spawned_at(events: &[MatchEvent]) -> Option<GridPosition> {
        events.iter().find_map(|event| match event {
            MatchEvent::PowerUpSpawned { at } => Some(*at),
            _ => None,
        })
    }

    #[test]
    fn test_power_up_spawns_on_board_eventually() {
        let mut duel = create_match();
        let (at, snapshot) = (0..20_000)
            .find_map(|_| {
                let snapshot = duel.tick(0.0);
                spawned_at(&snapshot.events).map(|at| (at, snapshot))
            })
            .expect("a power-up should spawn within 20 000 frames");

        assert!(BOARD.contains(at));
        let collected_at_once = snapshot
            .events
            .iter()
            .any(|event| matches!(event, MatchEvent::PowerUpCollected { .. }));
        if !collected_at_once {
            assert_eq!(duel.power_up(), Some(at));
        }
    }

    #[test]
    fn test_no_second_power_up_while_one_is_present() {
        let mut duel = create_match();
        duel.place_power_up(GridPosition::new(2, 28));
        for _ in 0..20_000 {
            let snapshot = duel.tick(0.0);
            assert_eq!(spawned_at(&snapshot.events), None);
        }
        assert_eq!(duel.power_up(), Some(GridPosition::new(2, 28)));
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut duel = create_match();
        duel.tick(0.1);
        assert!(duel.on_input(InputAction::TogglePause));
        let before = duel.snapshot();

        let during = duel.tick(10.0);
        assert_eq!(during, before);
        assert_eq!(during.phase, MatchPhase::Paused);

        assert!(!duel.on_input(InputAction::SteerUp));
        assert_eq!(duel.snake(Side::Player).direction(), Direction::Right);

        assert!(duel.on_input(InputAction::TogglePause));
        assert_eq!(duel.phase(), MatchPhase::Running);
    }

    #[test]
    fn test_confirm_resumes_paused_match() {
        let mut duel = create_match();
        duel.on_input(InputAction::TogglePause);
        assert!(duel.on_input(InputAction::Confirm));
        assert_eq!(duel.phase(), MatchPhase::Running);
        assert!(!duel.on_input(InputAction::Confirm));
    }

    #[test]
    fn test_steering_respects_reversal_rule() {
        let mut duel = create_match();
        assert!(!duel.on_input(InputAction::SteerLeft));
        assert_eq!(duel.snake(Side::Player).direction(), Direction::Right);
        assert!(duel.on_input(InputAction::SteerUp));
        assert_eq!(duel.snake(Side::Player).direction(), Direction::Up);
    }

    #[test]
    fn test_game_over_is_terminal_until_confirm() {
        let mut duel = create_match();
        duel.replace_snake(
            Side::Player,
            Snake::new(GridPosition::new(0, 5), Direction::Left, PLAYER_START_SPEED),
        );
        duel.tick(player_interval());
        let finished = duel.snapshot();

        assert!(!duel.on_input(InputAction::TogglePause));
        assert!(!duel.on_input(InputAction::SteerUp));
        assert_eq!(duel.tick(1.0), finished);

        assert!(duel.on_input(InputAction::Confirm));
        assert_eq!(duel.phase(), MatchPhase::Running);
        assert_eq!(duel.snake(Side::Player).head(), PLAYER_START);
        assert_eq!(duel.score(Side::Player), STARTING_SCORE);
    }

    #[test]
    fn test_reset_twice_gives_same_starting_state() {
        let mut duel = create_match();
        duel.place_power_up(GridPosition::new(11, 15));
        for _ in 0..5 {
            duel.tick(0.25);
        }

        duel.reset();
        let mut first = duel.snapshot();
        duel.reset();
        let mut second = duel.snapshot();

        assert!(BOARD.contains(first.food));
        assert!(BOARD.contains(second.food));
        first.food = GridPosition::new(0, 0);
        second.food = GridPosition::new(0, 0);
        assert_eq!(first, second);
        assert_eq!(first.power_up, None);
        assert_eq!(first.frame, 0);
        assert_eq!(first.clock, Duration::ZERO);
        assert_eq!(first.player.body, vec![PLAYER_START]);
        assert_eq!(first.ai.speed, AI_START_SPEED);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = DuelMatch::new(BOARD, SessionRng::new(2024));
        let mut b = DuelMatch::new(BOARD, SessionRng::new(2024));
        for frame in 0..600 {
            if frame == 30 {
                a.on_input(InputAction::SteerDown);
                b.on_input(InputAction::SteerDown);
            }
            assert_eq!(a.tick(1.0 / 60.0), b.tick(1.0 / 60.0));
        }
    }

    #[test]
    fn test_invalid_delta_counts_as_zero() {
        let mut duel = create_match();
        let snapshot = duel.tick(f64::NAN);
        assert_eq!(snapshot.clock, Duration::ZERO);
        duel.tick(-3.0);
        assert_eq!(duel.snake(Side::Player).head(), PLAYER_START);
    }
}
