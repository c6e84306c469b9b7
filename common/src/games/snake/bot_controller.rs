use super::types::{Direction, GridPosition};

pub struct BotController;

impl BotController {
    /// Greedy step towards the food: columns first, then rows.
    ///
    /// No lookahead and no obstacle avoidance; a bot following this can trap itself.
    /// Returns `None` when the head is already on the food cell.
    pub fn steer_towards(head: GridPosition, food: GridPosition) -> Option<Direction> {
        if head.col < food.col {
            Some(Direction::Right)
        } else if head.col > food.col {
            Some(Direction::Left)
        } else if head.row < food.row {
            Some(Direction::Down)
        } else if head.row > food.row {
            Some(Direction::Up)
        } else {
            None
        }
    }

    pub fn manhattan_distance(a: GridPosition, b: GridPosition) -> i32 {
        (a.col - b.col).abs() + (a.row - b.row).abs()
    }
}
