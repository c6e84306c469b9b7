use colored::Colorize;
use common::games::snake::rules::{AI_COLOR, Color, PLAYER_COLOR};
use common::games::snake::{Food, GridPosition, MatchPhase, MatchSnapshot, PowerUp, Side};

const EMPTY: char = '.';
const FOOD: char = '*';
const POWER_UP: char = '+';

fn side_color(side: Side) -> Color {
    match side {
        Side::Player => PLAYER_COLOR,
        Side::Ai => AI_COLOR,
    }
}

fn side_glyphs(side: Side) -> (char, char) {
    match side {
        Side::Player => ('P', 'p'),
        Side::Ai => ('A', 'a'),
    }
}

/// Draws a snapshot as text, one character per cell. Heads are upper case.
///
/// With `with_color` set, every entity is painted with its color tag as a truecolor escape.
pub fn render_board(snapshot: &MatchSnapshot, with_color: bool) -> String {
    let width = snapshot.board.width.max(0) as usize;
    let height = snapshot.board.height.max(0) as usize;
    let mut rows: Vec<Vec<(char, Option<Color>)>> = vec![vec![(EMPTY, None); width]; height];

    let mut put = |pos: GridPosition, glyph: char, color: Color| {
        if snapshot.board.contains(pos) {
            rows[pos.row as usize][pos.col as usize] = (glyph, Some(color));
        }
    };

    put(snapshot.food, FOOD, Food::COLOR);
    if let Some(power_up) = snapshot.power_up {
        put(power_up, POWER_UP, PowerUp::COLOR);
    }
    // Player drawn last, so it sits on top where bodies overlap.
    for side in [Side::Ai, Side::Player] {
        let (head, body) = side_glyphs(side);
        for (index, &segment) in snapshot.snake(side).body.iter().enumerate().rev() {
            put(segment, if index == 0 { head } else { body }, side_color(side));
        }
    }

    let mut lines = vec![status_line(snapshot)];
    lines.extend(rows.into_iter().map(|row| {
        row.into_iter()
            .map(|(glyph, color)| match color {
                Some((r, g, b)) if with_color => glyph.to_string().truecolor(r, g, b).to_string(),
                _ => glyph.to_string(),
            })
            .collect::<String>()
    }));
    lines.join("\n")
}

fn status_line(snapshot: &MatchSnapshot) -> String {
    let phase = match snapshot.phase {
        MatchPhase::Running => "running".to_string(),
        MatchPhase::Paused => "paused".to_string(),
        MatchPhase::GameOver(outcome) => outcome.to_string(),
    };
    format!(
        "Player: {}  AI: {}  [{}]",
        snapshot.score(Side::Player),
        snapshot.score(Side::Ai),
        phase
    )
}
