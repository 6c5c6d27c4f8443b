//! Text and JSON rendering of one frame.

use crate::config::DisplayConfig;
use timetravel_tictactoe::{Position, RenderData, Square};

/// How frames are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A drawn board, status line and move list.
    #[default]
    Text,
    /// One JSON document per frame.
    Json,
}

/// Draws the 3x3 grid.
///
/// Empty cells show their index (or `.`), winning cells are wrapped in the
/// configured highlight markers.
pub fn render_board(data: &RenderData, display: &DisplayConfig) -> String {
    let highlighted: &[Position] = match data.highlighted_cells() {
        Some(line) => line,
        None => &[],
    };
    let (open, close) = &display.highlight;

    let cell = |pos: Position| {
        let symbol = match data.snapshot().get(pos) {
            Square::Occupied(player) => player.to_string(),
            Square::Empty if display.cell_numbers => pos.to_index().to_string(),
            Square::Empty => ".".to_string(),
        };
        if highlighted.contains(&pos) {
            format!("{}{}{}", open, symbol, close)
        } else {
            format!(" {} ", symbol)
        }
    };

    Position::ALL
        .chunks(3)
        .map(|row| row.iter().map(|pos| cell(*pos)).collect::<Vec<_>>().join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Draws the move list, current step marked with `>`.
pub fn render_moves(data: &RenderData) -> String {
    data.move_list()
        .iter()
        .map(|item| {
            let marker = if *item.is_current() { '>' } else { ' ' };
            format!("{} {}", marker, item.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full text frame: board, status line, then the move list.
pub fn render_text(data: &RenderData, display: &DisplayConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}\n",
        render_board(data, display),
        data.status_text(),
        render_moves(data)
    )
}

/// Frame as a single-line JSON document.
pub fn render_json(data: &RenderData) -> serde_json::Result<String> {
    serde_json::to_string(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::GameController;

    fn won_game() -> GameController {
        let mut game = GameController::new();
        for cell in [0, 3, 4, 5, 8] {
            game.attempt_move(Position::from_index(cell).unwrap());
        }
        game
    }

    #[test]
    fn test_empty_board_with_numbers() {
        let data = GameController::new().render();
        let board = render_board(&data, &DisplayConfig::default());
        assert_eq!(
            board,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_empty_board_without_numbers() {
        let display = DisplayConfig {
            cell_numbers: false,
            ..DisplayConfig::default()
        };
        let board = render_board(&GameController::new().render(), &display);
        assert_eq!(board.lines().next(), Some(" . | . | . "));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let data = won_game().render();
        let board = render_board(&data, &DisplayConfig::default());
        let rows: Vec<_> = board.lines().collect();
        assert_eq!(rows[0], "[X]| 1 | 2 ");
        assert_eq!(rows[2], " O |[X]| O ");
        assert_eq!(rows[4], " 6 | 7 |[X]");
    }

    #[test]
    fn test_text_frame() {
        let mut game = GameController::new();
        game.attempt_move(Position::Center);
        game.jump_to(0);

        let text = render_text(&game.render(), &DisplayConfig::default());
        assert!(text.contains("\nNext player: X\n"));
        assert!(text.contains("> Go to game start - No Move.\n"));
        assert!(text.ends_with("  Go to move #1 - X: (1, 1)\n"));
    }

    #[test]
    fn test_json_frame() {
        let json = render_json(&won_game().render()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status_text"], "Winner: X");
        assert_eq!(value["highlighted_cells"][0], "TopLeft");
        assert!(!json.contains('\n'));
    }
}
