//! Board interaction: cursor movement and mark placement.

use crate::game::{BOARD_SIDE, GameState, Placement};

use super::super::app::App;

/// Helper struct for board-side state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Moves the board cursor, wrapping on each axis.
    pub fn move_cursor(&mut self, dcol: isize, drow: isize) {
        let side = BOARD_SIDE as isize;
        let col = (self.app.cursor % BOARD_SIDE) as isize;
        let row = (self.app.cursor / BOARD_SIDE) as isize;

        let col = (col + dcol).rem_euclid(side) as usize;
        let row = (row + drow).rem_euclid(side) as usize;
        self.app.cursor = row * BOARD_SIDE + col;
    }

    pub fn place_at_cursor(&mut self) {
        let cell = self.app.cursor;
        self.place(cell);
    }

    /// Places the active mark, logging the outcome. Rejected moves are
    /// no-ops in the engine; they only produce a log line here.
    pub fn place(&mut self, cell: usize) {
        let mark = self.app.game.next_mark();

        match self.app.game.place_mark(cell) {
            Ok(Placement::Placed) => {
                let step = self.app.game.current_step();
                self.app.log(format!(
                    "{} placed at ({}, {}), move #{}",
                    mark,
                    cell % BOARD_SIDE,
                    cell / BOARD_SIDE,
                    step
                ));
                // Keep the history selection on the move just made.
                self.app.selected_step = step;

                if let Some(winner) = self.app.game.winner() {
                    self.app.log(format!("Winner: {}", winner));
                } else if self.app.game.is_draw() {
                    self.app.log("Draw");
                }
            }
            Ok(Placement::Ignored) => {
                self.app.log(format!("Move at cell {} ignored", cell));
            }
            Err(e) => {
                self.app.log(format!("Move rejected: {}", e));
            }
        }
    }

    /// Resets to a fresh game, keeping the history display order.
    pub fn start_new_game(&mut self) {
        let descending = self.app.game.history_descending();

        self.app.game = GameState::new();
        if descending {
            self.app.game.toggle_history_order();
        }
        self.app.selected_step = 0;
        self.app.log("New game started");
    }
}
