//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Focus};
use super::{GameHandler, HistoryHandler};

/// Helper struct for routing keyboard input to the right handler.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).start_new_game();
            }

            (KeyCode::Char('o' | 'O'), KeyModifiers::CONTROL) => {
                HistoryHandler::new(self.app).toggle_order();
            }

            (KeyCode::Char('z' | 'Z'), KeyModifiers::CONTROL) => {
                HistoryHandler::new(self.app).step_back();
            }

            (KeyCode::Tab, _) => {
                self.app.focus = match self.app.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }

            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => GameHandler::new(self.app).move_cursor(-1, 0),
            KeyCode::Right => GameHandler::new(self.app).move_cursor(1, 0),
            KeyCode::Up => GameHandler::new(self.app).move_cursor(0, -1),
            KeyCode::Down => GameHandler::new(self.app).move_cursor(0, 1),

            KeyCode::Enter | KeyCode::Char(' ') => {
                GameHandler::new(self.app).place_at_cursor();
            }

            // Keys 1-9 map directly to cells 0-8.
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c.to_digit(10).unwrap() as usize - 1;
                GameHandler::new(self.app).place(cell);
            }

            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => HistoryHandler::new(self.app).select_prev(),
            KeyCode::Down => HistoryHandler::new(self.app).select_next(),
            KeyCode::Enter => HistoryHandler::new(self.app).jump_to_selected(),
            _ => {}
        }
    }
}
