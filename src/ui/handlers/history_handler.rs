//! History list navigation: selection movement, jumps, and the display
//! order toggle.

use super::super::app::App;

/// Helper struct for history-side state transitions.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Moves the selection one entry down the displayed list.
    pub fn select_next(&mut self) {
        let last = self.app.game.history().len() - 1;
        if self.app.game.history_descending() {
            self.app.selected_step = self.app.selected_step.saturating_sub(1);
        } else if self.app.selected_step < last {
            self.app.selected_step += 1;
        }
    }

    /// Moves the selection one entry up the displayed list.
    pub fn select_prev(&mut self) {
        let last = self.app.game.history().len() - 1;
        if self.app.game.history_descending() {
            if self.app.selected_step < last {
                self.app.selected_step += 1;
            }
        } else {
            self.app.selected_step = self.app.selected_step.saturating_sub(1);
        }
    }

    /// Rewinds the game to the selected step.
    pub fn jump_to_selected(&mut self) {
        let step = self.app.selected_step;
        match self.app.game.jump_to(step) {
            Ok(()) => {
                if step == 0 {
                    self.app.log("Jumped to game start");
                } else {
                    self.app.log(format!("Jumped to move #{}", step));
                }
            }
            Err(e) => {
                self.app.log(format!("Jump rejected: {}", e));
            }
        }
    }

    /// Steps back one move from the current step.
    pub fn step_back(&mut self) {
        let current = self.app.game.current_step();
        if current == 0 {
            self.app.log("Already at game start");
            return;
        }

        if self.app.game.jump_to(current - 1).is_ok() {
            self.app.selected_step = current - 1;
            self.app.log(format!("Stepped back to move #{}", current - 1));
        }
    }

    pub fn toggle_order(&mut self) {
        self.app.game.toggle_history_order();
        let order = if self.app.game.history_descending() {
            "descending"
        } else {
            "ascending"
        };
        self.app.log(format!("History order: {}", order));
    }
}
