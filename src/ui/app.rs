use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::game::GameState;

use super::types::{Focus, LogBuffer};

/// Main application state container. Owns the single [`GameState`]; every
/// mutation goes through the handlers in response to one key event.
pub struct App {
    pub(in crate::ui) game: GameState,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) selected_step: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(descending: bool, logs: LogBuffer) -> Self {
        let mut game = GameState::new();
        if descending {
            game.toggle_history_order();
        }

        Self {
            game,
            cursor: 4, // start on the center cell
            focus: Focus::Board,
            selected_step: 0,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
