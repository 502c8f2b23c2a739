mod board;
mod history;
mod logs;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // status
                Constraint::Min(11),    // board
                Constraint::Length(4),  // key help
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // move history
                Constraint::Length(8), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_help(f, left_layout[2]);

        self.draw_history(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }

    fn draw_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let text = match self.focus {
            Focus::Board => {
                "Arrows: move | Enter/Space: place | 1-9: place in cell\n\
                 Tab: history | Ctrl+Z: undo | Ctrl+N: new game | Ctrl+Q: quit"
            }
            Focus::History => {
                "Up/Down: select | Enter: jump to move | Ctrl+O: order\n\
                 Tab: board | Ctrl+Z: undo | Ctrl+N: new game | Ctrl+Q: quit"
            }
        };

        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
