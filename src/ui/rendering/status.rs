use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (status_text, color) = if let Some(winner) = self.game.winner() {
            (format!("Winner: {}", winner), Color::Green)
        } else if self.game.is_draw() {
            ("Draw".to_string(), Color::Yellow)
        } else {
            (
                format!("Next player: {}", self.game.next_mark()),
                Color::White,
            )
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
