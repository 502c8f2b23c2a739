//! Board grid rendering with cursor and winning-line highlighting.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    game::BOARD_SIDE,
    ui::{app::App, types::Focus},
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let board = self.game.current_board();
        let win_line = self.game.winning_line();

        let mut lines: Vec<Line> = Vec::new();
        for row in 0..BOARD_SIDE {
            let mut spans: Vec<Span> = Vec::new();
            for col in 0..BOARD_SIDE {
                let cell = row * BOARD_SIDE + col;
                let text = match board[cell] {
                    Some(mark) => format!(" {} ", mark),
                    None => "   ".to_string(),
                };

                let in_win_line = win_line.is_some_and(|line| line.contains(&cell));
                let under_cursor = self.focus == Focus::Board && cell == self.cursor;

                let style = if in_win_line {
                    Style::default().bg(Color::Green).fg(Color::Black)
                } else if under_cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };

                spans.push(Span::styled(text, style));
                if col + 1 < BOARD_SIDE {
                    spans.push(Span::raw("│"));
                }
            }
            lines.push(Line::from(spans));

            if row + 1 < BOARD_SIDE {
                lines.push(Line::from("───┼───┼───"));
            }
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Board")),
            area,
        );
    }
}
