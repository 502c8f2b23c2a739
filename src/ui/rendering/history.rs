//! Move history list rendering.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::{App, types::Focus};

impl App {
    pub(in crate::ui) fn draw_history(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let history = self.game.history();

        let steps: Vec<usize> = if self.game.history_descending() {
            (0..history.len()).rev().collect()
        } else {
            (0..history.len()).collect()
        };

        let items: Vec<ListItem> = steps
            .iter()
            .map(|&step| {
                let desc = match history[step].coords() {
                    Some((col, row)) => format!("Go to move #{} ({}, {})", step, col, row),
                    None => "Go to game start".to_string(),
                };

                let mut style = Style::default();
                if step == self.game.current_step() {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if self.focus == Focus::History && step == self.selected_step {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                ListItem::new(Line::styled(desc, style))
            })
            .collect();

        let order = if self.game.history_descending() {
            "descending"
        } else {
            "ascending"
        };
        let title = format!("Moves ({order}) | Ctrl+O: toggle order");

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
