//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{
    app::App,
    handlers::{GameHandler, HistoryHandler, InputHandler},
    types::{Focus, LogBuffer},
};
use crate::game::Mark;

/// Helper function to create a test app with an ascending history list.
fn create_test_app() -> App {
    App::new(false, LogBuffer::new())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press_ctrl(app: &mut App, c: char) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.focus, Focus::Board);
        assert_eq!(app.cursor, 4);
        assert_eq!(app.selected_step, 0);
        assert_eq!(app.game.history().len(), 1);
        assert!(!app.game.history_descending());
    }

    #[test]
    fn test_descending_flag_applies_at_startup() {
        let app = App::new(true, LogBuffer::new());

        assert!(app.game.history_descending());
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Test message 1");
        assert_eq!(lines[1], "Test message 2");
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert!(lines.len() <= super::super::types::MAX_LOG_LINES);
        // Oldest lines are the ones dropped.
        assert_eq!(lines.last().unwrap(), "Message 349");
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_ctrl_q_requests_exit() {
        let mut app = create_test_app();

        assert!(press_ctrl(&mut app, 'q'));
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.game.current_board()[0], Some(Mark::X));
        assert_eq!(app.game.current_board()[4], Some(Mark::O));
        assert_eq!(app.game.history().len(), 3);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = create_test_app();
        app.cursor = 8;

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.current_board()[8], Some(Mark::X));
    }

    #[test]
    fn test_space_places_at_cursor() {
        let mut app = create_test_app();
        app.cursor = 0;

        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.game.current_board()[0], Some(Mark::X));
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::History);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Board);
    }

    #[test]
    fn test_ctrl_o_toggles_history_order() {
        let mut app = create_test_app();

        press_ctrl(&mut app, 'o');
        assert!(app.game.history_descending());

        press_ctrl(&mut app, 'o');
        assert!(!app.game.history_descending());
    }

    #[test]
    fn test_ctrl_z_steps_back_one_move() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));

        press_ctrl(&mut app, 'z');

        assert_eq!(app.game.current_step(), 1);
        assert_eq!(app.selected_step, 1);
        // History is untouched by the rewind.
        assert_eq!(app.game.history().len(), 3);
    }

    #[test]
    fn test_ctrl_n_starts_a_new_game() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));

        press_ctrl(&mut app, 'n');

        assert_eq!(app.game.history().len(), 1);
        assert_eq!(app.game.current_step(), 0);
        assert_eq!(app.selected_step, 0);
        assert_eq!(app.game.next_mark(), Mark::X);
    }

    #[test]
    fn test_arrow_keys_only_move_cursor_with_board_focus() {
        let mut app = create_test_app();
        app.focus = Focus::History;
        let cursor_before = app.cursor;

        press(&mut app, KeyCode::Left);

        assert_eq!(app.cursor, cursor_before);
    }
}

#[cfg(test)]
mod game_handler_tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_on_both_axes() {
        let mut app = create_test_app();
        app.cursor = 0;

        GameHandler::new(&mut app).move_cursor(-1, 0);
        assert_eq!(app.cursor, 2);

        GameHandler::new(&mut app).move_cursor(0, -1);
        assert_eq!(app.cursor, 8);

        GameHandler::new(&mut app).move_cursor(1, 1);
        assert_eq!(app.cursor, 6);
    }

    #[test]
    fn test_placement_follows_with_history_selection() {
        let mut app = create_test_app();

        GameHandler::new(&mut app).place(0);
        assert_eq!(app.selected_step, 1);

        GameHandler::new(&mut app).place(4);
        assert_eq!(app.selected_step, 2);
    }

    #[test]
    fn test_ignored_placement_changes_nothing() {
        let mut app = create_test_app();

        GameHandler::new(&mut app).place(0);
        GameHandler::new(&mut app).place(0);

        assert_eq!(app.game.history().len(), 2);
        assert_eq!(app.game.next_mark(), Mark::O);
        assert_eq!(app.selected_step, 1);
    }

    #[test]
    fn test_new_game_keeps_display_order() {
        let mut app = App::new(true, LogBuffer::new());
        GameHandler::new(&mut app).place(0);

        GameHandler::new(&mut app).start_new_game();

        assert!(app.game.history_descending());
        assert_eq!(app.game.history().len(), 1);
    }
}

#[cfg(test)]
mod history_handler_tests {
    use super::*;

    fn app_with_three_moves() -> App {
        let mut app = create_test_app();
        for cell in [0, 4, 1] {
            GameHandler::new(&mut app).place(cell);
        }
        app
    }

    #[test]
    fn test_selection_moves_through_ascending_list() {
        let mut app = app_with_three_moves();
        app.selected_step = 0;

        HistoryHandler::new(&mut app).select_next();
        assert_eq!(app.selected_step, 1);

        HistoryHandler::new(&mut app).select_prev();
        assert_eq!(app.selected_step, 0);

        // Clamped at both ends.
        HistoryHandler::new(&mut app).select_prev();
        assert_eq!(app.selected_step, 0);
    }

    #[test]
    fn test_selection_direction_flips_when_descending() {
        let mut app = app_with_three_moves();
        HistoryHandler::new(&mut app).toggle_order();
        app.selected_step = 3;

        // Down the displayed list means earlier steps.
        HistoryHandler::new(&mut app).select_next();
        assert_eq!(app.selected_step, 2);

        HistoryHandler::new(&mut app).select_prev();
        assert_eq!(app.selected_step, 3);

        HistoryHandler::new(&mut app).select_prev();
        assert_eq!(app.selected_step, 3);
    }

    #[test]
    fn test_jump_rewinds_and_resets_active_player() {
        let mut app = app_with_three_moves();
        app.selected_step = 1;

        HistoryHandler::new(&mut app).jump_to_selected();

        assert_eq!(app.game.current_step(), 1);
        assert_eq!(app.game.next_mark(), Mark::O);
        assert_eq!(app.game.history().len(), 4);
    }

    #[test]
    fn test_move_after_jump_truncates_history() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).place(0);
        GameHandler::new(&mut app).place(1);

        app.selected_step = 0;
        HistoryHandler::new(&mut app).jump_to_selected();
        GameHandler::new(&mut app).place(4);

        assert_eq!(app.game.history().len(), 2);
        assert_eq!(app.game.current_step(), 1);
        assert_eq!(app.game.current_board()[1], None);
    }

    #[test]
    fn test_step_back_at_game_start_is_a_noop() {
        let mut app = create_test_app();

        HistoryHandler::new(&mut app).step_back();

        assert_eq!(app.game.current_step(), 0);
    }
}
