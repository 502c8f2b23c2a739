pub mod args;
pub mod game;
pub mod ui;
