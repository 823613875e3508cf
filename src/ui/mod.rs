//! Terminal front end: maps key presses to intents, feeds them to a
//! [`Session`](crate::game::Session), and redraws the grid after each one.

mod app;
pub mod board_widget;
mod game_view;
pub mod input;
pub mod palette;

pub use app::App;
