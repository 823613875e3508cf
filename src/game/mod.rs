//! Core 2048 logic: the tile grid and its slide/merge transform, the engine
//! that spawns tiles and tracks score, and the session state machine that
//! front ends drive with intents.

mod direction;
mod engine;
mod grid;
mod session;

pub use direction::Direction;
pub use engine::{BoardEngine, GameState, Outcome, DEFAULT_WIN_TARGET};
pub use grid::{Grid, SlideSummary, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_TILE};
pub(crate) use grid::{border_line, tile_label};
pub use session::{Event, Intent, Phase, Session};
