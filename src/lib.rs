//! # twenty48
//!
//! The 2048 sliding-tile game: a board engine with configurable grid size and
//! win target, plus a terminal front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: grid transform, engine and session state machine
//! - [`ui`]: terminal key mapping, colour palette and board rendering
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
