//! Interactive TUI front end
//!
//! A thin consumer of the game engine: key events go in as
//! [`crate::game::InputEvent`]s, and the returned effects drive everything
//! on screen. Reveal animations are scheduled here, never in the engine.

mod app;
mod rendering;

pub use app::{App, run_tui};
