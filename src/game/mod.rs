//! Game engine: board, keyboard shading, and the turn state machine
//!
//! The engine is display-free. Front ends feed [`InputEvent`]s into
//! [`Game::apply`] and render the returned [`Effect`]s however they like,
//! so the whole game can be driven and tested without a terminal.

mod board;
mod effect;
mod keyboard;
mod state;

pub use board::{Board, COLS, Cursor, ROWS};
pub use effect::{Effect, InputEvent, Message, MessageKind, REVEAL_STAGGER};
pub use keyboard::KeyboardStatus;
pub use state::{Game, GameStatus};
