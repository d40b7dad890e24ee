//! Input events and output effects
//!
//! The engine never draws. Every transition returns the effects a display
//! layer needs: tile writes, timed reveals, key shading, messages, the row
//! shake, and play-again visibility. Reveal delays are cosmetic scheduling
//! hints for the presentation layer and must not gate further input.

use crate::core::Verdict;
use std::time::Duration;

/// Delay between successive tile reveals in one row
pub const REVEAL_STAGGER: Duration = Duration::from_millis(250);

/// Player input, decoupled from any concrete key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter key, a-z (case-insensitive)
    Letter(char),
    /// Submit the current row
    Submit,
    /// Delete the last letter on the current row
    Backspace,
    /// Start a fresh game with a newly chosen secret
    Reset,
}

/// Severity of a status-line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

/// One line for the status/message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Display-layer instruction emitted by a game transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write (or erase) the letter shown on a tile
    SetTile {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    /// Color a tile with its verdict after a cosmetic delay
    RevealTile {
        row: usize,
        col: usize,
        verdict: Verdict,
        delay: Duration,
    },
    /// Shade an on-screen keyboard key with its best-known verdict
    SetKey { letter: char, verdict: Verdict },
    ShowMessage(Message),
    ClearMessage,
    /// Wiggle a rejected row
    ShakeRow(usize),
    ShowPlayAgain,
    HidePlayAgain,
    ClearBoard,
    ClearKeyboard,
}
