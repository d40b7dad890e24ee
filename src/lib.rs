//! Terminal Wordle
//!
//! Guess a secret five-letter word in six tries. Each guess colors its
//! tiles: green for the right letter in the right spot, pink for a letter
//! that belongs somewhere else, gray for a letter with no unmatched
//! occurrence left in the secret. Duplicate letters are scored the way the
//! original game scores them: each secret letter satisfies at most one
//! guess position, exact matches first.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Feedback, Verdict, Word};
//!
//! let secret = Word::new("berry").unwrap();
//! let guess = Word::new("error").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.verdict_at(2), Verdict::Correct);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game engine: board, keyboard shading, turn state machine
pub mod game;

// Word lists
pub mod wordlists;

// Theme preference
pub mod config;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
