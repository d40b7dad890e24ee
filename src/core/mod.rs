//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and independent of any display layer.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{Word, WordError};
