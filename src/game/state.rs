//! The turn state machine
//!
//! One [`Game`] value owns everything a round needs: the word list, the
//! secret, the board, the cursor, keyboard shading, and its own RNG for
//! picking secrets. [`Game::apply`] is the single dispatch point: it maps
//! an input event to the next state plus the effects a display layer
//! should perform.

use super::board::{Board, COLS, Cursor, ROWS};
use super::effect::{Effect, InputEvent, Message, MessageKind, REVEAL_STAGGER};
use super::keyboard::KeyboardStatus;
use crate::core::{Feedback, Word};
use crate::wordlists::WordList;
use rand::rngs::StdRng;

/// Where the game stands
///
/// `Won` and `Lost` are terminal until an explicit reset. "Row complete"
/// is not a stored state; it is derived from the cursor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game of Wordle
pub struct Game {
    list: WordList,
    secret: Word,
    board: Board,
    cursor: Cursor,
    status: GameStatus,
    keyboard: KeyboardStatus,
    rng: StdRng,
}

impl Game {
    /// Start a game with a secret drawn from `list`
    ///
    /// Seed the RNG (`StdRng::seed_from_u64`) for a deterministic game.
    #[must_use]
    pub fn new(list: WordList, mut rng: StdRng) -> Self {
        let secret = list.choose(&mut rng).clone();
        Self {
            list,
            secret,
            board: Board::new(),
            cursor: Cursor::default(),
            status: GameStatus::Playing,
            keyboard: KeyboardStatus::new(),
            rng,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// The word being guessed
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Process one input event and return the display effects
    ///
    /// Input is rejected (empty effect list) while the game is over,
    /// except for [`InputEvent::Reset`].
    pub fn apply(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::Letter(letter) => self.press_letter(letter),
            InputEvent::Backspace => self.press_backspace(),
            InputEvent::Submit => self.submit(),
            InputEvent::Reset => self.reset(),
        }
    }

    fn press_letter(&mut self, letter: char) -> Vec<Effect> {
        if self.status.is_over() {
            return Vec::new();
        }
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Vec::new();
        }

        let mut effects = vec![Effect::ClearMessage];
        if self.cursor.col < COLS {
            self.board.set(self.cursor.row, self.cursor.col, Some(letter));
            effects.push(Effect::SetTile {
                row: self.cursor.row,
                col: self.cursor.col,
                letter: Some(letter),
            });
            self.cursor.advance();
        }
        effects
    }

    fn press_backspace(&mut self) -> Vec<Effect> {
        if self.status.is_over() {
            return Vec::new();
        }

        let mut effects = vec![Effect::ClearMessage];
        if self.cursor.col > 0 {
            self.cursor.retreat();
            self.board.set(self.cursor.row, self.cursor.col, None);
            effects.push(Effect::SetTile {
                row: self.cursor.row,
                col: self.cursor.col,
                letter: None,
            });
        }
        effects
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.status.is_over() {
            return Vec::new();
        }

        let row = self.cursor.row;
        let Some(guess) = self.board.guess(row) else {
            return vec![
                Effect::ShowMessage(Message::new("Not enough letters!", MessageKind::Error)),
                Effect::ShakeRow(row),
            ];
        };
        if !self.list.contains(&guess) {
            return vec![
                Effect::ShowMessage(Message::new("Not in word list!", MessageKind::Error)),
                Effect::ShakeRow(row),
            ];
        }

        let feedback = Feedback::score(&guess, &self.secret);

        let mut effects = Vec::with_capacity(COLS + 4);
        for (col, verdict) in feedback.verdicts().into_iter().enumerate() {
            effects.push(Effect::RevealTile {
                row,
                col,
                verdict,
                delay: REVEAL_STAGGER * col as u32,
            });
        }
        // Keys recolor with the submit, not after the reveal delays
        for (col, verdict) in feedback.verdicts().into_iter().enumerate() {
            let letter = guess.char_at(col) as char;
            if self.keyboard.upgrade(letter, verdict) {
                effects.push(Effect::SetKey { letter, verdict });
            }
        }

        if feedback.is_win() {
            self.status = GameStatus::Won;
            effects.push(Effect::ShowMessage(Message::new(
                "Congratulations! You win!",
                MessageKind::Success,
            )));
            effects.push(Effect::ShowPlayAgain);
        } else {
            self.cursor.next_row();
            if self.cursor.row == ROWS {
                self.status = GameStatus::Lost;
                effects.push(Effect::ShowMessage(Message::new(
                    format!("You lose! The word was {}", self.secret),
                    MessageKind::Error,
                )));
                effects.push(Effect::ShowPlayAgain);
            }
        }
        effects
    }

    fn reset(&mut self) -> Vec<Effect> {
        self.secret = self.list.choose(&mut self.rng).clone();
        self.board.clear();
        self.cursor = Cursor::default();
        self.status = GameStatus::Playing;
        self.keyboard.clear();
        vec![
            Effect::ClearBoard,
            Effect::ClearKeyboard,
            Effect::ClearMessage,
            Effect::HidePlayAgain,
        ]
    }
}
