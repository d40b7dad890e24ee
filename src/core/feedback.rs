//! Guess scoring
//!
//! Scoring is two-pass so duplicate letters come out right: exact-position
//! matches consume their secret letter first, then each remaining guess
//! letter can claim at most one leftover occurrence. A guess letter with no
//! occurrence left is absent even when it appears elsewhere in the secret —
//! "bbbbb" against "abbey" lights up exactly two tiles, not five.

use super::Word;

/// Per-position verdict for one guessed letter
///
/// Ordered so that a letter's best-known verdict is a plain `max`:
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// No unmatched occurrence of this letter is left in the secret
    Absent,
    /// The letter occurs in the secret, at a different position
    Present,
    /// Right letter, right position
    Correct,
}

/// Feedback for a full five-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    verdicts: [Verdict; 5],
}

impl Feedback {
    /// All five positions correct
    pub const WIN: Self = Self {
        verdicts: [Verdict::Correct; 5],
    };

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact-position matches and consume those secret
    ///    letters.
    /// 2. Second pass: for each unresolved position, claim the leftmost
    ///    remaining occurrence of the letter, or mark it absent.
    ///
    /// Pure and deterministic; the exact-match pass must run first for
    /// duplicate letters to be counted correctly.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, Verdict, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(feedback.verdict_at(2), Verdict::Correct);
    /// assert_eq!(feedback.verdict_at(4), Verdict::Correct);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; 5];
        let mut remaining: [Option<u8>; 5] = (*secret.chars()).map(Some);

        // First pass: exact positions consume their secret letter
        // Allow: index needed to compare guess[i] / secret[i] and set both arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.char_at(i) == secret.char_at(i) {
                verdicts[i] = Verdict::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: leftmost leftover occurrence, at most one per position
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(slot) = remaining.iter().position(|&r| r == Some(letter)) {
                verdicts[i] = Verdict::Present;
                remaining[slot] = None;
            }
        }

        Self { verdicts }
    }

    /// The five verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(self) -> [Verdict; 5] {
        self.verdicts
    }

    /// Verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(self, position: usize) -> Verdict {
        self.verdicts[position]
    }

    /// True when the guess equals the secret (all positions correct)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Render the feedback as the 🟩🟨⬜ share row
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::score(&word, &word).to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.verdicts
            .iter()
            .map(|verdict| match verdict {
                Verdict::Correct => '🟩',
                Verdict::Present => '🟨',
                Verdict::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    /// Counting invariants that must hold for any guess/secret pair:
    /// correct count equals the number of matching positions, and for every
    /// letter, correct + present never exceeds its count in the secret.
    fn check_counts(guess: &str, secret: &str) {
        let guess_word = Word::new(guess).unwrap();
        let secret_word = Word::new(secret).unwrap();
        let feedback = Feedback::score(&guess_word, &secret_word);

        let matching = (0..5)
            .filter(|&i| guess_word.char_at(i) == secret_word.char_at(i))
            .count();
        let correct = feedback
            .verdicts()
            .iter()
            .filter(|&&v| v == Correct)
            .count();
        assert_eq!(correct, matching, "{guess} vs {secret}");

        for letter in b'a'..=b'z' {
            let claimed = (0..5)
                .filter(|&i| {
                    guess_word.char_at(i) == letter && feedback.verdict_at(i) != Absent
                })
                .count();
            assert!(
                claimed <= secret_word.count_of(letter),
                "{guess} vs {secret}: letter {} over-counted",
                letter as char
            );
        }
    }

    #[test]
    fn secret_against_itself_is_win() {
        for word in ["crane", "slate", "berry", "geese"] {
            let feedback = score(word, word);
            assert_eq!(feedback, Feedback::WIN);
            assert!(feedback.is_win());
        }
    }

    #[test]
    fn no_shared_letters_all_absent() {
        let feedback = score("crane", "omits");
        // c, r, a, n, e vs o, m, i, t, s share nothing
        assert_eq!(feedback.verdicts(), [Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn duplicate_guess_letters_consume_once() {
        // Secret "abbey" has two b's; "bbbbb" may light up exactly those two
        let feedback = score("bbbbb", "abbey");
        assert_eq!(feedback.verdicts(), [Absent, Correct, Correct, Absent, Absent]);
    }

    #[test]
    fn exact_match_resolved_before_misplaced() {
        // "error" vs "berry": the r at position 2 is an exact match and must
        // win its secret letter before the r at position 1 claims one
        let feedback = score("error", "berry");
        assert_eq!(
            feedback.verdicts(),
            [Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn misplaced_duplicates() {
        // "speed" vs "erase": both e's misplaced, s misplaced, p and d absent
        let feedback = score("speed", "erase");
        assert_eq!(
            feedback.verdicts(),
            [Present, Absent, Present, Present, Absent]
        );

        // "robot" vs "floor": second o exact, first o misplaced
        let feedback = score("robot", "floor");
        assert_eq!(
            feedback.verdicts(),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn counting_invariants_hold() {
        for (guess, secret) in [
            ("bbbbb", "abbey"),
            ("error", "berry"),
            ("speed", "erase"),
            ("geese", "eerie"),
            ("slate", "water"),
            ("crane", "crane"),
            ("aaaaa", "abbey"),
        ] {
            check_counts(guess, secret);
        }
    }

    #[test]
    fn emoji_share_row() {
        let feedback = score("error", "berry");
        assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬜⬜");
    }
}
