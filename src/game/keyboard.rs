//! On-screen keyboard shading

use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Best verdict seen per letter, for keyboard shading
///
/// Monotonic within a game: a letter shown green never drops back to
/// yellow or gray, even if a later guess reuses it with a worse outcome.
#[derive(Debug, Clone, Default)]
pub struct KeyboardStatus {
    best: FxHashMap<char, Verdict>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best verdict recorded for `letter`, if the letter has been played
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        self.best.get(&letter).copied()
    }

    /// Record `verdict` for `letter`, keeping the better of old and new
    ///
    /// Returns true when the displayed status actually changed.
    pub fn upgrade(&mut self, letter: char, verdict: Verdict) -> bool {
        match self.best.get(&letter) {
            Some(&current) if current >= verdict => false,
            _ => {
                self.best.insert(letter, verdict);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    #[test]
    fn upgrade_records_first_verdict() {
        let mut keys = KeyboardStatus::new();
        assert_eq!(keys.get('a'), None);
        assert!(keys.upgrade('a', Present));
        assert_eq!(keys.get('a'), Some(Present));
    }

    #[test]
    fn upgrade_raises_but_never_lowers() {
        let mut keys = KeyboardStatus::new();
        keys.upgrade('e', Absent);
        assert!(keys.upgrade('e', Present));
        assert!(keys.upgrade('e', Correct));

        // A later, worse outcome for the same letter changes nothing
        assert!(!keys.upgrade('e', Present));
        assert!(!keys.upgrade('e', Absent));
        assert_eq!(keys.get('e'), Some(Correct));
    }

    #[test]
    fn upgrade_same_verdict_reports_unchanged() {
        let mut keys = KeyboardStatus::new();
        keys.upgrade('r', Present);
        assert!(!keys.upgrade('r', Present));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keys = KeyboardStatus::new();
        keys.upgrade('a', Correct);
        keys.clear();
        assert_eq!(keys.get('a'), None);
    }
}
