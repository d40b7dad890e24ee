//! Word lists for the game
//!
//! The playable list ships embedded in the binary; a custom list can be
//! loaded from a file instead. Entries are validated on the way in, and any
//! load failure falls back to a small built-in list with a non-fatal
//! warning, so the game always starts.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Last-resort list used when no other source yields a single valid word
pub const FALLBACK: &[&str] = &[
    "apple", "baker", "candy", "dream", "early", "fable", "grape", "house", "igloo", "jolly",
];

/// A validated, deduplicated word list with O(1) membership checks
///
/// Never empty: constructing one from an empty source substitutes
/// [`FALLBACK`], so a secret can always be drawn.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; 5]>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let words = if words.is_empty() {
            loader::words_from_slice(FALLBACK)
        } else {
            words
        };

        let mut index = FxHashSet::default();
        let mut deduped = Vec::with_capacity(words.len());
        for word in words {
            if index.insert(*word.chars()) {
                deduped.push(word);
            }
        }

        Self {
            words: deduped,
            index,
        }
    }

    /// Dictionary membership; words are normalized, so this is
    /// case-insensitive by construction
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty source is replaced by [`FALLBACK`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a secret word
    ///
    /// # Panics
    /// Will not panic - the list is never empty by construction.
    pub fn choose<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        use rand::seq::IndexedRandom;
        self.words.choose(rng).expect("word list is never empty")
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Result of loading a word list: the list plus an optional non-fatal warning
#[derive(Debug, Clone)]
pub struct LoadedWords {
    pub list: WordList,
    pub warning: Option<String>,
}

/// Load the playable word list
///
/// Precedence: a user-supplied file, then the embedded list. Any failure
/// (unreadable file, nothing valid in it) substitutes [`FALLBACK`] and
/// reports a warning instead of failing the game.
#[must_use]
pub fn load(path: Option<&Path>) -> LoadedWords {
    let Some(path) = path else {
        return LoadedWords {
            list: WordList::new(loader::words_from_slice(WORDS)),
            warning: None,
        };
    };

    match loader::load_from_file(path) {
        Ok(words) if !words.is_empty() => LoadedWords {
            list: WordList::new(words),
            warning: None,
        },
        Ok(_) => LoadedWords {
            list: WordList::new(Vec::new()),
            warning: Some(format!(
                "No valid words in {}. Using default words.",
                path.display()
            )),
        },
        Err(e) => LoadedWords {
            list: WordList::new(Vec::new()),
            warning: Some(format!(
                "Could not load word list from {}: {e}. Using default words.",
                path.display()
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // Every bundled word must survive validation; the secret is drawn
        // from these
        let words = loader::words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn embedded_words_are_unique() {
        let list = WordList::new(loader::words_from_slice(WORDS));
        assert_eq!(list.len(), WORDS.len());
    }

    #[test]
    fn fallback_words_are_valid() {
        let words = loader::words_from_slice(FALLBACK);
        assert_eq!(words.len(), FALLBACK.len());
    }

    #[test]
    fn empty_source_substitutes_fallback() {
        let list = WordList::new(Vec::new());
        assert_eq!(list.len(), FALLBACK.len());
        assert!(!list.is_empty());
    }

    #[test]
    fn membership_is_case_insensitive() {
        let list = WordList::new(loader::words_from_slice(FALLBACK));
        assert!(list.contains(&Word::new("APPLE").unwrap()));
        assert!(!list.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn duplicates_collapse() {
        let list = WordList::new(loader::words_from_slice(&["apple", "apple", "baker"]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn chosen_secret_is_a_member() {
        use rand::SeedableRng;
        let list = WordList::new(loader::words_from_slice(FALLBACK));
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let secret = list.choose(&mut rng);
            assert!(list.contains(secret));
        }
    }

    #[test]
    fn load_missing_file_warns_and_falls_back() {
        let loaded = load(Some(Path::new("/definitely/not/here/words.txt")));
        assert!(loaded.warning.is_some());
        assert_eq!(loaded.list.len(), FALLBACK.len());
    }

    #[test]
    fn load_without_path_uses_embedded() {
        let loaded = load(None);
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.list.len(), WORDS.len());
    }
}
