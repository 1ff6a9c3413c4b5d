//! Dictionary oracle
//!
//! Answers the single question the game needs from the outside world: is this
//! string a real word in a given language? The oracle is a trait so tests and
//! alternate front ends can substitute a fixed word list for the embedded one.

use rustc_hash::FxHashSet;

use crate::wordlists::{DICTIONARY, loader};

/// Capability to check whether a string is a recognized dictionary word
///
/// Implementations must be side-effect-free: repeated queries with the same
/// arguments return the same answer.
pub trait Lexicon {
    /// Returns true if `word` is a recognized word in `language`
    ///
    /// `word` is expected to be lowercase; `language` is a BCP 47-style tag
    /// such as `"en"`.
    fn is_word(&self, word: &str, language: &str) -> bool;
}

/// In-memory word set implementing [`Lexicon`] for one language
///
/// Lookup is a hash set probe, so oracle queries are effectively free and the
/// game treats them as synchronous.
#[derive(Debug, Clone)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Create an empty word set for a language
    #[must_use]
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: FxHashSet::default(),
        }
    }

    /// Build a word set from an iterator of words
    ///
    /// Words are stored as given; callers normalize to lowercase first.
    ///
    /// # Examples
    /// ```
    /// use scramble::dictionary::WordSet;
    ///
    /// let set = WordSet::from_words("en", ["vision", "stone"]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("vision"));
    /// ```
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language: language.to_string(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the English word set embedded in the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words("en", loader::words_from_slice(DICTIONARY))
    }

    /// Check membership directly, ignoring the language tag
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The language tag this set answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of words in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in the set (arbitrary order)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for WordSet {
    fn is_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(word)
    }
}

// Allow passing a session a borrowed oracle
impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn is_word(&self, word: &str, language: &str) -> bool {
        (**self).is_word(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_knows_nothing() {
        let set = WordSet::empty("en");
        assert!(set.is_empty());
        assert!(!set.is_word("vision", "en"));
    }

    #[test]
    fn membership_and_language_tag() {
        let set = WordSet::from_words("en", ["vision", "stone"]);

        assert!(set.is_word("vision", "en"));
        assert!(set.is_word("vision", "EN"));
        assert!(!set.is_word("vision", "fr"));
        assert!(!set.is_word("nacht", "en"));
    }

    #[test]
    fn contains_ignores_language() {
        let set = WordSet::from_words("en", ["stone"]);
        assert!(set.contains("stone"));
        assert!(!set.contains("stones"));
    }

    #[test]
    fn embedded_set_has_common_words() {
        let set = WordSet::embedded();

        assert_eq!(set.language(), "en");
        assert!(set.len() > 1000);
        for word in ["vision", "stone", "onset", "noise", "silent", "violet"] {
            assert!(set.is_word(word, "en"), "'{word}' should be embedded");
        }
        assert!(!set.is_word("xyzzy", "en"));
    }
}
