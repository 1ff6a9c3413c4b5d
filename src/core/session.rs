//! Game session state machine
//!
//! A session owns the root word, the list of accepted words, and the score.
//! It is mutated through exactly two operations, `submit` and `restart`, and
//! every per-submission failure is returned as a structured [`Outcome`]
//! rather than an error.

use std::fmt;

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::core::{LetterPool, Outcome, Rejection, Rules};
use crate::dictionary::Lexicon;

/// Error establishing a playable session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The root word pool had no usable entries
    EmptyRootPool,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRootPool => write!(f, "no root words available to start a game"),
        }
    }
}

impl std::error::Error for SetupError {}

/// One round of the anagram game
///
/// Holds a root word drawn from a pool, the words accepted so far
/// (newest first), and the running score. The dictionary oracle is injected
/// so tests can run against a fixed word list.
///
/// # Examples
/// ```
/// use scramble::core::{Rules, Session};
/// use scramble::dictionary::WordSet;
///
/// let lexicon = WordSet::from_words("en", ["vision", "stone"]);
/// let mut session =
///     Session::new(lexicon, vec!["television".to_string()], Rules::default()).unwrap();
///
/// assert_eq!(session.root(), "television");
/// assert!(session.submit("vision").is_accepted());
/// assert_eq!(session.score(), 6);
/// ```
#[derive(Debug)]
pub struct Session<L> {
    lexicon: L,
    roots: Vec<String>,
    rules: Rules,
    rng: StdRng,
    root: String,
    pool: LetterPool,
    used: Vec<String>,
    score: usize,
}

impl<L: Lexicon> Session<L> {
    /// Start a session with a root drawn using operating-system randomness
    ///
    /// # Errors
    /// Returns [`SetupError::EmptyRootPool`] if `roots` is empty.
    ///
    /// # Panics
    /// Panics if the operating system's entropy source is unavailable.
    pub fn new(lexicon: L, roots: Vec<String>, rules: Rules) -> Result<Self, SetupError> {
        Self::with_rng(lexicon, roots, rules, StdRng::from_os_rng())
    }

    /// Start a session with a caller-supplied generator
    ///
    /// Seeding the generator makes the root draw reproducible.
    ///
    /// # Errors
    /// Returns [`SetupError::EmptyRootPool`] if `roots` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use scramble::core::{Rules, Session};
    /// use scramble::dictionary::WordSet;
    ///
    /// let roots = vec!["painters".to_string(), "triangles".to_string()];
    /// let a = Session::with_rng(WordSet::empty("en"), roots.clone(), Rules::default(),
    ///     StdRng::seed_from_u64(7)).unwrap();
    /// let b = Session::with_rng(WordSet::empty("en"), roots, Rules::default(),
    ///     StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a.root(), b.root());
    /// ```
    pub fn with_rng(
        lexicon: L,
        roots: Vec<String>,
        rules: Rules,
        mut rng: StdRng,
    ) -> Result<Self, SetupError> {
        if roots.is_empty() {
            return Err(SetupError::EmptyRootPool);
        }

        let root = draw_root(&roots, &mut rng);
        let pool = LetterPool::new(&root);

        let session = Self {
            lexicon,
            roots,
            rules,
            rng,
            root,
            pool,
            used: Vec::new(),
            score: 0,
        };
        session.warn_short_root();
        Ok(session)
    }

    /// Submit a candidate word
    ///
    /// Normalizes the input (trim, lowercase), then runs the gates in order:
    /// originality, letter availability, minimum length, root-word guard,
    /// dictionary oracle. The first failing gate decides the [`Rejection`].
    /// On success the word is prepended to the used list and the score grows
    /// by `used-word count * word length`, counting the new word itself.
    ///
    /// Whitespace-only input is ignored without feedback.
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return Outcome::Ignored;
        }

        if !self.is_original(&word) {
            return Outcome::Rejected(Rejection::Duplicate);
        }

        if !self.pool.can_spell(&word) {
            return Outcome::Rejected(Rejection::Impossible);
        }

        let length = word.chars().count();
        if length <= self.rules.min_length {
            return Outcome::Rejected(Rejection::TooShort);
        }

        if word == self.root {
            return Outcome::Rejected(Rejection::RootWord);
        }

        if !self.lexicon.is_word(&word, &self.rules.language) {
            return Outcome::Rejected(Rejection::NotAWord);
        }

        self.used.insert(0, word.clone());
        let points = self.used.len() * length;
        self.score += points;

        Outcome::Accepted { word, points }
    }

    /// Start a fresh round: new root, empty used list, score zero
    pub fn restart(&mut self) {
        self.root = draw_root(&self.roots, &mut self.rng);
        self.pool = LetterPool::new(&self.root);
        self.used.clear();
        self.score = 0;
        self.warn_short_root();
    }

    // Every spellable candidate is at most as long as the root, so a root
    // that cannot beat the minimum length makes the round unwinnable.
    fn warn_short_root(&self) {
        if self.root.chars().count() <= self.rules.min_length {
            log::warn!(
                "root '{}' cannot beat the minimum word length {}",
                self.root,
                self.rules.min_length
            );
        }
    }

    /// Title and message for a rejection, filled in from session state
    #[must_use]
    pub fn describe(&self, rejection: Rejection) -> (&'static str, String) {
        (
            rejection.title(),
            rejection.message(&self.root, self.rules.min_length),
        )
    }

    /// True when `word` has not been played yet this round
    ///
    /// `word` is expected to be normalized already.
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        !self.used.iter().any(|used| used == word)
    }

    /// Check the stateless gates only: letter availability, minimum length,
    /// root-word guard, dictionary oracle
    ///
    /// Unlike [`Session::submit`] this ignores the used-word list and never
    /// mutates, so it answers "could this word ever be played this round".
    /// `word` is expected to be normalized already.
    #[must_use]
    pub fn is_playable(&self, word: &str) -> bool {
        self.pool.can_spell(word)
            && word.chars().count() > self.rules.min_length
            && word != self.root
            && self.lexicon.is_word(word, &self.rules.language)
    }

    /// The current root word
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Letter pool of the current root word
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Accepted words, newest first
    #[inline]
    #[must_use]
    pub fn used(&self) -> &[String] {
        &self.used
    }

    /// Current score
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The rules this session plays by
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The dictionary oracle this session consults
    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &L {
        &self.lexicon
    }
}

/// Draw a root uniformly from the pool, normalized to lowercase
fn draw_root(roots: &[String], rng: &mut StdRng) -> String {
    roots
        .choose(rng)
        .expect("root pool verified non-empty at construction")
        .to_lowercase()
}
