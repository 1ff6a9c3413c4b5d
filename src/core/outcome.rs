//! Submission outcomes and game rules

/// Tunable parameters for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Accepted words must be strictly longer than this many letters
    pub min_length: usize,
    /// Language tag passed to the dictionary oracle
    pub language: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_length: 3,
            language: "en".to_string(),
        }
    }
}

/// Why a submission was turned down
///
/// Variants are ordered by the gate that produces them; the pipeline
/// short-circuits on the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The word was already played this round
    Duplicate,
    /// The word needs letters the root word does not have
    Impossible,
    /// The word does not clear the minimum length
    TooShort,
    /// The word is the root word itself
    RootWord,
    /// The dictionary oracle does not recognize the word
    NotAWord,
}

impl Rejection {
    /// Short machine-friendly tag for logs and plain output
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Duplicate => "duplicate",
            Self::Impossible => "impossible",
            Self::TooShort => "too-short",
            Self::RootWord => "root-word",
            Self::NotAWord => "not-a-word",
        }
    }

    /// Title line for the notice surface
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Duplicate => "Word used already",
            Self::Impossible => "Word not recognized",
            Self::TooShort | Self::RootWord | Self::NotAWord => "Word not possible",
        }
    }

    /// Explanatory message for the notice surface
    ///
    /// `root` and `min_length` come from the rejecting session's state.
    #[must_use]
    pub fn message(self, root: &str, min_length: usize) -> String {
        match self {
            Self::Duplicate => "Be more original!".to_string(),
            Self::Impossible => format!("You can't make that from '{root}'!"),
            Self::TooShort => match min_length {
                3 => "Words must be longer than three letters.".to_string(),
                n => format!("Words must be longer than {n} letters."),
            },
            Self::RootWord => "Playing the root word itself doesn't count.".to_string(),
            Self::NotAWord => "That isn't a real word.".to_string(),
        }
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The word was added to the used list; `points` is what it scored
    Accepted { word: String, points: usize },
    /// The word was refused; session state is unchanged
    Rejected(Rejection),
    /// Empty input, silently ignored
    Ignored,
}

impl Outcome {
    /// Returns true for [`Outcome::Accepted`]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
