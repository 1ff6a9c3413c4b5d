//! Root-word solving
//!
//! Scans the dictionary for every word playable from a root and computes
//! the score an exhaustive round would reach.

use crate::core::{Rules, Session};
use crate::dictionary::WordSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Everything a round rooted at one word can yield
pub struct SolveResult {
    pub root: String,
    /// Playable words, shortest first, alphabetical within a length
    pub words: Vec<String>,
    /// Score reached by playing every word, shortest first
    pub best_score: usize,
}

/// Find every dictionary word playable from `root`
///
/// A word counts as playable when it clears the same gates a submission
/// would: spellable from the root's letters, longer than the minimum, not
/// the root itself, and known to the dictionary.
#[must_use]
pub fn solve_root(root: &str, lexicon: &WordSet, rules: &Rules) -> SolveResult {
    let session = Session::with_rng(
        lexicon,
        vec![root.to_string()],
        rules.clone(),
        StdRng::seed_from_u64(0),
    )
    .expect("single-root pool is never empty");

    let candidates: Vec<&str> = lexicon.words().collect();
    let mut words: Vec<String> = candidates
        .into_par_iter()
        .filter(|&word| session.is_playable(word))
        .map(ToString::to_string)
        .collect();

    words.sort_unstable();
    // Stable sort keeps the alphabetical order within each length
    words.sort_by_key(|word| word.chars().count());

    let best_score = best_order_score(&words);

    SolveResult {
        root: session.root().to_string(),
        words,
        best_score,
    }
}

/// Score from playing `words` in the given order
///
/// The n-th word played is worth n times its length, so an ascending-length
/// order puts the large multipliers on the long words and no other order
/// beats it.
fn best_order_score(words_shortest_first: &[String]) -> usize {
    words_shortest_first
        .iter()
        .enumerate()
        .map(|(played, word)| (played + 1) * word.chars().count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> WordSet {
        WordSet::from_words(
            "en",
            [
                "television",
                "vision",
                "violet",
                "enlist",
                "tinsel",
                "stone",
                "onset",
                "lent",
                "set",
                "it",
                "zebra",
            ],
        )
    }

    #[test]
    fn finds_playable_words_in_length_order() {
        let result = solve_root("television", &lexicon(), &Rules::default());

        assert_eq!(
            result.words,
            [
                "lent", "onset", "stone", "enlist", "tinsel", "violet", "vision"
            ]
        );
    }

    #[test]
    fn excludes_root_short_and_unspellable_words() {
        let result = solve_root("television", &lexicon(), &Rules::default());

        assert!(!result.words.contains(&"television".to_string()));
        assert!(!result.words.contains(&"set".to_string()));
        assert!(!result.words.contains(&"zebra".to_string()));
    }

    #[test]
    fn best_score_plays_shortest_first() {
        let result = solve_root("television", &lexicon(), &Rules::default());

        // 1*4 + 2*5 + 3*5 + 4*6 + 5*6 + 6*6 + 7*6
        assert_eq!(result.best_score, 161);
    }

    #[test]
    fn barren_root_yields_nothing() {
        let result = solve_root("qqq", &lexicon(), &Rules::default());

        assert!(result.words.is_empty());
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn min_length_narrows_the_yield() {
        let rules = Rules {
            min_length: 5,
            ..Rules::default()
        };
        let result = solve_root("television", &lexicon(), &rules);

        assert_eq!(result.words, ["enlist", "tinsel", "violet", "vision"]);
    }

    #[test]
    fn embedded_dictionary_covers_the_classic_root() {
        let result = solve_root("television", &WordSet::embedded(), &Rules::default());

        for word in ["vision", "stone", "onset", "noise", "lines", "silent"] {
            assert!(result.words.contains(&word.to_string()), "missing {word}");
        }
        assert!(!result.words.contains(&"television".to_string()));
    }
}
