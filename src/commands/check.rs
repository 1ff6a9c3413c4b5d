//! Single-word adjudication
//!
//! Judges one candidate against a fixed root without starting an
//! interactive game, for scripting and quick lookups.

use crate::core::{Outcome, Rules, Session};
use crate::dictionary::Lexicon;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Verdict for one candidate against one root
pub struct CheckReport {
    pub root: String,
    pub word: String,
    pub outcome: Outcome,
    /// Alert title and message when the candidate was rejected
    pub explanation: Option<(&'static str, String)>,
}

/// Judge `word` as the first submission of a fresh round rooted at `root`
///
/// The root is taken as given rather than drawn, so the report is
/// deterministic. Points in an accepted outcome are those of a first word.
#[must_use]
pub fn check_word<L: Lexicon>(root: &str, word: &str, lexicon: L, rules: &Rules) -> CheckReport {
    let mut session = Session::with_rng(
        lexicon,
        vec![root.to_string()],
        rules.clone(),
        StdRng::seed_from_u64(0),
    )
    .expect("single-root pool is never empty");

    let outcome = session.submit(word);
    let explanation = match &outcome {
        Outcome::Rejected(rejection) => Some(session.describe(*rejection)),
        Outcome::Accepted { .. } | Outcome::Ignored => None,
    };

    log::debug!(
        "check '{}' against '{}': {:?}",
        word.trim(),
        session.root(),
        outcome
    );

    CheckReport {
        root: session.root().to_string(),
        word: word.trim().to_lowercase(),
        outcome,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordSet;

    fn lexicon() -> WordSet {
        WordSet::from_words("en", ["vision", "stone", "onset"])
    }

    #[test]
    fn accepted_word_scores_as_first_of_round() {
        let report = check_word("television", "vision", lexicon(), &Rules::default());

        assert_eq!(
            report.outcome,
            Outcome::Accepted {
                word: "vision".to_string(),
                points: 6
            }
        );
        assert!(report.explanation.is_none());
    }

    #[test]
    fn rejected_word_carries_an_explanation() {
        let report = check_word("television", "tinsel", lexicon(), &Rules::default());

        assert_eq!(report.outcome, Outcome::Rejected(Rejection::NotAWord));
        let (title, message) = report.explanation.unwrap();
        assert_eq!(title, "Word not possible");
        assert_eq!(message, "That isn't a real word.");
    }

    #[test]
    fn impossible_word_names_the_root() {
        let report = check_word("television", "stamp", lexicon(), &Rules::default());

        assert_eq!(report.outcome, Outcome::Rejected(Rejection::Impossible));
        let (_, message) = report.explanation.unwrap();
        assert!(message.contains("television"));
    }

    #[test]
    fn inputs_are_normalized() {
        let report = check_word("Television", "  ViSiOn \n", lexicon(), &Rules::default());

        assert_eq!(report.root, "television");
        assert_eq!(report.word, "vision");
        assert!(report.outcome.is_accepted());
    }

    #[test]
    fn custom_rules_apply() {
        let rules = Rules {
            min_length: 5,
            ..Rules::default()
        };
        let report = check_word("television", "onset", lexicon(), &rules);

        assert_eq!(report.outcome, Outcome::Rejected(Rejection::TooShort));
        let (_, message) = report.explanation.unwrap();
        assert!(message.contains('5'));
    }
}
