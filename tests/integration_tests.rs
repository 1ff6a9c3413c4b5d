// Integration tests for the scramble game
// These tests verify that word lists, the dictionary, sessions, and the
// commands built on top of them work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble::commands::{check_word, run_simple, solve_root};
use scramble::core::{Outcome, Rejection, Rules, Session};
use scramble::dictionary::WordSet;
use scramble::wordlists::ROOT_WORDS;
use scramble::wordlists::loader::{load_from_file, words_from_slice};
use std::io::Cursor;

fn seeded(root: &str, seed: u64) -> Session<WordSet> {
    Session::with_rng(
        WordSet::embedded(),
        vec![root.to_string()],
        Rules::default(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

#[test]
fn test_full_round_against_embedded_dictionary() {
    let mut session = seeded("television", 1);

    assert!(session.submit("stone").is_accepted()); // 1 * 5
    assert!(session.submit("vision").is_accepted()); // 2 * 6
    assert!(session.submit("enlist").is_accepted()); // 3 * 6

    assert_eq!(session.score(), 5 + 12 + 18);
    assert_eq!(session.used(), ["enlist", "vision", "stone"]);
}

#[test]
fn test_every_rejection_kind_end_to_end() {
    let mut session = seeded("television", 2);

    assert!(session.submit("stone").is_accepted());
    assert_eq!(
        session.submit("stone"),
        Outcome::Rejected(Rejection::Duplicate)
    );
    // 'x' is not in the root
    assert_eq!(
        session.submit("xylophone"),
        Outcome::Rejected(Rejection::Impossible)
    );
    // Real word, spellable, but not longer than three letters
    assert_eq!(session.submit("set"), Outcome::Rejected(Rejection::TooShort));
    assert_eq!(
        session.submit("television"),
        Outcome::Rejected(Rejection::RootWord)
    );
    // Spellable gibberish
    assert_eq!(
        session.submit("tvies"),
        Outcome::Rejected(Rejection::NotAWord)
    );

    // Only the one acceptance scored
    assert_eq!(session.score(), 5);
    assert_eq!(session.used(), ["stone"]);
}

#[test]
fn test_score_is_position_times_length() {
    let mut session = seeded("television", 3);
    let words = ["stone", "onset", "noise", "vision", "silent"];

    let mut expected = 0;
    for (i, word) in words.iter().enumerate() {
        assert!(session.submit(word).is_accepted(), "{word} should play");
        expected += (i + 1) * word.len();
    }

    assert_eq!(session.score(), expected);
    assert_eq!(session.score(), 84);
}

#[test]
fn test_restart_draws_fresh_roots_and_resets() {
    let roots = words_from_slice(ROOT_WORDS);
    let mut session = Session::with_rng(
        WordSet::embedded(),
        roots.clone(),
        Rules::default(),
        StdRng::seed_from_u64(42),
    )
    .unwrap();

    for _ in 0..5 {
        let root = session.root().to_string();
        assert!(roots.contains(&root), "{root} should come from the pool");
        assert!(session.pool().can_spell(&root));

        session.restart();
        assert_eq!(session.score(), 0);
        assert!(session.used().is_empty());
    }
}

#[test]
fn test_one_dictionary_serves_many_sessions() {
    // Sessions can borrow a shared dictionary instead of owning one
    let lexicon = WordSet::embedded();

    let mut a = Session::with_rng(
        &lexicon,
        vec!["television".to_string()],
        Rules::default(),
        StdRng::seed_from_u64(1),
    )
    .unwrap();
    let mut b = Session::with_rng(
        &lexicon,
        vec!["creations".to_string()],
        Rules::default(),
        StdRng::seed_from_u64(2),
    )
    .unwrap();

    assert!(a.submit("vision").is_accepted());
    // A full anagram of the root is fine; only the root itself is barred
    assert!(b.submit("reactions").is_accepted());
    assert_eq!(b.score(), 9);
}

#[test]
fn test_simple_mode_plays_a_scripted_game() {
    let mut session = seeded("television", 9);
    let script = "stone\nxyz\nstone\nwords\nvision\nexit\n";

    run_simple(&mut session, Cursor::new(script)).unwrap();

    // "xyz" is impossible, the second "stone" is a duplicate, and "words"
    // is a command, so only two submissions landed
    assert_eq!(session.used(), ["vision", "stone"]);
    assert_eq!(session.score(), 5 + 12);
}

#[test]
fn test_check_agrees_with_a_fresh_session() {
    let lexicon = WordSet::embedded();
    let rules = Rules::default();

    for candidate in ["vision", "xyz", "set", "television", "tvies", ""] {
        let report = check_word("television", candidate, &lexicon, &rules);

        let mut session = Session::with_rng(
            &lexicon,
            vec!["television".to_string()],
            rules.clone(),
            StdRng::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(
            report.outcome,
            session.submit(candidate),
            "check and play disagree on '{candidate}'"
        );
    }
}

#[test]
fn test_solve_results_replay_for_the_advertised_score() {
    let lexicon = WordSet::embedded();
    let result = solve_root("stone", &lexicon, &Rules::default());

    assert!(!result.words.is_empty());

    // Playing the whole list shortest-first reproduces the best score
    let mut session = Session::with_rng(
        &lexicon,
        vec!["stone".to_string()],
        Rules::default(),
        StdRng::seed_from_u64(0),
    )
    .unwrap();

    for word in &result.words {
        assert!(session.submit(word).is_accepted(), "{word} should play");
    }
    assert_eq!(session.score(), result.best_score);
}

#[test]
fn test_custom_wordlist_file_to_game() {
    // Integration test: load a custom dictionary file, then play against it
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("scramble_test_wordlist.txt");

    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# tiny test dictionary").unwrap();
        writeln!(file, "VISION").unwrap();
        writeln!(file, "  stone  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "onset").unwrap();
    }

    let words = load_from_file(&path).unwrap();
    assert_eq!(words, ["vision", "stone", "onset"]);

    let lexicon = WordSet::from_words("en", words);
    let mut session = Session::with_rng(
        lexicon,
        vec!["television".to_string()],
        Rules::default(),
        StdRng::seed_from_u64(5),
    )
    .unwrap();

    assert!(session.submit("stone").is_accepted());
    // Real word, but not in this tiny dictionary
    assert_eq!(
        session.submit("tinsel"),
        Outcome::Rejected(Rejection::NotAWord)
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_every_embedded_root_offers_a_real_round() {
    let lexicon = WordSet::embedded();
    let rules = Rules::default();

    for root in words_from_slice(ROOT_WORDS) {
        let result = solve_root(&root, &lexicon, &rules);

        assert!(
            result.words.len() >= 15,
            "root '{root}' only yields {} words",
            result.words.len()
        );
        assert!(result.best_score > 0);
    }
}
