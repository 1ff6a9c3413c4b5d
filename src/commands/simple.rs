//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI, suitable for dumb terminals and
//! piped input. Reads from any `BufRead` so tests can script a whole game.

use crate::core::{Outcome, Session};
use crate::dictionary::Lexicon;
use crate::output::formatters::length_badge;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-based game mode
///
/// Commands take precedence over submissions: `next` (or `new`) starts a
/// fresh round, `words` lists the words found so far, `exit` (or `q`) quits.
/// No curated root can spell `next`, `words`, or `exit`, so the primary
/// commands never shadow a playable word.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple<L: Lexicon, R: BufRead>(
    session: &mut Session<L>,
    mut reader: R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Scramble - Anagram Word Game                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the root word's letters.");
    println!("Each letter may be used as often as it appears in the root.");
    println!("Longer words and longer rounds score more.\n");
    println!("Commands: 'next' for a new root, 'words' to list your finds, 'exit' to quit\n");

    print_round(session);

    loop {
        let Some(line) = read_line(&mut reader, "word")? else {
            // End of input, same farewell as an explicit exit
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            // Not "quit": the roots "question" and "quotient" can spell it
            "exit" | "q" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "next" | "new" => {
                session.restart();
                println!("\n🔄 New round!\n");
                print_round(session);
            }
            "words" => print_found(session),
            _ => match session.submit(&line) {
                Outcome::Accepted { word, points } => {
                    println!(
                        "  {} {} {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("+{points} (score: {})", session.score()).green()
                    );
                }
                Outcome::Rejected(rejection) => {
                    let (title, message) = session.describe(rejection);
                    log::debug!("rejected '{line}': {}", rejection.reason());
                    println!("  {} {}", format!("✗ {title}:").red().bold(), message);
                }
                Outcome::Ignored => {}
            },
        }
    }
}

/// Print the current root and its letter inventory
fn print_round<L: Lexicon>(session: &Session<L>) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Root word: {}",
        session.root().to_uppercase().bright_cyan().bold()
    );

    let letters = session
        .pool()
        .letter_counts()
        .into_iter()
        .map(|(ch, n)| {
            if n > 1 {
                format!("{ch}×{n}")
            } else {
                ch.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("Letters:   {letters}");
    println!("────────────────────────────────────────────────────────────");
}

/// List the words found so far, newest first
fn print_found<L: Lexicon>(session: &Session<L>) {
    if session.used().is_empty() {
        println!("  No words yet. Make one from '{}'!", session.root());
        return;
    }

    println!(
        "  Found {} words, {} points:",
        session.used().len(),
        session.score()
    );
    for word in session.used() {
        println!("    {} {}", length_badge(word.chars().count()), word);
    }
}

/// Prompt and read one line, `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let bytes = reader.read_line(&mut line).map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
