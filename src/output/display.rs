//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{CheckReport, SolveResult};
use crate::core::Outcome;
use colored::Colorize;

/// Print the verdict for a single checked word
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root:      {}",
        report.root.to_uppercase().bright_cyan().bold()
    );
    println!(
        "Candidate: {}",
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.outcome {
        Outcome::Accepted { word, points } => {
            println!(
                "\n{}",
                format!("✅ Accepted: '{word}' is worth {points} points as a first word")
                    .green()
                    .bold()
            );
        }
        Outcome::Rejected(_) => {
            let (title, message) = report
                .explanation
                .as_ref()
                .expect("rejections always carry an explanation");
            println!("\n{} {}", format!("❌ {title}:").red().bold(), message);
        }
        Outcome::Ignored => {
            println!("\n{}", "Nothing to check: the candidate is blank".yellow());
        }
    }
}

/// Print everything a root can yield
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No playable words for this root".red().bold());
        return;
    }

    // Group by length for the summary rows
    let mut by_length: Vec<(usize, Vec<&str>)> = Vec::new();
    for word in &result.words {
        let length = word.chars().count();
        match by_length.last_mut() {
            Some((len, group)) if *len == length => group.push(word.as_str()),
            _ => by_length.push((length, vec![word.as_str()])),
        }
    }

    let max_group = by_length
        .iter()
        .map(|(_, group)| group.len())
        .max()
        .unwrap_or(1);

    println!();
    for (length, group) in &by_length {
        let bar = create_progress_bar(group.len() as f64, max_group as f64, 20);
        println!(
            "  {} {:2}-letter words: {} {}",
            length_badge(*length),
            length,
            bar.green(),
            group.len()
        );

        if verbose {
            for chunk in group.chunks(8) {
                println!("       {}", chunk.join("  ").bright_black());
            }
        }
    }

    println!(
        "\n  Playable words:      {}",
        result.words.len().to_string().bright_yellow().bold()
    );
    println!(
        "  Best possible score: {} {}",
        result.best_score.to_string().bright_yellow().bold(),
        "(playing shortest words first)".bright_black()
    );

    if !verbose {
        println!("\n  {}", "Run with --verbose to list the words".bright_black());
    }
}
