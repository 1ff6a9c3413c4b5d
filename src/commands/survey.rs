//! Root list survey
//!
//! Solves every curated root against the dictionary and reports how much
//! play each one offers. Useful when tuning the root list: a root that
//! yields a handful of words makes for a frustrating round.

use crate::commands::solve::solve_root;
use crate::core::Rules;
use crate::dictionary::WordSet;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// How much play a single root offers
#[derive(Debug, Clone)]
pub struct RootYield {
    pub root: String,
    pub playable: usize,
    pub best_score: usize,
}

/// Statistics from surveying a root list
#[derive(Debug)]
pub struct SurveyStatistics {
    pub surveyed: usize,
    pub total_playable: usize,
    pub average_playable: f64,
    pub median_playable: usize,
    pub thinnest: Vec<RootYield>,
    pub richest: Vec<RootYield>,
    pub highest_scoring: Option<RootYield>,
    pub distribution: Vec<(&'static str, usize)>,
    pub total_time: Duration,
}

/// Yield buckets for the distribution chart
const BUCKETS: [(&str, usize, usize); 6] = [
    ("none", 0, 1),
    ("1-14", 1, 15),
    ("15-29", 15, 30),
    ("30-59", 30, 60),
    ("60-99", 60, 100),
    ("100+", 100, usize::MAX),
];

/// Survey all roots (or a limited subset) against the dictionary
pub fn run_survey(
    roots: &[String],
    lexicon: &WordSet,
    rules: &Rules,
    limit: Option<usize>,
) -> SurveyStatistics {
    let survey_roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    println!(
        "🔍 Surveying {} roots against {} dictionary words...",
        survey_roots.len(),
        lexicon.len()
    );

    // Progress bar
    let pb = ProgressBar::new(survey_roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut yields: Vec<RootYield> = Vec::with_capacity(survey_roots.len());
    let total_start = Instant::now();

    for (idx, root) in survey_roots.iter().enumerate() {
        let result = solve_root(root, lexicon, rules);
        yields.push(RootYield {
            root: result.root,
            playable: result.words.len(),
            best_score: result.best_score,
        });

        if idx % 10 == 0 {
            let avg =
                yields.iter().map(|y| y.playable).sum::<usize>() as f64 / yields.len() as f64;
            pb.set_message(format!("Avg: {avg:.1} words/root"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(yields, total_start.elapsed())
}

/// Reduce per-root yields to survey statistics
fn summarize(mut yields: Vec<RootYield>, total_time: Duration) -> SurveyStatistics {
    yields.sort_by_key(|y| y.playable);

    let surveyed = yields.len();
    let total_playable: usize = yields.iter().map(|y| y.playable).sum();
    let average_playable = if surveyed > 0 {
        total_playable as f64 / surveyed as f64
    } else {
        0.0
    };
    let median_playable = if surveyed > 0 {
        yields[surveyed / 2].playable
    } else {
        0
    };

    let thinnest: Vec<RootYield> = yields.iter().take(10).cloned().collect();
    let richest: Vec<RootYield> = yields.iter().rev().take(10).cloned().collect();
    let highest_scoring = yields.iter().max_by_key(|y| y.best_score).cloned();

    let distribution = BUCKETS
        .iter()
        .map(|&(label, lo, hi)| {
            let count = yields
                .iter()
                .filter(|y| y.playable >= lo && y.playable < hi)
                .count();
            (label, count)
        })
        .collect();

    SurveyStatistics {
        surveyed,
        total_playable,
        average_playable,
        median_playable,
        thinnest,
        richest,
        highest_scoring,
        distribution,
        total_time,
    }
}

/// Print survey statistics with distribution bars
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Root Pool".bright_cyan().bold());
    println!("  Roots surveyed:      {}", stats.surveyed);
    println!("  Playable words:      {} total", stats.total_playable);
    println!(
        "  Average per root:    {}",
        format!("{:.1}", stats.average_playable)
            .bright_yellow()
            .bold()
    );
    println!("  Median per root:     {}", stats.median_playable);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.surveyed > 0 {
        println!(
            "  Time per root:       {:.1}ms",
            stats.total_time.as_millis() as f64 / stats.surveyed as f64
        );
    }

    println!("\n📈 {}", "Yield Distribution".bright_cyan().bold());
    let max_count = stats
        .distribution
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(1);
    for &(label, count) in &stats.distribution {
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        let percentage = if stats.surveyed > 0 {
            count as f64 / stats.surveyed as f64 * 100.0
        } else {
            0.0
        };
        println!("  {label:>5} words: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.thinnest.is_empty() {
        println!("\n😰 {}", "Thinnest Roots".yellow().bold());
        for y in stats.thinnest.iter().take(5) {
            println!(
                "  {} ({} playable words)",
                y.root.to_uppercase().yellow(),
                y.playable
            );
        }
    }

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Roots".green().bold());
        for y in stats.richest.iter().take(5) {
            println!(
                "  {} ({} playable words)",
                y.root.to_uppercase().bright_green(),
                y.playable
            );
        }
    }

    if let Some(best) = &stats.highest_scoring {
        println!("\n🏆 {}", "Highest Possible Score".bright_cyan().bold());
        println!(
            "  {} scores up to {} points over {} words",
            best.root.to_uppercase().bright_white().bold(),
            best.best_score.to_string().bright_yellow().bold(),
            best.playable
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yield_of(root: &str, playable: usize, best_score: usize) -> RootYield {
        RootYield {
            root: root.to_string(),
            playable,
            best_score,
        }
    }

    #[test]
    fn summarize_orders_thinnest_and_richest() {
        let stats = summarize(
            vec![
                yield_of("painters", 80, 900),
                yield_of("question", 20, 150),
                yield_of("triangles", 150, 2500),
            ],
            Duration::from_secs(1),
        );

        assert_eq!(stats.surveyed, 3);
        assert_eq!(stats.total_playable, 250);
        assert_eq!(stats.median_playable, 80);
        assert_eq!(stats.thinnest[0].root, "question");
        assert_eq!(stats.richest[0].root, "triangles");
        assert_eq!(stats.highest_scoring.unwrap().root, "triangles");
    }

    #[test]
    fn summarize_buckets_cover_every_root() {
        let stats = summarize(
            vec![
                yield_of("a", 0, 0),
                yield_of("b", 14, 50),
                yield_of("c", 15, 60),
                yield_of("d", 59, 400),
                yield_of("e", 99, 800),
                yield_of("f", 255, 4000),
            ],
            Duration::from_millis(10),
        );

        let bucketed: usize = stats.distribution.iter().map(|&(_, count)| count).sum();
        assert_eq!(bucketed, stats.surveyed);
        assert_eq!(stats.distribution[0], ("none", 1));
        assert_eq!(stats.distribution[5], ("100+", 1));
    }

    #[test]
    fn summarize_handles_an_empty_survey() {
        let stats = summarize(Vec::new(), Duration::ZERO);

        assert_eq!(stats.surveyed, 0);
        assert_eq!(stats.median_playable, 0);
        assert!(stats.average_playable.abs() < f64::EPSILON);
        assert!(stats.highest_scoring.is_none());
    }
}
