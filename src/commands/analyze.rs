//! Opening-word analysis
//!
//! Scores an opener against every possible secret and summarizes the feedback.

use crate::core::{Feedback, Word, evaluate};
use crate::wordlists::WordLists;
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Summary of one opener against the solution list
#[derive(Debug, Clone)]
pub struct OpenerAnalysis {
    pub opener: String,
    pub total_solutions: usize,
    pub average_correct: f64,
    pub average_present: f64,
    /// Secrets that share no letter with the opener
    pub all_absent: usize,
    /// Most frequent patterns, most common first
    pub top_patterns: Vec<(Feedback, usize)>,
    pub duration: Duration,
}

/// Evaluate `opener` against every solution in parallel
///
/// # Errors
///
/// Returns an error if:
/// - The opener is malformed or not in the valid-guess list
/// - Its length differs from the solution words
pub fn analyze_opener(
    opener: &str,
    lists: &WordLists,
    top: usize,
    show_progress: bool,
) -> Result<OpenerAnalysis> {
    let opener_word = Word::new(opener).with_context(|| format!("Invalid word '{opener}'"))?;
    if !lists.is_valid_guess(opener_word.text()) {
        bail!("Word '{opener_word}' not in word list");
    }

    let solutions = lists.solutions().as_slice();
    let pb = if show_progress {
        let pb = ProgressBar::new(solutions.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<Feedback> = solutions
        .par_iter()
        .map(|secret| {
            let feedback = evaluate(secret, &opener_word);
            pb.inc(1);
            feedback
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_and_clear();
    let duration = start.elapsed();

    let total = results.len();
    let correct: usize = results.iter().map(Feedback::count_correct).sum();
    let present: usize = results.iter().map(Feedback::count_present).sum();
    let all_absent = results
        .iter()
        .filter(|fb| fb.count_correct() == 0 && fb.count_present() == 0)
        .count();

    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for feedback in results {
        *counts.entry(feedback).or_insert(0) += 1;
    }
    let mut top_patterns: Vec<(Feedback, usize)> = counts.into_iter().collect();
    top_patterns.sort_by(|(a, count_a), (b, count_b)| {
        count_b
            .cmp(count_a)
            .then_with(|| a.to_string().cmp(&b.to_string()))
    });
    top_patterns.truncate(top);

    info!(opener = %opener_word, total, ?duration, "opener analyzed");

    Ok(OpenerAnalysis {
        opener: opener_word.text().to_string(),
        total_solutions: total,
        average_correct: correct as f64 / total as f64,
        average_present: present as f64 / total as f64,
        all_absent,
        top_patterns,
        duration,
    })
}
