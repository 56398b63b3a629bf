//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{CheckResult, OpenerAnalysis};
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n  {}   {}   {}",
        feedback_tiles(&result.guess, &result.feedback),
        result.feedback.to_string().bright_white().bold(),
        result.feedback.to_emoji()
    );

    if !result.guess_is_valid {
        println!(
            "\n  {}",
            format!(
                "Note: '{}' is not in the valid-guess list; a game would reject it",
                result.guess.text().to_uppercase()
            )
            .yellow()
        );
    }

    if result.feedback.is_win() {
        println!("\n{}", "✅ Correct!".green().bold());
    }
}

/// Print an opener analysis
pub fn print_analysis_result(result: &OpenerAnalysis) {
    let width = result.opener.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENER ANALYSIS:".bright_cyan().bold(),
        result.opener.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_solutions);
    println!(
        "   Correct:     [{}] {}",
        create_progress_bar(result.average_correct, width as f64, 20).green(),
        format!("{:.2} per guess", result.average_correct).bright_yellow()
    );
    println!(
        "   Present:     [{}] {}",
        create_progress_bar(result.average_present, width as f64, 20).yellow(),
        format!("{:.2} per guess", result.average_present).bright_yellow()
    );
    println!(
        "   No overlap:  {} ({:.1}%)",
        result.all_absent,
        result.all_absent as f64 / result.total_solutions as f64 * 100.0
    );
    println!("   Time taken:  {:.3}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Most common feedback:".bright_cyan().bold());
    for (feedback, count) in &result.top_patterns {
        let pct = *count as f64 / result.total_solutions as f64 * 100.0;
        println!("   {}  {count:5} ({pct:5.1}%)", feedback.to_emoji());
    }
}
