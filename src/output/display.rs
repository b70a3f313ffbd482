//! Display functions for command results

use super::formatters::group_line;
use crate::commands::{RankResult, ScoreBreakdown};
use colored::Colorize;

/// Print the best score groups, one validation line each
pub fn print_rank_result(result: &RankResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP SCORING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    if result.groups.is_empty() {
        println!("{}", "No qualifying words in the corpus.".yellow());
    }

    for group in &result.groups {
        println!("{}", group_line(group.score, &group.words));
    }

    if verbose {
        println!("\n📊 {}", "Run Statistics".bright_cyan().bold());
        println!("   Candidates:      {}", result.candidates);
        println!(
            "   Qualifying:      {} {}",
            result.qualifying,
            format!(
                "({:.1}%)",
                if result.candidates > 0 {
                    result.qualifying as f64 / result.candidates as f64 * 100.0
                } else {
                    0.0
                }
            )
            .green()
        );
        println!("   Distinct scores: {}", result.distinct_scores);
        println!("   Time taken:      {:.3}s", result.duration.as_secs_f64());
        println!("   Words/second:    {:.0}", result.words_per_second);
    }
}

/// Print the scoring breakdown of a single word
pub fn print_score_breakdown(breakdown: &ScoreBreakdown) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE BREAKDOWN:".bright_cyan().bold(),
        breakdown.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Length:           {}", breakdown.length);
    println!("   Distinct letters: {}", breakdown.distinct_letters);
    println!("   Blanks needed:    {}", breakdown.blanks_needed);

    if breakdown.playable {
        println!("   Playable:         {}", "yes".green());
    } else {
        println!(
            "   Playable:         {}",
            "no (needs more than 2 blanks)".red()
        );
    }

    if let Some(member) = breakdown.in_dictionary {
        let verdict = if member {
            "yes".green()
        } else {
            "no".yellow()
        };
        println!("   In dictionary:    {verdict}");
    }

    println!("\n   Base score:       {}", breakdown.base_score);
    println!("   Edge bonus:       {}", breakdown.bonus);
    println!(
        "   Final score:      {}",
        breakdown.final_score.to_string().bright_yellow().bold()
    );
}
