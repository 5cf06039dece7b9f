//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, ExperimentStatistics, SolveResult, SuggestResult};
use crate::solver::Phase;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {} (scored {}{})",
                step.candidates_before,
                step.candidates_after,
                step.search_space,
                if step.from_opener { ", opener" } else { "" }
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:       [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Expected size: {:.3}", metrics.expected_size);
    println!(
        "   Expected:      {:.1} candidates remain ({:.1}x reduction)",
        metrics.expected_remaining,
        result.expected_reduction()
    );
    println!("   Worst case:    {} candidates", metrics.max_partition);
    println!("   Patterns:      {}", metrics.partitions);
    println!(
        "   Rank:          {} of {} by {}",
        result.rank.to_string().bright_cyan().bold(),
        result.total_guesses,
        result.heuristic
    );
    if result.is_candidate {
        println!("   {}", "Can be the answer".green());
    }
}

/// Print the suggestions for the next turn
pub fn print_suggestion(result: &SuggestResult) {
    match result.phase {
        Phase::Solved => {
            println!("{}", "✅ Already solved".green().bold());
            return;
        }
        Phase::Exhausted => {
            println!(
                "{}",
                "❌ No candidates remain! The feedback may be incorrect."
                    .red()
                    .bold()
            );
            return;
        }
        Phase::Opening | Phase::Guessing => {}
    }

    println!(
        "\n{} candidates remaining",
        result.total_candidates.to_string().bright_cyan().bold()
    );

    if let Some(suggestion) = &result.suggestion {
        println!(
            "\n📊 {} (from {}{})",
            "Suggested guesses".bright_cyan().bold(),
            suggestion.search_space,
            if suggestion.from_opener { ", opener" } else { "" }
        );
        for (i, scored) in suggestion.guesses.iter().enumerate() {
            let is_candidate = result.candidates.contains(&scored.word);
            let word = scored.word.text().to_uppercase();
            println!(
                "   {}. {} {:>8.3}",
                i + 1,
                if is_candidate {
                    word.bright_green().bold()
                } else {
                    word.bright_white().bold()
                },
                scored.score
            );
        }
    }

    if !result.candidates.is_empty() {
        println!("\nRemaining candidates:");
        for candidate in &result.candidates {
            println!("  • {}", candidate.text().to_uppercase());
        }
    }
}

/// Print experiment statistics
pub fn print_experiment_statistics(stats: &ExperimentStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Experiment Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }

    let pct = |n: usize| n as f64 / stats.total_words as f64 * 100.0;
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", pct(stats.solved)).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.1}%)", pct(stats.failed.len())).red()
        );
    }
    println!("  min = {}", stats.min_guesses);
    println!("  max = {}", stats.max_guesses);
    println!(
        "  mean = {}",
        format!("{:.3}", stats.mean_guesses).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s ({:.1}ms per word)",
        stats.total_time.as_secs_f64(),
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:>2} guesses: {} {count:4} ({:5.1}%)",
            bar.green(),
            pct(count)
        );
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by_key(|(_, count)| std::cmp::Reverse(**count));
    for (word, count) in first_guesses.iter().take(5) {
        println!(
            "  {}: {count} times ({:.1}%)",
            word.to_uppercase(),
            pct(**count)
        );
    }

    if !stats.failed.is_empty() {
        println!("\n😰 {}", "Unsolved".yellow().bold());
        for word in stats.failed.iter().take(10) {
            println!("  {}", word.to_uppercase().yellow());
        }
    }
}
