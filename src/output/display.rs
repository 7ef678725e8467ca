//! Display functions for command results

use super::formatters::{bracketed_sequence, cell_width, describe_sequence, header_labels};
use crate::commands::{ComparisonResult, SuggestResult};
use crate::core::format_sequence;
use colored::Colorize;

/// Print distance and transform sequence for a comparison
pub fn print_comparison(result: &ComparisonResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} → {}",
        result.source.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n   Distance:    {}",
        result.distance.to_string().bright_yellow().bold()
    );
    println!(
        "   Transforms:  {} ({})",
        bracketed_sequence(&result.transforms).green(),
        describe_sequence(&result.transforms)
    );

    if verbose {
        println!("\n   {}", "Walk (top-down):".bright_cyan().bold());
        for step in &result.steps {
            let label = if step.free_match {
                "match".bright_black().to_string()
            } else {
                step.transform.name().to_string()
            };
            println!("     ({}, {})  {}", step.row, step.col, label);
        }
    }
}

/// Print the distance table, highlighting cells on the reconstruction walk
pub fn print_table(result: &ComparisonResult) {
    let width = cell_width(&result.table).max(1);
    let columns = header_labels(&result.target);
    let rows = header_labels(&result.source);

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "DISTANCE TABLE:".bright_cyan().bold(),
        result.source.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let header: Vec<String> = columns.iter().map(|c| format!("{c:>width$}")).collect();
    println!("\n   {:>width$} {}", "", header.join(" ").bright_cyan());

    for (r, cells) in result.table.iter_rows().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(c, value)| {
                let cell = format!("{value:>width$}");
                if result.on_path(r, c) {
                    cell.green().bold().to_string()
                } else {
                    cell.bright_black().to_string()
                }
            })
            .collect();
        println!(
            "   {} {}",
            format!("{:>width$}", rows[r]).bright_cyan(),
            line.join(" ")
        );
    }

    println!(
        "\n   Distance {} via [{}]",
        result.distance.to_string().bright_yellow().bold(),
        format_sequence(&result.transforms)
    );
}

/// Print the result of a suggestion round
pub fn print_suggest_result(result: &SuggestResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Feedback for {}: distance {}, transforms {}",
        result.feedback.guess.bright_yellow().bold(),
        result.feedback.distance,
        bracketed_sequence(&result.feedback.transforms).green()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n   Candidates:  {} → {}",
        result.candidates_before,
        result.remaining.len().to_string().bright_yellow().bold()
    );

    if verbose || result.remaining.len() <= 20 {
        for word in &result.remaining {
            println!("     {word}");
        }
    }

    match &result.next_guess {
        Some(guess) => {
            println!(
                "\n   Next guess:  {}",
                guess.to_uppercase().bright_green().bold()
            );
            if let Some(metrics) = result.metrics {
                println!("   Entropy:     {:.3} bits", metrics.entropy);
                println!(
                    "   Expected:    {:.1} candidates remain",
                    metrics.expected_remaining
                );
                println!("   Worst case:  {} candidates", metrics.max_partition);
            }
        }
        None if result.budget_exhausted => {
            println!(
                "\n{}",
                format!(
                    "⏹ No guesses left ({} candidates remain).",
                    result.remaining.len()
                )
                .yellow()
                .bold()
            );
        }
        None => {
            println!(
                "\n{}",
                "❌ No candidates remain! The feedback may be incorrect."
                    .red()
                    .bold()
            );
        }
    }
}
