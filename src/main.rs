//! Distle - CLI
//!
//! Edit distance, transform sequences, and feedback-driven guess suggestions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use distle::{
    commands::{FeedbackSource, SuggestConfig, compare_words, run_suggest},
    core::{distance, format_sequence},
    output::{print_comparison, print_suggest_result, print_table},
    player::{PlayerConfig, Strategy},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "distle",
    about = "Edit distance with canonical transform sequences, and a Distle guess helper",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: hybrid (default), entropy, minimax, random
    #[arg(short, long, global = true, default_value = "hybrid")]
    strategy: String,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit distance between two words
    Distance { source: String, target: String },

    /// Print the top-down transform sequence from SOURCE to TARGET
    Transforms {
        source: String,
        target: String,

        /// Print only the letter codes
        #[arg(short, long)]
        codes: bool,
    },

    /// Print the full distance table with the reconstruction walk highlighted
    Table { source: String, target: String },

    /// Filter WORDS with the feedback for GUESS and suggest the next guess
    Suggest {
        /// The guess that was played
        guess: String,

        /// Secret word to compute feedback against (omit when using --transforms)
        #[arg(short, long, required_unless_present = "transforms")]
        target: Option<String>,

        /// Observed transform codes, e.g. "RRI"
        #[arg(short = 'x', long, conflicts_with = "target")]
        transforms: Option<String>,

        /// Maximum number of guesses for the game
        #[arg(short = 'n', long)]
        max_guesses: Option<usize>,

        /// Candidate words
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Initialize tracing subscriber.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlayerConfig {
        strategy: cli.strategy,
        ..PlayerConfig::default()
    };

    match cli.command {
        Commands::Distance { source, target } => {
            println!("{}", distance(&source, &target));
            Ok(())
        }
        Commands::Transforms {
            source,
            target,
            codes,
        } => {
            run_transforms_command(&source, &target, codes, cli.verbose);
            Ok(())
        }
        Commands::Table { source, target } => {
            print_table(&compare_words(&source, &target));
            Ok(())
        }
        Commands::Suggest {
            guess,
            target,
            transforms,
            max_guesses,
            words,
        } => {
            let config = PlayerConfig {
                max_guesses: max_guesses.unwrap_or(config.max_guesses),
                ..config
            };
            let feedback = match (target, transforms) {
                (_, Some(codes)) => FeedbackSource::Transforms(codes),
                (Some(target), None) => FeedbackSource::Target(target),
                (None, None) => anyhow::bail!("either --target or --transforms is required"),
            };
            let strategy = config.strategy();
            suggest_command(guess, feedback, words, &config, strategy, cli.verbose)
        }
    }
}

fn run_transforms_command(source: &str, target: &str, codes: bool, verbose: bool) {
    let result = compare_words(source, target);
    if codes {
        println!("{}", format_sequence(&result.transforms));
    } else {
        print_comparison(&result, verbose);
    }
}

fn suggest_command<S: Strategy>(
    guess: String,
    feedback: FeedbackSource,
    words: Vec<String>,
    config: &PlayerConfig,
    strategy: S,
    verbose: bool,
) -> Result<()> {
    let mut suggest = SuggestConfig::new(guess, feedback, words);
    suggest.max_guesses = config.max_guesses;

    let result = run_suggest(suggest, strategy).context("suggest failed")?;
    print_suggest_result(&result, verbose);
    Ok(())
}
