//! Syllables command: per-word syllable estimates.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::syllables::count_syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

/// Print the estimated syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let estimates = estimate(args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
    } else {
        for estimate in &estimates {
            println!("{}\t{}", estimate.word, estimate.syllables);
        }
    }

    Ok(())
}

fn estimate(words: Vec<String>) -> Vec<WordSyllables> {
    words
        .into_iter()
        .map(|word| WordSyllables {
            syllables: count_syllables(&word),
            word,
        })
        .collect()
}
