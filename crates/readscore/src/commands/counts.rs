//! Counts command: raw text statistics behind the scores.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscore_core::counts::{self, ContentCounts};
use readscore_core::markdown;

use super::{is_markdown, read_input};

/// Arguments for the `counts` subcommand.
#[derive(Args, Debug)]
pub struct CountsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Print sentence, word, syllable and letter counts for a file.
///
/// Empty input is not an error here; it simply counts as zero.
#[instrument(name = "cmd_counts", skip_all, fields(file = %args.file))]
pub fn cmd_counts(
    args: CountsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing counts command");

    let mut content = read_input(&args.file, max_input_bytes)?;
    if is_markdown(&args.file) {
        content = markdown::strip_to_prose(&content);
    }

    let counts = counts::count_content(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for (label, value) in rows(&counts) {
            println!("{} {value:>7}", format!("{label:<16}").dimmed());
        }
    }

    Ok(())
}

fn rows(counts: &ContentCounts) -> [(&'static str, usize); 9] {
    [
        ("Sentences", counts.sentences),
        ("Words", counts.words),
        ("Big words", counts.big_words),
        ("Small words", counts.small_words),
        ("Tiny words", counts.tiny_words),
        ("Linsear ignores", counts.linsear_ignores),
        ("Syllables", counts.syllables),
        ("Letters", counts.letters),
        ("Characters", counts.characters),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_field() {
        let counts = ContentCounts {
            sentences: 1,
            words: 2,
            big_words: 3,
            small_words: 4,
            tiny_words: 5,
            linsear_ignores: 6,
            syllables: 7,
            letters: 8,
            characters: 9,
        };
        let values: Vec<usize> = rows(&counts).iter().map(|(_, v)| *v).collect();
        assert_eq!(values, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn missing_file_fails() {
        let args = CountsArgs {
            file: Utf8PathBuf::from("/nonexistent/input.txt"),
        };
        assert!(cmd_counts(args, false, None).is_err());
    }
}
