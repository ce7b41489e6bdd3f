//! Aggregate text statistics.

use serde::{Deserialize, Serialize};

use crate::syllables::count_syllables;
use crate::text;

/// Function words excluded from the Linsear Write numerator.
///
/// Matched against raw tokens, so `The` and `the.` do not match.
pub const LINSEAR_IGNORES: &[&str] = &["the", "is", "are", "was", "were"];

/// Words with at least this many syllables are big words.
const BIG_WORD_SYLLABLES: usize = 3;

/// Counts extracted from a block of text.
///
/// Every word lands in exactly one of `big_words` or `small_words`;
/// `tiny_words` and `linsear_ignores` are subsets of `small_words`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
    /// Sentence fragments between runs of `.`, `!`, `?`.
    pub sentences: usize,
    /// Whitespace-separated tokens.
    pub words: usize,
    /// Words with 3 or more syllables.
    pub big_words: usize,
    /// Words with 1 or 2 syllables.
    pub small_words: usize,
    /// Words with exactly 1 syllable.
    pub tiny_words: usize,
    /// Small words found in [`LINSEAR_IGNORES`].
    pub linsear_ignores: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// ASCII letters.
    pub letters: usize,
    /// ASCII letters and digits.
    pub characters: usize,
}

/// Sanitize `text` and count its sentences, words, syllables and letters.
///
/// Never fails; empty input yields all zeros.
///
/// ```
/// use readscore_core::count_content;
///
/// let counts = count_content("<p>The cat sat.</p>");
/// assert_eq!(counts.sentences, 1);
/// assert_eq!(counts.words, 3);
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_content(text: &str) -> ContentCounts {
    let clean = text::sanitize(text);
    let words = text::split_words(&clean);

    let mut counts = ContentCounts {
        sentences: text::split_sentences(&clean).len(),
        words: words.len(),
        letters: clean.chars().filter(char::is_ascii_alphabetic).count(),
        characters: clean.chars().filter(char::is_ascii_alphanumeric).count(),
        ..ContentCounts::default()
    };

    for word in words {
        let syllables = count_syllables(word);
        counts.syllables += syllables;

        if syllables >= BIG_WORD_SYLLABLES {
            counts.big_words += 1;
        } else {
            counts.small_words += 1;
            if syllables == 1 {
                counts.tiny_words += 1;
            }
            if LINSEAR_IGNORES.contains(&word) {
                counts.linsear_ignores += 1;
            }
        }
    }

    tracing::debug!(
        sentences = counts.sentences,
        words = counts.words,
        syllables = counts.syllables,
        "counted content"
    );
    counts
}
