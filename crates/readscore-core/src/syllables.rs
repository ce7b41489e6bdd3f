//! Heuristic syllable estimation.
//!
//! No dictionary: the count is derived from vowel groups after trimming a
//! silent ending. Irregular words will be off by one here and there, which
//! the readability formulas tolerate.

use regex::Regex;
use std::sync::LazyLock;

/// Silent endings: a trailing non-vowel, `ed`, or a non-vowel followed by `e`.
/// `l` is treated like a vowel so `-le` endings keep their syllable.
static SILENT_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]|ed|[^laeiouy]e)$").expect("valid regex"));

/// One or two adjacent vowels form one syllable group.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Estimate the number of syllables in a single word.
///
/// Always returns at least 1, including for the empty string.
///
/// ```
/// use readscore_core::count_syllables;
///
/// assert_eq!(count_syllables("cat"), 1);
/// assert_eq!(count_syllables("something"), 2);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let lowered = word.to_lowercase();

    // "some" as a prefix is credited as one syllable up front.
    let (word, some_count) = lowered
        .strip_prefix("some")
        .map_or((lowered.as_str(), 0), |rest| (rest, 1));

    let trimmed = SILENT_ENDING.replace(word, "");
    let word = trimmed.strip_prefix('y').unwrap_or(&*trimmed);

    match VOWEL_GROUP.find_iter(word).count() {
        0 => 1,
        groups => groups + some_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_syllable_words() {
        for word in ["cat", "the", "cake", "rhythm", "why", "a", "e"] {
            assert_eq!(count_syllables(word), 1, "{word}");
        }
    }

    #[test]
    fn some_prefix_is_credited() {
        assert_eq!(count_syllables("something"), 2);
        assert_eq!(count_syllables("sometimes"), 3);
        // Exactly "some" leaves nothing to count; the floor applies.
        assert_eq!(count_syllables("some"), 1);
    }

    #[test]
    fn silent_ed_is_dropped() {
        assert_eq!(count_syllables("created"), 1);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(count_syllables("Readability"), 5);
        assert_eq!(count_syllables("READABILITY"), 5);
    }

    #[test]
    fn polysyllables() {
        assert_eq!(count_syllables("beautiful"), 4);
        assert_eq!(count_syllables("organizational"), 6);
        assert_eq!(count_syllables("yellow"), 2);
        assert_eq!(count_syllables("queue"), 2);
    }

    #[test]
    fn trailing_punctuation_is_the_trimmed_ending() {
        assert_eq!(count_syllables("cats."), 1);
    }

    #[test]
    fn never_below_one() {
        for word in ["", "x", "!!!", "hmm", "some", "123"] {
            assert!(count_syllables(word) >= 1, "{word:?}");
        }
    }
}
