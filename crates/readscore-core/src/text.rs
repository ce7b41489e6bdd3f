//! Text sanitizing and tokenizing.
//!
//! Turns markup-bearing input into plain text and splits it into the
//! sentence and word units that the counters work on. The normalization
//! steps in [`sanitize`] run in a fixed order; each one sees the output of
//! the previous step, so reordering them changes the counts.

use regex::Regex;
use std::sync::LazyLock;

/// HTML tags. An unterminated `<...` running to the end of input counts too.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+(?:>|$)").expect("valid regex"));

/// Spaces and tabs at the start of any line. A line starts at the beginning
/// of input, after `\n`, or after one of the other line terminators
/// (`\r`, U+2028, U+2029), which is kept in capture group 1.
static LEADING_INDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^|[\r\x{2028}\x{2029}])[ \t]+").expect("valid regex")
});

/// Runs of newlines.
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

/// Runs of sentence-ending punctuation.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Whitespace as web text treats it: ASCII whitespace including vertical
/// tab, no-break space, the Unicode space separators, the line and paragraph
/// separators and the byte order mark. U+0085 (NEL) is not whitespace here.
pub const fn is_text_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn trim_text_space(text: &str) -> &str {
    text.trim_matches(is_text_space)
}

fn split_text_space(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_text_space).filter(|token| !token.is_empty())
}

/// Strip markup and normalize whitespace and entities.
///
/// Steps, in order:
/// 1. remove HTML tags
/// 2. remove leading spaces/tabs on every line
/// 3. collapse newline runs into one space
/// 4. replace tabs with spaces
/// 5. decode `&#39;` and `&quot;`
/// 6. trim the result
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn sanitize(text: &str) -> String {
    let text = TAG_PATTERN.replace_all(text, "");
    let text = LEADING_INDENT.replace_all(&text, "$1");
    let text = NEWLINES.replace_all(&text, " ");
    let text = text
        .replace('\t', " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"");
    trim_text_space(&text).to_string()
}

/// Split sanitized text into sentence fragments.
///
/// Splits on runs of `.`, `!` and `?` and drops blank fragments. Text with
/// content but no terminal punctuation is a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .filter(|fragment| !trim_text_space(fragment).is_empty())
        .collect()
}

/// Split sanitized text into word tokens on runs of [`is_text_space`].
///
/// Tokens keep their punctuation and case.
pub fn split_words(text: &str) -> Vec<&str> {
    split_text_space(text).collect()
}

/// Count words after stripping HTML tags.
///
/// A lighter pass than [`crate::counts::count_content`]: only tags are
/// removed, entities and indentation are left alone.
pub fn count_words(text: &str) -> usize {
    split_text_space(&TAG_PATTERN.replace_all(text, "")).count()
}
