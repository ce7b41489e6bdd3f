//! Markdown to prose.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping, so nested code blocks and reference links come out right.
//! Raw HTML is passed through untouched; the sanitizer in [`crate::text`]
//! removes the tags and keeps their text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Reduce markdown to the prose a reader would see.
///
/// Drops:
/// - YAML frontmatter
/// - Code blocks (fenced and indented) and inline code
/// - Headings
/// - Tables
/// - Images
///
/// Keeps:
/// - Paragraph, list item and blockquote text
/// - Link text (the visible part)
/// - Emphasis/strong text (without markers)
/// - Raw HTML, for the sanitizer to strip
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
    // Metadata blocks are only recognized at the very start of the input.
    let trimmed = text.trim_start();
    let source = if trimmed.starts_with("---") { trimmed } else { text };
    let parser = Parser::new_ext(source, options);

    let mut prose = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_)
                | Tag::Heading { .. }
                | Tag::Table(_)
                | Tag::Image { .. }
                | Tag::MetadataBlock(_),
            ) => skip_depth += 1,
            Event::End(
                TagEnd::CodeBlock
                | TagEnd::Heading(_)
                | TagEnd::Table
                | TagEnd::Image
                | TagEnd::MetadataBlock(_),
            ) => skip_depth = skip_depth.saturating_sub(1),

            _ if skip_depth > 0 => {}

            Event::Text(t) | Event::Html(t) | Event::InlineHtml(t) => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak => prose.push(' '),
            // Block boundaries must not glue words together.
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::HtmlBlock) => prose.push(' '),

            _ => {}
        }
    }

    prose
}
