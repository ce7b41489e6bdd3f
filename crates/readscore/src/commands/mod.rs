//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod counts;
pub mod info;
pub mod score;
pub mod syllables;

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes)
}

/// Read a stream as UTF-8, failing once it grows past `max_bytes`.
///
/// The size check runs on raw bytes, before decoding, so a limit that cuts a
/// multi-byte character still reports the input as too large.
fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // One byte past the limit is enough to know it was exceeded.
    let limit = max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1));
    let mut bytes = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;

    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: stdin exceeds {max} bytes");
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Whether the input should be reduced from markdown to prose first.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}
