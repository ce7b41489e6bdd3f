//! Core library for readscore.
//!
//! Text statistics and readability formulas for prose that may carry HTML
//! markup. The pipeline runs one way:
//!
//! raw text → [`text::sanitize`] → [`count_content`] → [`score_counts`]
//!
//! # Modules
//!
//! - [`text`] - Tag stripping, whitespace/entity normalization, tokenizing
//! - [`syllables`] - Heuristic per-word syllable estimation
//! - [`counts`] - Sentence, word, syllable and letter counts
//! - [`readability`] - Readability formulas and the gated report
//! - [`markdown`] - Markdown to prose
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{count_content, score_readability};
//!
//! let counts = count_content("<p>The cat sat on the mat.</p>");
//! assert_eq!(counts.words, 6);
//!
//! let scores = score_readability("The cat sat on the mat.");
//! assert_eq!(scores.flesch_read_ease, 116.0);
//! assert_eq!(scores.forecast_read, scores.fry_read);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod counts;
pub mod error;
pub mod markdown;
pub mod readability;
mod round;
pub mod syllables;
pub mod text;

pub use config::{
    Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel, Origin, SourceFile,
};
pub use counts::{ContentCounts, count_content};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{
    Formula, ReadabilityReport, ReadabilityScores, check_readability, score_counts,
    score_readability,
};
pub use syllables::count_syllables;
pub use text::count_words;
