//! Readability scoring.
//!
//! Eight classic formulas computed from [`ContentCounts`], plus a composite
//! average. Grade-level formulas read "higher = harder"; Flesch Reading Ease
//! is inverted ("higher = easier") and is left out of the average.
//!
//! | Field | Formula | Rounding |
//! |---|---|---|
//! | `flesch_kincaid_grade` | `0.39 * ASL + 11.8 * ASW - 15.59` | 2 places |
//! | `flesch_read_ease` | `206.835 - 1.015 * ASL - 84.6 * ASW` | whole |
//! | `gunning_fog` | `0.4 * (ASL + complex%)` | 1 place |
//! | `automated_read` | `4.71 * chars/word + 0.5 * ASL - 21.43` | 2 places |
//! | `linsear_write` | `((small - ignored) + 3 * big) / sentences`, halved | 2 places |
//! | `forecast_read` | `20 - tiny * 150 / (words * 10)` | 2 places |
//! | `coleman_liau` | `0.0588 * L - 0.296 * S - 15.8` | 2 places |
//! | `smog_index` | `1.043 * sqrt(big * 30 / sentences + 3.1291)` | 2 places |
//! | `fry_read` | same as `forecast_read` | 2 places |
//!
//! [`score_readability`] does not guard against empty input: zero words or
//! sentences give `NaN`/infinite scores. [`check_readability`] is the
//! validating entry point.

use serde::{Deserialize, Serialize};

use crate::counts::{ContentCounts, count_content};
use crate::error::{AnalysisError, AnalysisResult};
use crate::markdown;
use crate::round::{round0, round1, round2};

/// Linsear Write raw scores above this are halved; at or below, halved minus one.
const LINSEAR_THRESHOLD: f64 = 20.0;

/// Scores produced by [`score_readability`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    /// Flesch-Kincaid Grade Level. General purpose.
    pub flesch_kincaid_grade: f64,
    /// Flesch Reading Ease. Higher is easier.
    pub flesch_read_ease: f64,
    /// Gunning Fog Index. Business writing.
    pub gunning_fog: f64,
    /// Automated Readability Index. Technical writing.
    pub automated_read: f64,
    /// Linsear Write. Technical writing.
    pub linsear_write: f64,
    /// FORCAST. Technical manuals.
    pub forecast_read: f64,
    /// Coleman-Liau Index. Education.
    pub coleman_liau: f64,
    /// SMOG Index. Healthcare.
    pub smog_index: f64,
    /// Fry estimate. Computed with the FORCAST formula.
    pub fry_read: f64,
    /// Mean of every score except Flesch Reading Ease, rounded to a whole number.
    pub average_score: f64,
}

impl ReadabilityScores {
    /// Look up a single score.
    pub const fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::FleschKincaidGrade => self.flesch_kincaid_grade,
            Formula::FleschReadEase => self.flesch_read_ease,
            Formula::GunningFog => self.gunning_fog,
            Formula::AutomatedRead => self.automated_read,
            Formula::LinsearWrite => self.linsear_write,
            Formula::ForecastRead => self.forecast_read,
            Formula::ColemanLiau => self.coleman_liau,
            Formula::SmogIndex => self.smog_index,
            Formula::FryRead => self.fry_read,
            Formula::Average => self.average_score,
        }
    }

    /// All scores paired with their formula, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Formula, f64)> + '_ {
        Formula::ALL.iter().map(|&f| (f, self.get(f)))
    }
}

/// A readability formula (or the composite average).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Formula {
    /// Flesch-Kincaid Grade Level.
    FleschKincaidGrade,
    /// Flesch Reading Ease (inverted scale).
    FleschReadEase,
    /// Gunning Fog Index.
    GunningFog,
    /// Automated Readability Index.
    AutomatedRead,
    /// Linsear Write.
    LinsearWrite,
    /// FORCAST.
    ForecastRead,
    /// Coleman-Liau Index.
    ColemanLiau,
    /// SMOG Index.
    SmogIndex,
    /// Fry estimate.
    FryRead,
    /// Composite of all grade-level formulas.
    #[default]
    Average,
}

impl Formula {
    /// Every formula, in display order.
    pub const ALL: &'static [Self] = &[
        Self::FleschKincaidGrade,
        Self::FleschReadEase,
        Self::GunningFog,
        Self::AutomatedRead,
        Self::LinsearWrite,
        Self::ForecastRead,
        Self::ColemanLiau,
        Self::SmogIndex,
        Self::FryRead,
        Self::Average,
    ];

    /// Returns the formula's kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FleschKincaidGrade => "flesch-kincaid-grade",
            Self::FleschReadEase => "flesch-read-ease",
            Self::GunningFog => "gunning-fog",
            Self::AutomatedRead => "automated-read",
            Self::LinsearWrite => "linsear-write",
            Self::ForecastRead => "forecast-read",
            Self::ColemanLiau => "coleman-liau",
            Self::SmogIndex => "smog-index",
            Self::FryRead => "fry-read",
            Self::Average => "average",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FleschKincaidGrade => "Flesch-Kincaid Grade",
            Self::FleschReadEase => "Flesch Reading Ease",
            Self::GunningFog => "Gunning Fog",
            Self::AutomatedRead => "Automated Readability",
            Self::LinsearWrite => "Linsear Write",
            Self::ForecastRead => "FORCAST",
            Self::ColemanLiau => "Coleman-Liau",
            Self::SmogIndex => "SMOG Index",
            Self::FryRead => "Fry",
            Self::Average => "Average",
        }
    }

    /// Whether a higher score means easier text.
    pub const fn higher_is_easier(&self) -> bool {
        matches!(self, Self::FleschReadEase)
    }

    /// Whether `score` is worse than `threshold` on this formula's scale.
    ///
    /// Non-finite scores always fail.
    pub const fn exceeds(&self, score: f64, threshold: f64) -> bool {
        if !score.is_finite() {
            return true;
        }
        if self.higher_is_easier() {
            score < threshold
        } else {
            score > threshold
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score `text` on every formula.
///
/// Never fails. Text without words or sentences produces non-finite scores.
///
/// ```
/// use readscore_core::score_readability;
///
/// let scores = score_readability("The cat sat on the mat.");
/// assert!(scores.flesch_read_ease > 90.0);
/// assert!(score_readability("").average_score.is_nan());
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score_readability(text: &str) -> ReadabilityScores {
    score_counts(&count_content(text))
}

/// Apply the formulas to counts that have already been gathered.
///
/// Arithmetic stays in plain multiply-then-add form: a fused multiply-add
/// shifts the last bit, and that is enough to flip a rounded digit.
#[allow(clippy::suboptimal_flops)]
pub fn score_counts(counts: &ContentCounts) -> ReadabilityScores {
    let sentences = counts.sentences as f64;
    let words = counts.words as f64;
    let big_words = counts.big_words as f64;
    let small_words = counts.small_words as f64;
    let tiny_words = counts.tiny_words as f64;
    let linsear_ignores = counts.linsear_ignores as f64;
    let syllables = counts.syllables as f64;
    let letters = counts.letters as f64;
    let characters = counts.characters as f64;

    let avg_chars = characters / words;
    let avg_sentence_length = words / sentences;
    let avg_syllables_per_word = syllables / words;
    let complex_percent = 100.0 * (big_words / words);
    let letters_per_100_words = 100.0 * (letters / words);
    let sentences_per_100_words = 100.0 * (sentences / words);

    let flesch_kincaid_grade =
        round2(0.39 * avg_sentence_length + (11.8 * avg_syllables_per_word) - 15.59);
    let flesch_read_ease =
        round0(206.835 - (1.015 * avg_sentence_length) - (84.6 * avg_syllables_per_word));
    let gunning_fog = round1(0.4 * (avg_sentence_length + complex_percent));
    let automated_read = round2((4.71 * avg_chars) + (0.5 * avg_sentence_length) - 21.43);

    let linsear_raw = round2(((small_words - linsear_ignores) + (3.0 * big_words)) / sentences);
    let linsear_write = if linsear_raw > LINSEAR_THRESHOLD {
        linsear_raw / 2.0
    } else {
        (linsear_raw / 2.0) - 1.0
    };

    let forecast_read = round2(20.0 - ((tiny_words * 150.0) / (words * 10.0)));
    let coleman_liau =
        round2(0.0588 * letters_per_100_words - 0.296 * sentences_per_100_words - 15.8);
    let smog_index = round2(1.043 * (big_words * (30.0 / sentences) + 3.1291).sqrt());
    let fry_read = round2(20.0 - ((tiny_words * 150.0) / (words * 10.0)));

    let graded = [
        flesch_kincaid_grade,
        gunning_fog,
        automated_read,
        linsear_write,
        forecast_read,
        coleman_liau,
        smog_index,
        fry_read,
    ];
    let sum: f64 = graded.iter().sum();
    let average_score = round0(sum / graded.len() as f64);

    ReadabilityScores {
        flesch_kincaid_grade,
        flesch_read_ease,
        gunning_fog,
        automated_read,
        linsear_write,
        forecast_read,
        coleman_liau,
        smog_index,
        fry_read,
        average_score,
    }
}

/// Result of a gated readability check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Counts the scores were computed from.
    pub counts: ContentCounts,
    /// Every formula's score.
    pub scores: ReadabilityScores,
    /// Formula the threshold applies to.
    pub gate: Formula,
    /// Threshold for the gated formula (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Whether the gated score is worse than the threshold.
    pub failed: bool,
}

impl ReadabilityReport {
    /// The score the gate was evaluated against.
    pub const fn gated_score(&self) -> f64 {
        self.scores.get(self.gate)
    }
}

/// Score text and compare one formula against an optional threshold.
///
/// Unlike [`score_readability`], input with no words or no sentences is
/// rejected with [`AnalysisError::EmptyInput`] instead of scoring `NaN`.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `strip_md` - If `true`, strip markdown formatting before analysis.
/// * `gate` - Which score the threshold applies to.
/// * `threshold` - Worst acceptable score. A ceiling for grade-level
///   formulas, a floor for Flesch Reading Ease.
#[tracing::instrument(skip(text), fields(text_len = text.len(), strip_md))]
pub fn check_readability(
    text: &str,
    strip_md: bool,
    gate: Formula,
    threshold: Option<f64>,
) -> AnalysisResult<ReadabilityReport> {
    let prose = if strip_md {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let counts = count_content(&prose);
    if counts.words == 0 || counts.sentences == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let scores = score_counts(&counts);
    let failed = threshold.is_some_and(|max| gate.exceeds(scores.get(gate), max));
    tracing::debug!(%gate, score = scores.get(gate), ?threshold, failed, "readability gate");

    Ok(ReadabilityReport {
        counts,
        scores,
        gate,
        threshold,
        failed,
    })
}
