//! Score command: every readability formula, optionally gated on one.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscore_core::readability::{self, Formula, ReadabilityReport};

use super::{is_markdown, read_input};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Formula the threshold applies to [default: average]
    #[arg(long, value_enum)]
    pub gate: Option<Formula>,

    /// Worst acceptable score on the gate formula (a floor for flesch-read-ease).
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// Score a file on every readability formula.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_gate: Formula,
    config_max_grade: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, gate = ?args.gate, max_grade = ?args.max_grade, "executing score command");

    let content = read_input(&args.file, max_input_bytes)?;

    let gate = args.gate.unwrap_or(config_gate);
    let threshold = args.max_grade.or(config_max_grade);

    let report =
        readability::check_readability(&content, is_markdown(&args.file), gate, threshold)
            .with_context(|| format!("failed to score readability of {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if report.failed {
            bail!("{} fails the {} gate", args.file, report.gate);
        }
        return Ok(());
    }

    print_scores(&report);

    match report.threshold {
        Some(limit) if report.failed => {
            let relation = if gate.higher_is_easier() { "min" } else { "max" };
            bail!(
                "{} scores {} on {} ({relation}: {limit}). Shorten sentences or use simpler words.",
                args.file,
                report.gated_score(),
                gate.label(),
            );
        }
        Some(limit) => {
            println!(
                "{} {} scores {} on {} (limit: {limit})",
                "PASS:".green(),
                args.file,
                report.gated_score(),
                gate.label(),
            );
        }
        None => {}
    }

    Ok(())
}

fn print_scores(report: &ReadabilityReport) {
    for (formula, score) in report.scores.iter() {
        let label = format!("{:<22}", formula.label());
        if formula == report.gate {
            println!("{} {score:>7}", label.bold());
        } else {
            println!("{} {score:>7}", label.dimmed());
        }
    }
}
