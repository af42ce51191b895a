use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contrast_audit::engine;
use contrast_audit::math::checker::check_sample;
use contrast_audit::types::StyleSample;

// Exit codes: 0 = sufficient contrast / clean audit, 1 = insufficient
// contrast or violations, 2 = input could not be evaluated at all.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "contrast-audit")]
#[command(about = "WCAG 2.0 AA contrast checks for computed-style snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single text/background pair
    Check {
        /// Text color, e.g. "rgb(119, 119, 119)"
        #[arg(long)]
        text: String,

        /// Resolved background color behind the text
        #[arg(long)]
        background: String,

        /// Font size in CSS pixels
        #[arg(long, default_value_t = 16.0)]
        font_size: f64,

        /// Numeric font weight (400 = normal, 700 = bold)
        #[arg(long, default_value_t = 400.0)]
        font_weight: f64,
    },
    /// Audit a JSON array of style samples
    Audit {
        /// Path to the samples file (JSON array of style snapshots)
        file: PathBuf,

        /// Print the full report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contrast_audit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check {
            text,
            background,
            font_size,
            font_weight,
        } => check(&text, &background, font_size, font_weight),
        Commands::Audit { file, json } => audit(&file, json),
    }
}

fn check(text: &str, background: &str, font_size: f64, font_weight: f64) -> ExitCode {
    let sample = StyleSample {
        selector: None,
        text_color: text.to_string(),
        background_color: background.to_string(),
        font_size_px: font_size,
        font_weight,
    };
    match check_sample(&sample) {
        Ok(record) => {
            let threshold = if record.is_large_text { 3.0 } else { 4.5 };
            if record.sufficient {
                println!("PASS {:.2}:1 (minimum {threshold}:1)", record.ratio);
                ExitCode::SUCCESS
            } else {
                println!("FAIL {:.2}:1 (minimum {threshold}:1)", record.ratio);
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

fn audit(file: &Path, as_json: bool) -> ExitCode {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(err) => {
            error!("cannot read {}: {err}", file.display());
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };
    let samples: Vec<StyleSample> = match serde_json::from_str(&content) {
        Ok(samples) => samples,
        Err(err) => {
            error!("cannot parse {}: {err}", file.display());
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let report = engine::audit(&samples);

    for failure in &report.failed {
        warn!(
            "{}: {}",
            failure.selector.as_deref().unwrap_or("<unlabeled>"),
            failure.error
        );
    }

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                error!("cannot serialize report: {err}");
                return ExitCode::from(EXIT_INVALID_INPUT);
            }
        }
    } else {
        println!(
            "{} passed, {} violations, {} failed",
            report.passed.len(),
            report.violations.len(),
            report.failed.len()
        );
        for record in &report.violations {
            println!(
                "  {} {} on {} is {:.2}:1",
                record.selector.as_deref().unwrap_or("<unlabeled>"),
                record.text_color,
                record.background_color,
                record.ratio
            );
        }
    }

    if !report.failed.is_empty() {
        ExitCode::from(EXIT_INVALID_INPUT)
    } else if !report.violations.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
