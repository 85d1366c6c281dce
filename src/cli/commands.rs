use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::analysis::{Report, analyze};
use crate::config::{
    AnalysisConfig, DEFAULT_MIN_TOKEN_LENGTH, DEFAULT_SMOOTHING_WINDOW, DEFAULT_TOP_N_WORDS,
};
use crate::parsers::{TargetEncoding, load_dataset};
use crate::render::{ChartOptions, DEFAULT_CHART_PATH, render_chart};
use crate::utils::resolve_input_dir;

#[derive(Parser, Debug)]
#[command(name = "messenger-analyze")]
#[command(version = "0.1.0")]
#[command(about = "Analyze exported Messenger chat history", long_about = None)]
pub struct Cli {
    /// Directory containing the conversation's message_*.json files
    pub directory: PathBuf,

    /// Minimum length of a word to enter the frequency table
    #[arg(long, default_value_t = DEFAULT_MIN_TOKEN_LENGTH)]
    pub min_length: usize,

    /// Moving-average window in days (0 or 1 disables smoothing)
    #[arg(long, default_value_t = DEFAULT_SMOOTHING_WINDOW)]
    pub window: usize,

    /// Number of most common words to print
    #[arg(long, default_value_t = DEFAULT_TOP_N_WORDS)]
    pub top: usize,

    /// Where to write the activity chart
    #[arg(short, long, default_value = DEFAULT_CHART_PATH)]
    pub output: PathBuf,

    /// Encoding the export's byte-escaped strings are decoded with
    #[arg(long, value_enum, default_value_t = TargetEncoding::Utf8)]
    pub encoding: TargetEncoding,

    /// Skip writing the chart
    #[arg(long)]
    pub no_chart: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            minimum_token_length: self.min_length,
            smoothing_window: self.window,
            top_n_words: self.top,
            encoding: self.encoding,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.analysis_config();
    let dir = resolve_input_dir(&cli.directory)?;

    let dataset = load_dataset(&dir, config.encoding)
        .with_context(|| format!("Failed to load export from {}", dir.display()))?;
    let report = analyze(&dataset, &config).context("Analysis failed")?;

    print_report(&mut io::stdout().lock(), &report)?;

    if !cli.no_chart {
        let options =
            ChartOptions { caption: dataset.title().map(str::to_owned), ..Default::default() };
        render_chart(&report.smoothed.points, &cli.output, &options)
            .context("Failed to write chart")?;
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// `token: count` for each top word, then the total message count.
pub fn print_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    for (token, count) in &report.top_words {
        writeln!(out, "{}: {}", token, count)?;
    }
    writeln!(out, "{}", report.total_messages)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::models::{DailyCountSeries, SmoothedSeries};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_config() {
        let cli = Cli::try_parse_from(["messenger-analyze", "inbox"]).unwrap();
        assert_eq!(cli.analysis_config(), AnalysisConfig::default());
        assert_eq!(cli.output, PathBuf::from(DEFAULT_CHART_PATH));
        assert!(!cli.no_chart);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "messenger-analyze",
            "inbox",
            "--min-length",
            "3",
            "--window",
            "1",
            "--top",
            "5",
            "--encoding",
            "latin1",
        ])
        .unwrap();
        let config = cli.analysis_config();
        assert_eq!(config.minimum_token_length, 3);
        assert_eq!(config.smoothing_window, 1);
        assert_eq!(config.top_n_words, 5);
        assert_eq!(config.encoding, TargetEncoding::Latin1);
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Cli::try_parse_from(["messenger-analyze"]).is_err());
    }

    #[test]
    fn test_print_report_format() {
        let daily = DailyCountSeries::new(0, vec![3]);
        let report = Report {
            top_words: vec![("hello".to_string(), 3), ("there".to_string(), 1)],
            total_messages: 3,
            smoothed: SmoothedSeries::from(&daily),
            daily,
        };

        let mut out = Vec::new();
        print_report(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello: 3\nthere: 1\n3\n");
    }
}
