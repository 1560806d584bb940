//! CLI command definitions and handlers

mod analyze;
mod init;
mod interactive;
mod output;

use crate::config::{load_analyzer_config, load_config_file, AnalyzerConfig};
use crate::input::sample_people;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use output::ReportOptions;

/// Parse a threshold: any finite number
fn parse_threshold(s: &str) -> Result<f64, String> {
    let t: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if t.is_finite() {
        Ok(t)
    } else {
        Err("threshold must be a finite number".to_string())
    }
}

/// Friendship analyzer - rule-based compatibility scoring
#[derive(Parser, Debug)]
#[command(name = "friendship-analyzer")]
#[command(
    version,
    about = "Score friendship compatibility between people profiles and build a friendship network",
    long_about = "Scores how compatible people are from their interests, Big Five personality \
traits, communication styles, age and a per-person strategy variant, then ranks \
matches and links everyone whose score clears a threshold.\n\n\
Run without a subcommand to analyze the built-in sample pair.",
    after_help = "\
Examples:
  friendship-analyzer                                   Analyze the sample pair
  friendship-analyzer analyze people.toml               Analyze profiles from a file
  friendship-analyzer analyze people.json -f json       JSON output for scripting
  friendship-analyzer analyze people.toml --threshold 6.5 --explain
  friendship-analyzer interactive                       Enter profiles by hand
  friendship-analyzer init                              Write example config and profiles"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes priority
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: friendship.toml or .friendshiprc.json in the working directory)
    #[arg(long, global = true, env = "FRIENDSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by every command that prints a report
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Output format: text, json
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Minimum score for a friendship edge (default: 7.0)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Rank matches for this person (default: the first profile)
    #[arg(long)]
    pub target: Option<String>,

    /// Maximum matches to show
    #[arg(long)]
    pub top: Option<usize>,

    /// Show the per-component score breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the built-in sample profiles (Ali and Sara)
    Sample {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Analyze profiles loaded from a TOML or JSON file
    #[command(after_help = "\
Examples:
  friendship-analyzer analyze people.toml
  friendship-analyzer analyze people.json --format json -o report.json
  friendship-analyzer analyze people.toml --target Sara --top 3")]
    Analyze {
        /// Profile file (.toml or .json)
        file: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Enter profiles interactively, then analyze them
    Interactive {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Write an example friendship.toml and profiles.toml
    Init,
}

/// Resolve the config: an explicit path must load, auto-discovery falls back to defaults
fn resolve_config(explicit: Option<&Path>) -> Result<AnalyzerConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(load_analyzer_config(&cwd))
        }
    }
}

/// Where the profiles for a report come from
enum ProfileSource {
    Sample,
    File(PathBuf),
    Interactive,
}

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Sample {
        report: ReportArgs::default(),
    });

    let (source, report) = match command {
        Commands::Init => return init::run(&std::env::current_dir()?),
        Commands::Sample { report } => (ProfileSource::Sample, report),
        Commands::Analyze { file, report } => (ProfileSource::File(file), report),
        Commands::Interactive { report } => (ProfileSource::Interactive, report),
    };

    // Config problems surface before any prompting
    let config = resolve_config(cli.config.as_deref())?;
    debug!("Using config: {:?}", config);
    let options = ReportOptions::resolve(&report, &config)?;

    let people = match source {
        ProfileSource::Sample => sample_people()?,
        ProfileSource::File(path) => analyze::load(&path)?,
        ProfileSource::Interactive => interactive::collect()?,
    };

    output::analyze_and_report(people, &config.scoring, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["friendship-analyzer"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_analyze_flags_parse() {
        let cli = Cli::try_parse_from([
            "friendship-analyzer",
            "analyze",
            "people.toml",
            "-f",
            "json",
            "--threshold",
            "6.5",
            "--top",
            "3",
            "--target",
            "Sara",
            "--explain",
        ])
        .expect("parse");
        let Some(Commands::Analyze { file, report }) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(file, PathBuf::from("people.toml"));
        assert_eq!(report.format.as_deref(), Some("json"));
        assert_eq!(report.threshold, Some(6.5));
        assert_eq!(report.top, Some(3));
        assert_eq!(report.target.as_deref(), Some("Sara"));
        assert!(report.explain);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(Cli::try_parse_from(["friendship-analyzer", "sample", "-f", "xml"]).is_err());
        assert!(
            Cli::try_parse_from(["friendship-analyzer", "sample", "--threshold", "NaN"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["friendship-analyzer", "sample", "--threshold", "high"]).is_err()
        );
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("7"), Ok(7.0));
        assert_eq!(parse_threshold("-1.5"), Ok(-1.5));
        assert!(parse_threshold("inf").is_err());
    }

    #[test]
    fn test_explicit_config_must_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(resolve_config(Some(&dir.path().join("missing.toml"))).is_err());

        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[scoring]\nthreshold = 5.5\n").expect("write config");
        let config = resolve_config(Some(&path)).expect("load config");
        assert_eq!(config.scoring.threshold, 5.5);
    }
}
