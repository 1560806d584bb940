//! Shared analysis and output path for every reporting command
//!
//! Flag precedence: command line, then the config file's `[defaults]`,
//! then built-in defaults.

use super::ReportArgs;
use crate::analyzer::{AnalysisReport, FriendshipAnalyzer};
use crate::config::{AnalyzerConfig, ScoringConfig};
use crate::models::Person;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Reporting flags after merging with config defaults
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub target: Option<String>,
    pub top: Option<usize>,
    pub explain: bool,
}

impl ReportOptions {
    pub fn resolve(args: &ReportArgs, config: &AnalyzerConfig) -> Result<Self> {
        let defaults = &config.defaults;
        let format = match args.format.as_deref().or(defaults.format.as_deref()) {
            Some(f) => OutputFormat::from_str(f).context("Invalid output format in config")?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            format,
            output: args.output.clone(),
            threshold: args.threshold,
            target: args.target.clone(),
            top: args.top.or(defaults.top),
            explain: args.explain || defaults.explain.unwrap_or(false),
        })
    }
}

/// Score `people`, build the network and write the report
pub fn analyze_and_report(
    people: Vec<Person>,
    scoring: &ScoringConfig,
    options: &ReportOptions,
) -> Result<()> {
    let output = render(people, scoring, options)?;

    if let Some(path) = &options.output {
        std::fs::write(path, &output)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        // stderr keeps stdout clean for machine-readable formats
        eprintln!("Report written to: {}", style(path.display()).cyan());
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Build the analyzer and render the report to a string
fn render(people: Vec<Person>, scoring: &ScoringConfig, options: &ReportOptions) -> Result<String> {
    let mut scoring = scoring.clone();
    if let Some(threshold) = options.threshold {
        scoring.threshold = threshold;
    }
    let mut analyzer =
        FriendshipAnalyzer::with_config(&scoring).context("Invalid scoring configuration")?;

    for person in people {
        analyzer.add_person(person);
    }
    let edges = analyzer.create_friendship_network();
    info!(
        "Analyzed {} profiles, {} friendships at threshold {:.2}",
        analyzer.people().len(),
        edges,
        analyzer.compatibility_threshold()
    );

    let target = match options.target.as_deref() {
        Some(name) => Some(
            analyzer
                .find_by_name(name)
                .with_context(|| format!("No profile named '{}'", name))?,
        ),
        None => None,
    };

    let report = AnalysisReport::build(&analyzer, target, options.top);
    reporters::report_with_format(&report, options.format, options.explain)
}
