//! Output reporters for friendship analysis results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors and profile cards
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::analyzer::AnalysisReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a report in the named format
pub fn report(report: &AnalysisReport, format: &str, explain: bool) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt, explain)
}

/// Render a report using an OutputFormat enum.
///
/// `explain` only affects text; JSON always carries the full breakdown.
pub fn report_with_format(
    report: &AnalysisReport,
    format: OutputFormat,
    explain: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, explain),
        OutputFormat::Json => json::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analyzer::FriendshipAnalyzer;
    use crate::input::sample_people;

    /// Sample pair with a network built at 6.5 so both directions are friends
    pub(crate) fn test_report() -> AnalysisReport {
        let mut analyzer = FriendshipAnalyzer::new();
        for person in sample_people().expect("sample data is valid") {
            analyzer.add_person(person);
        }
        analyzer
            .set_compatibility_threshold(6.5)
            .expect("finite threshold");
        analyzer.create_friendship_network();
        AnalysisReport::build(&analyzer, None, None)
    }

    /// A single profile: nothing to compare
    pub(crate) fn lonely_report() -> AnalysisReport {
        let mut analyzer = FriendshipAnalyzer::new();
        let mut people = sample_people().expect("sample data is valid");
        people.truncate(1);
        for person in people {
            analyzer.add_person(person);
        }
        analyzer.create_friendship_network();
        AnalysisReport::build(&analyzer, None, None)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("html").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for fmt in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&fmt.to_string()).unwrap(), fmt);
        }
    }

    #[test]
    fn test_report_dispatch() {
        let r = test_report();
        let json = report(&r, "json", false).expect("render json");
        assert!(json.trim_start().starts_with('{'));
        let text = report(&r, "text", false).expect("render text");
        assert!(text.contains("Friendship Analysis"));
        assert!(report(&r, "yaml", false).is_err());
    }
}
