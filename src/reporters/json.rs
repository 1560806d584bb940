//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::analyzer::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{lonely_report, test_report};

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");

        assert_eq!(parsed["threshold"], 6.5);
        assert_eq!(parsed["people"][0]["name"], "Ali");
        assert_eq!(parsed["people"][0]["variant"], "logical");
        assert_eq!(parsed["people"][0]["personality"]["conscientiousness"], 9);
        assert_eq!(parsed["pair"]["second"], "Sara");
        let overall = parsed["pair"]["breakdown"]["overall"].as_f64().expect("overall");
        assert!((overall - 6.82).abs() < 1e-9);
        assert_eq!(parsed["network"]["total_friendships"], 2);
        assert_eq!(parsed["mutual_friendships"].as_array().expect("mutual").len(), 1);
    }

    #[test]
    fn test_json_single_profile() {
        let json_str = render(&lonely_report()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert!(parsed["pair"].is_null());
        assert_eq!(parsed["matches"].as_array().expect("matches").len(), 0);
        assert_eq!(parsed["network"]["average_friendships"], 0.0);
    }
}
