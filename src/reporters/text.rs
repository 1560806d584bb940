//! Text (terminal) reporter with colors and profile cards

use crate::analyzer::{AnalysisReport, PairReport, ProfileSummary};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const CARD_RULE: &str = "==================================================";

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport, explain: bool) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Friendship Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "People: {}  Threshold: {BOLD}{:.1}{RESET}\n\n",
        report.people.len(),
        report.threshold
    ));

    for person in &report.people {
        out.push_str(&render_profile(person));
        out.push('\n');
    }

    let Some(pair) = &report.pair else {
        out.push_str(&format!(
            "{DIM}Not enough people to analyze compatibility.{RESET}\n"
        ));
        return Ok(out);
    };

    out.push_str(&format!(
        "{BOLD}Overall Compatibility Score between {} and {}:{RESET} {}/10\n",
        pair.first,
        pair.second,
        format_score(pair.breakdown.overall)
    ));
    if explain {
        out.push_str(&render_breakdown(pair));
    }
    out.push('\n');

    // `--top 0` leaves nothing to list
    if let Some(target) = report.target.as_ref().filter(|_| !report.matches.is_empty()) {
        out.push_str(&format!("{BOLD}TOP MATCHES{RESET} for {}\n", target));
        for (i, m) in report.matches.iter().enumerate() {
            out.push_str(&format!(
                "  {DIM}{:>3}{RESET}  {:<24} {}/10\n",
                i + 1,
                m.name,
                format_score(m.score)
            ));
        }
        out.push('\n');
    }

    // Network
    let net = &report.network;
    out.push_str(&format!(
        "{BOLD}FRIENDSHIP NETWORK{RESET} (threshold {:.2})\n",
        report.threshold
    ));
    out.push_str(&format!("  Total People: {}\n", net.total_people));
    out.push_str(&format!("  Total Friendships: {}\n", net.total_friendships));
    out.push_str(&format!(
        "  Average Friendships per Person: {:.1}\n",
        net.average_friendships
    ));

    if !report.mutual_friendships.is_empty() {
        out.push_str("  Mutual friendships:\n");
        for m in &report.mutual_friendships {
            out.push_str(&format!(
                "    {} <-> {}  {DIM}({:.2} / {:.2}){RESET}\n",
                m.first, m.second, m.forward_score, m.backward_score
            ));
        }
    }
    if !report.friend_circles.is_empty() {
        out.push_str("  Friend circles:\n");
        for circle in &report.friend_circles {
            out.push_str(&format!("    [{}]\n", circle.join(", ")));
        }
    }
    if net.total_friendships == 0 {
        out.push_str(&format!(
            "\n{DIM}No pair reached the threshold. Try a lower --threshold.{RESET}\n"
        ));
    }

    Ok(out)
}

fn render_profile(person: &ProfileSummary) -> String {
    let mut card = String::new();
    card.push_str(&format!("{CARD_RULE}\n"));
    card.push_str(&format!("Name: {BOLD}{}{RESET}\n", person.name));
    card.push_str(&format!("Age: {}\n", person.age));
    card.push_str(&format!("Strategy: {}\n", person.variant));
    card.push_str(&format!("Interests: {}\n", person.interests.join(", ")));

    card.push_str("Personality Traits:\n");
    for (t, score) in &person.personality {
        card.push_str(&format!("  - {}: {}/10\n", title_case(t.as_str()), score));
    }
    card.push_str("Communication Style:\n");
    for (s, score) in &person.communication {
        card.push_str(&format!("  - {}: {}/10\n", title_case(s.as_str()), score));
    }

    if !person.friendships.is_empty() {
        card.push_str("Friends:\n");
        for f in &person.friendships {
            card.push_str(&format!("  - {} ({:.2})\n", f.friend, f.score));
        }
    }
    card.push_str(&format!("{CARD_RULE}\n"));
    card
}

fn render_breakdown(pair: &PairReport) -> String {
    let mut out = String::new();
    for (label, raw, weight) in pair.breakdown.components() {
        out.push_str(&format!(
            "  {DIM}{:<14}{RESET} {:>5.2} x {:.2} = {:.2}\n",
            label,
            raw,
            weight,
            raw * weight
        ));
    }
    out
}

/// Format score with color
fn format_score(score: f64) -> String {
    let color = if score >= 7.0 {
        "\x1b[32m"
    } else if score >= 5.0 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{:.2}{RESET}", score)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::FriendshipAnalyzer;
    use crate::input::sample_people;
    use crate::reporters::tests::{lonely_report, test_report};

    #[test]
    fn test_text_render_profiles_and_score() {
        let text = render(&test_report(), false).expect("render text");
        assert!(text.contains("Name: \x1b[1mAli"));
        assert!(text.contains("Name: \x1b[1mSara"));
        assert!(text.contains("  - Conscientiousness: 9/10"));
        assert!(text.contains("Interests: chess, coding"));
        assert!(text.contains("Overall Compatibility Score between Ali and Sara"));
        assert!(text.contains("6.82"));
    }

    #[test]
    fn test_text_render_explain() {
        let text = render(&test_report(), true).expect("render text");
        assert!(text.contains("Interests"));
        assert!(text.contains("3.33 x 0.30 = 1.00"));
        assert!(text.contains("Strategy"));
    }

    #[test]
    fn test_text_render_network() {
        let text = render(&test_report(), false).expect("render text");
        assert!(text.contains("Total Friendships: 2"));
        assert!(text.contains("Average Friendships per Person: 1.0"));
        assert!(text.contains("Ali <-> Sara"));
        assert!(text.contains("[Ali, Sara]"));
        assert!(!text.contains("No pair reached the threshold"));
    }

    #[test]
    fn test_text_render_not_enough_people() {
        let text = render(&lonely_report(), true).expect("render text");
        assert!(text.contains("Not enough people to analyze compatibility."));
        assert!(!text.contains("FRIENDSHIP NETWORK"));
    }

    #[test]
    fn test_text_render_top_zero() {
        let mut analyzer = FriendshipAnalyzer::new();
        for person in sample_people().unwrap() {
            analyzer.add_person(person);
        }
        analyzer.create_friendship_network();
        let report = AnalysisReport::build(&analyzer, None, Some(0));

        let text = render(&report, false).expect("render text");
        assert!(!text.contains("No other profiles"));
        assert!(!text.contains("TOP MATCHES"));
        assert!(text.contains("FRIENDSHIP NETWORK"));

        let full = render(&test_report(), false).expect("render text");
        assert!(full.contains("TOP MATCHES"));
    }

    #[test]
    fn test_format_score_colors() {
        assert!(format_score(8.0).starts_with("\x1b[32m"));
        assert!(format_score(6.0).starts_with("\x1b[33m"));
        assert!(format_score(2.0).starts_with("\x1b[31m"));
        assert!(format_score(6.824).contains("6.82"));
    }
}
