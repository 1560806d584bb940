//! Interactive command - profiles typed at the terminal

use crate::input::{sample_people, ProfilePrompter};
use crate::models::Person;
use anyhow::Result;
use console::style;
use std::io::{BufRead, Write};
use tracing::warn;

/// Prompt on stdin; fall back to the sample profiles if input breaks off.
///
/// Prompts go to stderr so stdout carries only the report.
pub fn collect() -> Result<Vec<Person>> {
    let stdin = std::io::stdin();
    collect_from(stdin.lock(), std::io::stderr())
}

fn collect_from<R: BufRead, W: Write>(reader: R, writer: W) -> Result<Vec<Person>> {
    let mut prompter = ProfilePrompter::new(reader, writer);
    match prompter.collect_people() {
        Ok(people) => Ok(people),
        Err(e) => {
            warn!("Interactive input failed: {:#}", e);
            eprintln!(
                "\n{} Input ended early, using sample data instead",
                style("!").yellow().bold()
            );
            Ok(sample_people()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_entered_profiles_used() {
        let input = "yes\nKim\n30\nart\n5\n5\n5\n5\n5\n5\n5\n5\n5\n\nno\n";
        let people = collect_from(Cursor::new(input), Vec::new()).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name(), "Kim");
    }

    #[test]
    fn test_eof_falls_back_to_sample() {
        let people = collect_from(Cursor::new("yes\nKim\n"), Vec::new()).unwrap();
        let names: Vec<_> = people.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Ali", "Sara"]);
    }

    #[test]
    fn test_immediate_no_gives_empty() {
        let people = collect_from(Cursor::new("no\n"), Vec::new()).unwrap();
        assert!(people.is_empty());
    }
}
