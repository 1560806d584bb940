//! Interactive profile collection
//!
//! Generic over the reader and writer so it runs the same against a
//! terminal and against in-memory buffers in tests.

use crate::models::{
    CommunicationStyle, Person, PersonalityTrait, StrategyVariant, MAX_SCORE, MIN_SCORE,
};
use anyhow::{Context, Result};
use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

/// Asks for profiles one field at a time
pub struct ProfilePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ProfilePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Keep adding people until the answer is not "yes".
    ///
    /// End of input is an `io::ErrorKind::UnexpectedEof` error.
    pub fn collect_people(&mut self) -> Result<Vec<Person>> {
        let mut people = Vec::new();
        loop {
            let answer = self.ask("\nWould you like to add a person? (yes/no): ")?;
            if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                break;
            }
            people.push(self.collect_person()?);
        }
        debug!("Collected {} profiles interactively", people.len());
        Ok(people)
    }

    /// Ask for every field of one profile
    pub fn collect_person(&mut self) -> Result<Person> {
        writeln!(self.writer, "\nEnter New Person Details")?;
        let name = self.ask("Name: ")?;
        let age = self.ask_number("Age: ", |_: &u32| true)?;
        let interests = self.ask("Interests (comma separated): ")?;

        let mut builder = Person::builder(name, age).interests(interests.split(','));

        writeln!(self.writer, "Enter Personality Traits ({MIN_SCORE}-{MAX_SCORE}):")?;
        for t in PersonalityTrait::ALL {
            let score = self.ask_score(t.as_str())?;
            builder = builder.trait_score(t, score);
        }

        writeln!(self.writer, "Enter Communication Styles ({MIN_SCORE}-{MAX_SCORE}):")?;
        for s in CommunicationStyle::ALL {
            let score = self.ask_score(s.as_str())?;
            builder = builder.style_score(s, score);
        }

        let variant = self.ask_variant()?;
        Ok(builder.variant(variant).build()?)
    }

    fn ask_score(&mut self, label: &str) -> Result<i32> {
        self.ask_number(&format!("  {}: ", title_case(label)), |v: &i32| {
            (MIN_SCORE..=MAX_SCORE).contains(v)
        })
    }

    fn ask_variant(&mut self) -> Result<StrategyVariant> {
        loop {
            let answer = self.ask("Strategy variant (blank for default): ")?;
            if answer.is_empty() {
                return Ok(StrategyVariant::Default);
            }
            match answer.parse::<StrategyVariant>() {
                Ok(variant) => return Ok(variant),
                Err(e) => writeln!(self.writer, "  {e}")?,
            }
        }
    }

    /// Re-ask until the answer parses and passes `accept`
    fn ask_number<T>(&mut self, prompt: &str, accept: impl Fn(&T) -> bool) -> Result<T>
    where
        T: std::str::FromStr,
    {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => writeln!(self.writer, "  '{answer}' is not a valid value, try again")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input ended").into());
        }
        Ok(line.trim().to_string())
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
