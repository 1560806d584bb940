//! Profile files
//!
//! ```toml
//! [[people]]
//! name = "Ali"
//! age = 25
//! variant = "logical"
//! interests = ["coding", "chess"]
//! personality = { extroversion = 4, openness = 6 }
//! communication = { direct = 9, humor = 5 }
//! ```
//!
//! JSON files use the same shape: `{"people": [{...}, ...]}`.

use crate::models::{Person, ProfileInput};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// On-disk profile file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub people: Vec<ProfileInput>,
}

/// Supported profile file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Toml,
    Json,
}

impl ProfileFormat {
    /// Guess from a file extension (anything but `.json` is TOML)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProfileFormat::Json,
            _ => ProfileFormat::Toml,
        }
    }
}

impl FromStr for ProfileFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(ProfileFormat::Toml),
            "json" => Ok(ProfileFormat::Json),
            _ => anyhow::bail!("Unknown profile format '{}'. Valid formats: toml, json", s),
        }
    }
}

/// Parse and validate profiles from a string.
///
/// Stops at the first invalid entry; the error names its position and name.
pub fn parse_profiles(content: &str, format: ProfileFormat) -> Result<Vec<Person>> {
    let file: ProfileFile = match format {
        ProfileFormat::Toml => toml::from_str(content).context("Invalid TOML profile file")?,
        ProfileFormat::Json => {
            serde_json::from_str(content).context("Invalid JSON profile file")?
        }
    };

    file.people
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            let name = input.name.clone();
            Person::try_from(input)
                .with_context(|| format!("Profile #{} ('{}') is invalid", i + 1, name))
        })
        .collect()
}

/// Load and validate profiles from a file
pub fn load_profiles(path: &Path) -> Result<Vec<Person>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {}", path.display()))?;
    let people = parse_profiles(&content, ProfileFormat::from_path(path))
        .with_context(|| format!("Failed to load profiles from {}", path.display()))?;
    debug!("Loaded {} profiles from {}", people.len(), path.display());
    Ok(people)
}
