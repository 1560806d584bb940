//! Analyze command - profiles from a file

use crate::input::load_profiles;
use crate::models::Person;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the profiles named on the command line
pub fn load(path: &Path) -> Result<Vec<Person>> {
    if !path.is_file() {
        anyhow::bail!("Profile file does not exist: {}", path.display());
    }
    load_profiles(path).context("Cannot analyze profiles")
}
