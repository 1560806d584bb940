//! Profile input
//!
//! Three ways to get profiles into an analyzer:
//! - `file` - TOML or JSON profile files
//! - `prompt` - interactive questions on a terminal (or any `BufRead`)
//! - `sample` - a fixed pair of demo profiles

mod file;
mod prompt;
mod sample;

pub use file::{load_profiles, parse_profiles, ProfileFile, ProfileFormat};
pub use prompt::ProfilePrompter;
pub use sample::sample_people;
