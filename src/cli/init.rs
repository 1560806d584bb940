//! Init command - write an example config and profile file

use crate::config::CONFIG_FILE_NAMES;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const PROFILES_FILE: &str = "profiles.toml";

const EXAMPLE_CONFIG: &str = r#"# Friendship analyzer configuration

[scoring]
# Minimum overall score (0-10) for a friendship edge
threshold = 7.0

# Sub-score weights; they should sum to 1.0 (other sums are normalized)
[scoring.weights]
interests = 0.3
personality = 0.3
communication = 0.2
age = 0.1
strategy = 0.1

[defaults]
# Default output format (text, json)
format = "text"

# Ranked matches to show
# top = 5

# Show the per-component score breakdown
explain = false
"#;

const EXAMPLE_PROFILES: &str = r#"# Profiles for `friendship-analyzer analyze profiles.toml`
#
# Scores are 0-10. Traits: extroversion, openness, agreeableness,
# conscientiousness, neuroticism. Styles: direct, emotional, humor, formal.
# Variants: default, empathetic, logical, creative, reserved, energetic,
# analytical, adventurous, introvert, humorous.

[[people]]
name = "Ali"
age = 25
variant = "logical"
interests = ["coding", "chess"]
personality = { extroversion = 4, openness = 6, agreeableness = 7, conscientiousness = 9, neuroticism = 3 }
communication = { direct = 9, emotional = 2, humor = 5, formal = 6 }

[[people]]
name = "Sara"
age = 26
variant = "empathetic"
interests = ["coding", "reading"]
personality = { extroversion = 5, openness = 7, agreeableness = 8, conscientiousness = 7, neuroticism = 6 }
communication = { direct = 6, emotional = 9, humor = 7, formal = 4 }

[[people]]
name = "Maya"
age = 31
variant = "adventurous"
interests = ["hiking", "reading", "travel"]
personality = { extroversion = 8, openness = 9, agreeableness = 6, conscientiousness = 5, neuroticism = 4 }
communication = { direct = 7, emotional = 5, humor = 8, formal = 2 }
"#;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    println!("\n{} Initializing friendship analyzer\n", style("*").bold());

    write_if_missing(&dir.join(CONFIG_FILE_NAMES[0]), EXAMPLE_CONFIG)?;
    write_if_missing(&dir.join(PROFILES_FILE), EXAMPLE_PROFILES)?;

    println!("\nNext steps:");
    println!(
        "  {} Analyze the example profiles",
        style("friendship-analyzer analyze profiles.toml").cyan()
    );
    println!(
        "  {} Enter your own",
        style("friendship-analyzer interactive").cyan()
    );

    Ok(())
}

/// Existing files are never overwritten
fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if path.exists() {
        println!(
            "{} {} already exists, left untouched",
            style("-").dim(),
            style(name).cyan()
        );
        return Ok(());
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    println!("{} Created {}", style("✓").green(), style(name).cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_analyzer_config;
    use crate::input::load_profiles;

    #[test]
    fn test_init_writes_loadable_files() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();

        let config = load_analyzer_config(dir.path());
        assert_eq!(config.scoring.threshold, 7.0);
        assert!(config.scoring.weights.is_valid());
        assert_eq!(config.defaults.format.as_deref(), Some("text"));

        let people = load_profiles(&dir.path().join(PROFILES_FILE)).unwrap();
        assert_eq!(people.len(), 3);
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAMES[0]);
        std::fs::write(&config_path, "[scoring]\nthreshold = 4.0\n").unwrap();

        run(dir.path()).unwrap();

        let kept = std::fs::read_to_string(&config_path).unwrap();
        assert_eq!(kept, "[scoring]\nthreshold = 4.0\n");
        assert!(dir.path().join(PROFILES_FILE).exists());
    }

    #[test]
    fn test_init_rejects_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(run(&file).is_err());
    }
}
