//! Analyzer configuration support
//!
//! Loads configuration from `friendship.toml` or `.friendshiprc.json` in the
//! working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # friendship.toml
//!
//! [scoring]
//! threshold = 7.0
//!
//! [scoring.weights]
//! interests = 0.3
//! personality = 0.3
//! communication = 0.2
//! age = 0.1
//! strategy = 0.1
//!
//! [defaults]
//! format = "text"
//! top = 5
//! explain = false
//! ```

use crate::error::{AnalyzerError, AnalyzerResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Config file names searched in the working directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["friendship.toml", ".friendshiprc.json"];

/// Default minimum score for recording a friendship edge
pub const DEFAULT_THRESHOLD: f64 = 7.0;

/// Analyzer configuration loaded from friendship.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AnalyzerConfig {
    /// Scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Minimum overall score for a friendship edge (default: 7.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Weights for each sub-score (must sum to 1.0)
    #[serde(default)]
    pub weights: CompatibilityWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            weights: CompatibilityWeights::default(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl ScoringConfig {
    /// Check the threshold and bring the weights into shape.
    ///
    /// Weights that do not sum to 1.0 are normalized with a warning.
    pub fn validated(mut self) -> AnalyzerResult<Self> {
        if !self.threshold.is_finite() {
            return Err(AnalyzerError::InvalidThreshold(self.threshold));
        }
        self.weights.check()?;
        if !self.weights.is_valid() {
            warn!(
                "Scoring weights sum to {:.3}, normalizing to 1.0",
                self.weights.sum()
            );
            self.weights.normalize();
        }
        Ok(self)
    }
}

/// Weights for the five sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CompatibilityWeights {
    /// Weight for shared interests (default: 0.3)
    #[serde(default = "default_interests_weight")]
    pub interests: f64,

    /// Weight for personality closeness (default: 0.3)
    #[serde(default = "default_personality_weight")]
    pub personality: f64,

    /// Weight for communication closeness (default: 0.2)
    #[serde(default = "default_communication_weight")]
    pub communication: f64,

    /// Weight for age gap (default: 0.1)
    #[serde(default = "default_age_weight")]
    pub age: f64,

    /// Weight for the strategy variant (default: 0.1)
    #[serde(default = "default_strategy_weight")]
    pub strategy: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            interests: default_interests_weight(),
            personality: default_personality_weight(),
            communication: default_communication_weight(),
            age: default_age_weight(),
            strategy: default_strategy_weight(),
        }
    }
}

fn default_interests_weight() -> f64 {
    0.3
}
fn default_personality_weight() -> f64 {
    0.3
}
fn default_communication_weight() -> f64 {
    0.2
}
fn default_age_weight() -> f64 {
    0.1
}
fn default_strategy_weight() -> f64 {
    0.1
}

impl CompatibilityWeights {
    fn as_array(&self) -> [f64; 5] {
        [
            self.interests,
            self.personality,
            self.communication,
            self.age,
            self.strategy,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Validate that weights sum to 1.0 (with tolerance)
    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() < 0.001
    }

    /// Normalize weights to sum to 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.interests /= sum;
            self.personality /= sum;
            self.communication /= sum;
            self.age /= sum;
            self.strategy /= sum;
        }
    }

    /// Reject weights that cannot be normalized
    fn check(&self) -> AnalyzerResult<()> {
        if self.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AnalyzerError::InvalidWeights(
                "every weight must be a finite, non-negative number".to_string(),
            ));
        }
        if self.sum() <= 0.0 {
            return Err(AnalyzerError::InvalidWeights(
                "weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Default number of ranked matches to show
    #[serde(default)]
    pub top: Option<usize>,

    /// Show the per-sub-score breakdown by default
    #[serde(default)]
    pub explain: Option<bool>,
}

/// Load configuration from the working directory.
///
/// Searches for `friendship.toml`, then `.friendshiprc.json`. Files that
/// fail to parse are skipped with a warning.
///
/// Returns default configuration if no config file is found.
pub fn load_analyzer_config(dir: &Path) -> AnalyzerConfig {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded analyzer config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No analyzer config found, using defaults");
    AnalyzerConfig::default()
}

/// Load configuration from an explicit path (format chosen by extension)
pub fn load_config_file(path: &Path) -> anyhow::Result<AnalyzerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: AnalyzerConfig = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}
