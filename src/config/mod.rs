//! Configuration module for the friendship analyzer
//!
//! This module handles:
//! - Analyzer configuration (friendship.toml / .friendshiprc.json)
//! - Scoring weights and the friendship threshold
//! - CLI defaults

mod analyzer_config;

pub use analyzer_config::{
    load_analyzer_config, load_config_file, AnalyzerConfig, CliDefaults, CompatibilityWeights,
    ScoringConfig, CONFIG_FILE_NAMES, DEFAULT_THRESHOLD,
};
