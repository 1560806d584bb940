//! Error types for the analyzer core
//!
//! The scoring functions themselves are total: once a profile has been
//! validated, nothing downstream can fail. Everything here is raised at the
//! boundary (profile construction, name parsing, configuration).

use thiserror::Error;

/// Errors that can occur while building profiles or configuring an analyzer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("Invalid profile '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("Unknown strategy variant '{0}'. Valid variants: default, empathetic, logical, creative, reserved, energetic, analytical, adventurous, introvert, humorous")]
    UnknownVariant(String),

    #[error("Unknown personality trait '{0}'. Valid traits: extroversion, openness, agreeableness, conscientiousness, neuroticism")]
    UnknownTrait(String),

    #[error("Unknown communication style '{0}'. Valid styles: direct, emotional, humor, formal")]
    UnknownStyle(String),

    #[error("Invalid compatibility threshold: {0} (must be a finite number)")]
    InvalidThreshold(f64),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
