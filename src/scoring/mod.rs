//! Compatibility Scoring System
//!
//! Scores how well one person gets along with another on a 0-10 scale.
//!
//! # Scoring Formula
//!
//! ```text
//! Overall = Interests × 0.30 + Personality × 0.30 + Communication × 0.20
//!         + Age × 0.10 + Strategy × 0.10
//!
//! Interests     = |A ∩ B| / |A ∪ B| × 10            (0 when both are empty)
//! Personality   = mean over A's traits of 10 - |a - b|   (b = 0 when missing)
//! Communication = mean over A's styles of 10 - |a - b|   (b = 0 when missing)
//! Age           = 10 / 8 / 6 / 4 / 2 for a gap of ≤2 / ≤5 / ≤10 / ≤15 / more
//! Strategy      = A's strategy variant applied to B
//! ```
//!
//! Weights are configurable (see [`crate::config::CompatibilityWeights`]);
//! the values above are the defaults.
//!
//! # Direction
//!
//! Interest and age scores are symmetric. Personality and communication
//! iterate over the first person's keys, and the strategy is the first
//! person's rule, so `score(A, B)` is "how A perceives B" and generally
//! differs from `score(B, A)`.
//!
//! # Example
//!
//! Ali (logical) and Sara (empathetic) share one of three interests, differ by
//! one year, and each has the communication key the other's rule looks for:
//!
//! ```text
//! 3.33 × 0.3 + 8.4 × 0.3 + 6.5 × 0.2 + 10 × 0.1 + 10 × 0.1 = 6.82
//! ```

mod compatibility;
mod metrics;
mod strategy;

pub use compatibility::{CompatibilityBreakdown, CompatibilityScorer};
pub use metrics::{
    age_compatibility, communication_compatibility, interest_compatibility,
    personality_compatibility,
};
