//! Weighted compatibility scorer
//!
//! Combines the four generic sub-scores and the strategy contribution into
//! one overall score.

use super::metrics::{
    age_compatibility, communication_compatibility, interest_compatibility,
    personality_compatibility,
};
use crate::config::CompatibilityWeights;
use crate::models::Person;
use serde::Serialize;
use tracing::debug;

/// Complete score breakdown for transparency
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompatibilityBreakdown {
    /// Shared interests (0-10)
    pub interests: f64,
    /// Personality closeness (0-10)
    pub personality: f64,
    /// Communication closeness (0-10)
    pub communication: f64,
    /// Age gap bucket (2-10)
    pub age: f64,
    /// Strategy variant contribution
    pub strategy: f64,
    /// Weights applied
    pub weights: CompatibilityWeights,
    /// Weighted total
    pub overall: f64,
}

impl CompatibilityBreakdown {
    /// (label, raw score, weight) per component, in formula order
    pub fn components(&self) -> [(&'static str, f64, f64); 5] {
        let w = &self.weights;
        [
            ("Interests", self.interests, w.interests),
            ("Personality", self.personality, w.personality),
            ("Communication", self.communication, w.communication),
            ("Age", self.age, w.age),
            ("Strategy", self.strategy, w.strategy),
        ]
    }
}

/// Weighted compatibility scorer
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityScorer<'a> {
    weights: &'a CompatibilityWeights,
}

impl<'a> CompatibilityScorer<'a> {
    pub fn new(weights: &'a CompatibilityWeights) -> Self {
        Self { weights }
    }

    /// Overall score of `person1` towards `person2`
    pub fn score(&self, person1: &Person, person2: &Person) -> f64 {
        self.breakdown(person1, person2).overall
    }

    /// Compute every component plus the weighted total
    pub fn breakdown(&self, person1: &Person, person2: &Person) -> CompatibilityBreakdown {
        let interests = interest_compatibility(person1, person2);
        let personality = personality_compatibility(person1, person2);
        let communication = communication_compatibility(person1, person2);
        let age = age_compatibility(person1, person2);
        let strategy = f64::from(person1.compatibility_strategy(person2));

        let w = self.weights;
        let overall = interests * w.interests
            + personality * w.personality
            + communication * w.communication
            + age * w.age
            + strategy * w.strategy;

        debug!(
            "{} -> {}: interests={:.2}, personality={:.2}, communication={:.2}, age={:.0}, strategy={:.0}, overall={:.2}",
            person1.name(),
            person2.name(),
            interests,
            personality,
            communication,
            age,
            strategy,
            overall
        );

        CompatibilityBreakdown {
            interests,
            personality,
            communication,
            age,
            strategy,
            weights: *w,
            overall,
        }
    }

    /// Generate human-readable explanation of a score
    pub fn explain(&self, person1: &Person, person2: &Person) -> String {
        let breakdown = self.breakdown(person1, person2);
        let mut lines = Vec::new();

        lines.push(format!(
            "Compatibility of {} towards {}: {:.2}/10",
            person1.name(),
            person2.name(),
            breakdown.overall
        ));
        for (label, raw, weight) in breakdown.components() {
            lines.push(format!(
                "  {:<14} {:>5.2} x {:.2} = {:.2}",
                label,
                raw,
                weight,
                raw * weight
            ));
        }
        lines.push(format!(
            "  Strategy rule: {} ({})",
            person1.variant(),
            if breakdown.strategy >= 10.0 { "favourable" } else { "neutral or unfavourable" }
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunicationStyle as Style, PersonalityTrait as Trait, StrategyVariant};

    fn ali() -> Person {
        Person::builder("Ali", 25)
            .variant(StrategyVariant::Logical)
            .interests(["coding", "chess"])
            .personality([
                (Trait::Extroversion, 4),
                (Trait::Openness, 6),
                (Trait::Agreeableness, 7),
                (Trait::Conscientiousness, 9),
                (Trait::Neuroticism, 3),
            ])
            .communication([
                (Style::Direct, 9),
                (Style::Emotional, 2),
                (Style::Humor, 5),
                (Style::Formal, 6),
            ])
            .build()
            .unwrap()
    }

    fn sara() -> Person {
        Person::builder("Sara", 26)
            .variant(StrategyVariant::Empathetic)
            .interests(["coding", "reading"])
            .personality([
                (Trait::Extroversion, 5),
                (Trait::Openness, 7),
                (Trait::Agreeableness, 8),
                (Trait::Conscientiousness, 7),
                (Trait::Neuroticism, 6),
            ])
            .communication([
                (Style::Direct, 6),
                (Style::Emotional, 9),
                (Style::Humor, 7),
                (Style::Formal, 4),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn test_breakdown_components() {
        let weights = CompatibilityWeights::default();
        let scorer = CompatibilityScorer::new(&weights);
        let b = scorer.breakdown(&ali(), &sara());

        assert!((b.interests - 10.0 / 3.0).abs() < 1e-9);
        assert!((b.personality - 8.4).abs() < 1e-9);
        assert!((b.communication - 6.5).abs() < 1e-9);
        assert_eq!(b.age, 10.0);
        assert_eq!(b.strategy, 10.0);
        assert!((b.overall - 6.82).abs() < 1e-9, "overall={}", b.overall);
    }

    #[test]
    fn test_score_is_deterministic_and_in_range() {
        let weights = CompatibilityWeights::default();
        let scorer = CompatibilityScorer::new(&weights);
        let (a, s) = (ali(), sara());

        let first = scorer.score(&a, &s);
        assert_eq!(first, scorer.score(&a, &s));
        assert!((0.0..=10.0).contains(&first));
        assert!((0.0..=10.0).contains(&scorer.score(&s, &a)));
    }

    #[test]
    fn test_custom_weights() {
        let weights = CompatibilityWeights {
            interests: 0.0,
            personality: 0.0,
            communication: 0.0,
            age: 1.0,
            strategy: 0.0,
        };
        let scorer = CompatibilityScorer::new(&weights);
        assert_eq!(scorer.score(&ali(), &sara()), 10.0);
    }

    #[test]
    fn test_explain_mentions_every_component() {
        let weights = CompatibilityWeights::default();
        let scorer = CompatibilityScorer::new(&weights);
        let text = scorer.explain(&ali(), &sara());

        assert!(text.contains("Ali towards Sara: 6.82/10"));
        for label in ["Interests", "Personality", "Communication", "Age", "Strategy"] {
            assert!(text.contains(label), "missing {label} in:\n{text}");
        }
        assert!(text.contains("logical"));
    }
}
