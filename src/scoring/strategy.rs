//! Strategy variant rules
//!
//! Each variant is one person's bias when sizing up a partner. Some rules
//! look only at whether the partner has a key at all (Empathetic, Logical,
//! Creative); the others compare the partner's value against a threshold.
//! Both forms are kept as they are.

use crate::models::{CommunicationStyle as Style, Person, PersonalityTrait as Trait, StrategyVariant};

/// Conscientiousness assumed by the Analytical rule when a profile has none
const ANALYTICAL_NEUTRAL: i32 = 5;

impl StrategyVariant {
    /// Score `other` as seen by `me` (whose variant this is)
    pub fn score(self, me: &Person, other: &Person) -> i32 {
        let other_trait = |t: Trait| other.trait_score(t).unwrap_or(0);

        match self {
            StrategyVariant::Default => 5,
            StrategyVariant::Empathetic => {
                if other.has_style(Style::Emotional) { 10 } else { 4 }
            }
            StrategyVariant::Logical => {
                if other.has_style(Style::Direct) { 10 } else { 3 }
            }
            StrategyVariant::Creative => {
                if other.has_style(Style::Humor) || other.has_trait(Trait::Openness) {
                    10
                } else {
                    5
                }
            }
            StrategyVariant::Reserved => {
                if other_trait(Trait::Extroversion) <= 4 { 9 } else { 4 }
            }
            StrategyVariant::Energetic => {
                if other_trait(Trait::Extroversion) >= 7 { 10 } else { 5 }
            }
            StrategyVariant::Analytical => {
                let mine = me
                    .trait_score(Trait::Conscientiousness)
                    .unwrap_or(ANALYTICAL_NEUTRAL);
                let theirs = other
                    .trait_score(Trait::Conscientiousness)
                    .unwrap_or(ANALYTICAL_NEUTRAL);
                10 - (mine - theirs).abs()
            }
            StrategyVariant::Adventurous => {
                if other_trait(Trait::Openness) >= 7 { 10 } else { 5 }
            }
            StrategyVariant::Introvert => {
                if other_trait(Trait::Extroversion) <= 4 { 10 } else { 3 }
            }
            StrategyVariant::Humorous => {
                if other.style_score(Style::Humor).unwrap_or(0) >= 7 { 10 } else { 5 }
            }
        }
    }
}
