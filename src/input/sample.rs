//! Fixed demo profiles

use crate::error::AnalyzerResult;
use crate::models::{CommunicationStyle as Style, Person, PersonalityTrait as Trait, StrategyVariant};

/// Ali (logical) and Sara (empathetic)
pub fn sample_people() -> AnalyzerResult<Vec<Person>> {
    let ali = Person::builder("Ali", 25)
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
        .build()?;

    let sara = Person::builder("Sara", 26)
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
        .build()?;

    Ok(vec![ali, sara])
}
