//! Core data models for the friendship analyzer
//!
//! Profiles are validated once, at construction. After that every scoring
//! operation over them is a total function.

use crate::error::{AnalyzerError, AnalyzerResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use uuid::Uuid;

/// Lowest accepted trait/style score
pub const MIN_SCORE: i32 = 0;
/// Highest accepted trait/style score
pub const MAX_SCORE: i32 = 10;

/// Personality trait vocabulary (Big Five)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityTrait {
    Extroversion,
    Openness,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 5] = [
        PersonalityTrait::Extroversion,
        PersonalityTrait::Openness,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityTrait::Extroversion => "extroversion",
            PersonalityTrait::Openness => "openness",
            PersonalityTrait::Agreeableness => "agreeableness",
            PersonalityTrait::Conscientiousness => "conscientiousness",
            PersonalityTrait::Neuroticism => "neuroticism",
        }
    }
}

impl std::fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityTrait {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PersonalityTrait::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| AnalyzerError::UnknownTrait(s.to_string()))
    }
}

/// Communication style vocabulary
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Direct,
    Emotional,
    Humor,
    Formal,
}

impl CommunicationStyle {
    pub const ALL: [CommunicationStyle; 4] = [
        CommunicationStyle::Direct,
        CommunicationStyle::Emotional,
        CommunicationStyle::Humor,
        CommunicationStyle::Formal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Emotional => "emotional",
            CommunicationStyle::Humor => "humor",
            CommunicationStyle::Formal => "formal",
        }
    }
}

impl std::fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunicationStyle {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CommunicationStyle::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| AnalyzerError::UnknownStyle(s.to_string()))
    }
}

/// Per-person rule for how that person perceives a partner.
///
/// The rules themselves live in [`crate::scoring`]; see
/// `StrategyVariant::score`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum StrategyVariant {
    #[default]
    Default,
    Empathetic,
    Logical,
    Creative,
    Reserved,
    Energetic,
    Analytical,
    Adventurous,
    Introvert,
    Humorous,
}

impl StrategyVariant {
    pub const ALL: [StrategyVariant; 10] = [
        StrategyVariant::Default,
        StrategyVariant::Empathetic,
        StrategyVariant::Logical,
        StrategyVariant::Creative,
        StrategyVariant::Reserved,
        StrategyVariant::Energetic,
        StrategyVariant::Analytical,
        StrategyVariant::Adventurous,
        StrategyVariant::Introvert,
        StrategyVariant::Humorous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyVariant::Default => "default",
            StrategyVariant::Empathetic => "empathetic",
            StrategyVariant::Logical => "logical",
            StrategyVariant::Creative => "creative",
            StrategyVariant::Reserved => "reserved",
            StrategyVariant::Energetic => "energetic",
            StrategyVariant::Analytical => "analytical",
            StrategyVariant::Adventurous => "adventurous",
            StrategyVariant::Introvert => "introvert",
            StrategyVariant::Humorous => "humorous",
        }
    }
}

impl std::fmt::Display for StrategyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyVariant {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StrategyVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| AnalyzerError::UnknownVariant(s.to_string()))
    }
}

/// Opaque profile identity.
///
/// Two profiles built from identical data still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ProfileId(Uuid);

impl ProfileId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed friendship edge recorded on the source profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Friendship {
    pub friend: ProfileId,
    pub score: f64,
}

/// A person's profile used for scoring
#[derive(Debug)]
pub struct Person {
    id: ProfileId,
    name: String,
    age: u32,
    interests: BTreeSet<String>,
    personality: BTreeMap<PersonalityTrait, i32>,
    communication: BTreeMap<CommunicationStyle, i32>,
    variant: StrategyVariant,
    pub(crate) friendships: Vec<Friendship>,
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Person {
    /// Start building a profile
    pub fn builder(name: impl Into<String>, age: u32) -> PersonBuilder {
        PersonBuilder::new(name, age)
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    pub fn personality(&self) -> &BTreeMap<PersonalityTrait, i32> {
        &self.personality
    }

    pub fn communication(&self) -> &BTreeMap<CommunicationStyle, i32> {
        &self.communication
    }

    pub fn variant(&self) -> StrategyVariant {
        self.variant
    }

    pub fn friendships(&self) -> &[Friendship] {
        &self.friendships
    }

    /// Score for a trait, if this profile has one
    pub fn trait_score(&self, t: PersonalityTrait) -> Option<i32> {
        self.personality.get(&t).copied()
    }

    /// Score for a communication style, if this profile has one
    pub fn style_score(&self, s: CommunicationStyle) -> Option<i32> {
        self.communication.get(&s).copied()
    }

    pub fn has_trait(&self, t: PersonalityTrait) -> bool {
        self.personality.contains_key(&t)
    }

    pub fn has_style(&self, s: CommunicationStyle) -> bool {
        self.communication.contains_key(&s)
    }

    /// How this person perceives `other`, according to their strategy variant.
    ///
    /// Not symmetric: `a.compatibility_strategy(b)` generally differs from
    /// `b.compatibility_strategy(a)`.
    pub fn compatibility_strategy(&self, other: &Person) -> i32 {
        self.variant.score(self, other)
    }
}

/// Builder for [`Person`]; validation happens in [`PersonBuilder::build`]
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    age: u32,
    interests: BTreeSet<String>,
    personality: BTreeMap<PersonalityTrait, i32>,
    communication: BTreeMap<CommunicationStyle, i32>,
    variant: StrategyVariant,
}

impl PersonBuilder {
    fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            interests: BTreeSet::new(),
            personality: BTreeMap::new(),
            communication: BTreeMap::new(),
            variant: StrategyVariant::Default,
        }
    }

    /// Add one interest tag (trimmed; blank tags are ignored)
    pub fn interest(mut self, tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() {
            self.interests.insert(tag.to_string());
        }
        self
    }

    pub fn interests<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().fold(self, |b, tag| b.interest(tag))
    }

    pub fn trait_score(mut self, t: PersonalityTrait, score: i32) -> Self {
        self.personality.insert(t, score);
        self
    }

    pub fn personality<I>(self, scores: I) -> Self
    where
        I: IntoIterator<Item = (PersonalityTrait, i32)>,
    {
        scores
            .into_iter()
            .fold(self, |b, (t, score)| b.trait_score(t, score))
    }

    pub fn style_score(mut self, s: CommunicationStyle, score: i32) -> Self {
        self.communication.insert(s, score);
        self
    }

    pub fn communication<I>(self, scores: I) -> Self
    where
        I: IntoIterator<Item = (CommunicationStyle, i32)>,
    {
        scores
            .into_iter()
            .fold(self, |b, (s, score)| b.style_score(s, score))
    }

    pub fn variant(mut self, variant: StrategyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Validate score ranges and produce a profile with a fresh identity
    pub fn build(self) -> AnalyzerResult<Person> {
        for (t, score) in &self.personality {
            check_range(&self.name, "personality trait", t.as_str(), *score)?;
        }
        for (s, score) in &self.communication {
            check_range(&self.name, "communication style", s.as_str(), *score)?;
        }

        Ok(Person {
            id: ProfileId::fresh(),
            name: self.name,
            age: self.age,
            interests: self.interests,
            personality: self.personality,
            communication: self.communication,
            variant: self.variant,
            friendships: Vec::new(),
        })
    }
}

fn check_range(name: &str, kind: &str, key: &str, score: i32) -> AnalyzerResult<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(AnalyzerError::InvalidProfile {
            name: name.to_string(),
            reason: format!(
                "{kind} '{key}' is {score}, expected {MIN_SCORE}-{MAX_SCORE}"
            ),
        })
    }
}

/// Raw profile as it appears in profile files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub personality: BTreeMap<String, i32>,
    #[serde(default)]
    pub communication: BTreeMap<String, i32>,
    #[serde(default)]
    pub variant: Option<String>,
}

impl TryFrom<ProfileInput> for Person {
    type Error = AnalyzerError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        let mut builder = Person::builder(input.name, input.age).interests(&input.interests);

        for (key, score) in &input.personality {
            let t: PersonalityTrait = key.parse()?;
            if builder.personality.contains_key(&t) {
                return Err(duplicate_key(&builder.name, "personality trait", t.as_str()));
            }
            builder = builder.trait_score(t, *score);
        }
        for (key, score) in &input.communication {
            let s: CommunicationStyle = key.parse()?;
            if builder.communication.contains_key(&s) {
                return Err(duplicate_key(&builder.name, "communication style", s.as_str()));
            }
            builder = builder.style_score(s, *score);
        }
        if let Some(variant) = input.variant.as_deref() {
            builder = builder.variant(variant.parse()?);
        }

        builder.build()
    }
}

/// Keys match case-insensitively, so "Openness" and "openness" collide
fn duplicate_key(name: &str, kind: &str, key: &str) -> AnalyzerError {
    AnalyzerError::InvalidProfile {
        name: name.to_string(),
        reason: format!("{kind} '{key}' is given more than once"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::builder("Alice", 25)
            .interests(["reading", "coding"])
            .personality([
                (PersonalityTrait::Extroversion, 5),
                (PersonalityTrait::Openness, 7),
                (PersonalityTrait::Agreeableness, 8),
                (PersonalityTrait::Conscientiousness, 6),
                (PersonalityTrait::Neuroticism, 4),
            ])
            .communication([
                (CommunicationStyle::Direct, 6),
                (CommunicationStyle::Emotional, 8),
                (CommunicationStyle::Humor, 5),
                (CommunicationStyle::Formal, 4),
            ])
            .build()
            .expect("valid profile")
    }

    #[test]
    fn test_person_creation() {
        let alice = alice();
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.age(), 25);
        assert!(alice.interests().contains("reading"));
        assert_eq!(alice.trait_score(PersonalityTrait::Extroversion), Some(5));
        assert_eq!(alice.variant(), StrategyVariant::Default);
        assert!(alice.friendships().is_empty());
    }

    #[test]
    fn test_identity_equality() {
        let a = alice();
        let b = alice();
        assert_ne!(a, b, "identical data must still be distinct profiles");
        assert_eq!(a, a);
    }

    #[test]
    fn test_interests_collapse_and_trim() {
        let p = Person::builder("Dup", 30)
            .interests(["chess", " chess ", "", "go"])
            .build()
            .unwrap();
        assert_eq!(p.interests().len(), 2);
    }

    #[test]
    fn test_out_of_range_trait_rejected() {
        let err = Person::builder("Bad", 20)
            .trait_score(PersonalityTrait::Openness, 11)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidProfile { .. }));
        assert!(err.to_string().contains("openness"));

        let err = Person::builder("Bad", 20)
            .style_score(CommunicationStyle::Humor, -1)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("humor"));
    }

    #[test]
    fn test_boundary_scores_accepted() {
        assert!(Person::builder("Edge", 20)
            .trait_score(PersonalityTrait::Openness, 0)
            .style_score(CommunicationStyle::Formal, 10)
            .build()
            .is_ok());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Logical".parse::<StrategyVariant>().unwrap(),
            StrategyVariant::Logical
        );
        assert_eq!(
            " humor ".parse::<CommunicationStyle>().unwrap(),
            CommunicationStyle::Humor
        );
        assert!(matches!(
            "charisma".parse::<PersonalityTrait>(),
            Err(AnalyzerError::UnknownTrait(_))
        ));
        assert!(matches!(
            "sarcastic".parse::<StrategyVariant>(),
            Err(AnalyzerError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_profile_input_conversion() {
        let input: ProfileInput = serde_json::from_str(
            r#"{
                "name": "Sara",
                "age": 26,
                "interests": ["coding", "reading"],
                "personality": {"extroversion": 5, "openness": 7},
                "communication": {"emotional": 9},
                "variant": "empathetic"
            }"#,
        )
        .unwrap();
        let sara = Person::try_from(input).unwrap();
        assert_eq!(sara.variant(), StrategyVariant::Empathetic);
        assert!(sara.has_style(CommunicationStyle::Emotional));
        assert!(!sara.has_style(CommunicationStyle::Direct));
        assert_eq!(sara.personality().len(), 2);
    }

    #[test]
    fn test_profile_input_unknown_trait() {
        let input = ProfileInput {
            name: "X".into(),
            age: 1,
            interests: vec![],
            personality: BTreeMap::from([("charisma".to_string(), 5)]),
            communication: BTreeMap::new(),
            variant: None,
        };
        assert!(matches!(
            Person::try_from(input),
            Err(AnalyzerError::UnknownTrait(_))
        ));
    }

    #[test]
    fn test_profile_input_case_duplicate_rejected() {
        let input: ProfileInput = serde_json::from_str(
            r#"{"name": "Dup", "age": 30, "personality": {"Openness": 3, "openness": 9}}"#,
        )
        .unwrap();
        let err = Person::try_from(input).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidProfile { ref name, .. } if name == "Dup"));
        assert!(err.to_string().contains("openness"));

        let input: ProfileInput = serde_json::from_str(
            r#"{"name": "Dup", "age": 30, "communication": {"HUMOR": 3, "humor": 3}}"#,
        )
        .unwrap();
        assert!(Person::try_from(input).is_err());
    }
}
