//! Friendship analyzer - rule-based friendship compatibility scoring
//!
//! Profiles carry interests, Big Five personality traits, communication
//! styles, an age and a strategy variant. The analyzer scores every ordered
//! pair, ranks matches for a person and links everyone whose score clears a
//! threshold into a directed friendship network.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use analyzer::{FriendshipAnalyzer, Match};
pub use error::{AnalyzerError, AnalyzerResult};
pub use models::{CommunicationStyle, Person, PersonalityTrait, ProfileId, StrategyVariant};
