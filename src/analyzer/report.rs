//! Analysis report model
//!
//! A plain, serializable snapshot of an analyzer session. Reporters render
//! it; nothing in here formats text.

use super::{FriendshipAnalyzer, NetworkStats};
use crate::config::CompatibilityWeights;
use crate::models::{CommunicationStyle, Person, PersonalityTrait, ProfileId, StrategyVariant};
use crate::scoring::CompatibilityBreakdown;
use serde::Serialize;
use std::collections::BTreeMap;

/// A profile with friendships resolved to names
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub age: u32,
    pub variant: StrategyVariant,
    pub interests: Vec<String>,
    pub personality: BTreeMap<PersonalityTrait, i32>,
    pub communication: BTreeMap<CommunicationStyle, i32>,
    pub friendships: Vec<FriendshipEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FriendshipEntry {
    pub friend: String,
    pub score: f64,
}

/// Compatibility of the first registered profile towards the second
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub first: String,
    pub second: String,
    pub breakdown: CompatibilityBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchEntry {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MutualEntry {
    pub first: String,
    pub second: String,
    pub forward_score: f64,
    pub backward_score: f64,
}

/// Everything a reporter needs about one analyzer session
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub threshold: f64,
    pub weights: CompatibilityWeights,
    pub people: Vec<ProfileSummary>,
    /// `None` with fewer than two people
    pub pair: Option<PairReport>,
    /// Whose matches are ranked
    pub target: Option<String>,
    pub matches: Vec<MatchEntry>,
    pub mutual_friendships: Vec<MutualEntry>,
    pub friend_circles: Vec<Vec<String>>,
    pub network: NetworkStats,
}

impl AnalysisReport {
    /// Snapshot an analyzer.
    ///
    /// Matches are ranked for `target` (default: the first profile) and
    /// truncated to `top` when given. Friendship data reflects the last
    /// `create_friendship_network` call.
    pub fn build(
        analyzer: &FriendshipAnalyzer,
        target: Option<&Person>,
        top: Option<usize>,
    ) -> Self {
        let people = analyzer.people();
        let name_of = |id: ProfileId| {
            analyzer
                .person(id)
                .map(|p| p.name().to_string())
                .unwrap_or_else(|| id.to_string())
        };

        let pair = match people {
            [first, second, ..] => Some(PairReport {
                first: first.name().to_string(),
                second: second.name().to_string(),
                breakdown: analyzer.breakdown(first, second),
            }),
            _ => None,
        };

        let target = target.or_else(|| people.first());
        let matches: Vec<MatchEntry> = target
            .map(|t| {
                let ranked = analyzer.find_best_matches(t);
                let limit = top.unwrap_or(ranked.len());
                ranked
                    .into_iter()
                    .take(limit)
                    .map(|m| MatchEntry {
                        name: m.person.name().to_string(),
                        score: m.score,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let graph = analyzer.friendship_graph();
        let mutual_friendships: Vec<MutualEntry> = graph
            .mutual_friendships()
            .into_iter()
            .map(|m| MutualEntry {
                first: name_of(m.first),
                second: name_of(m.second),
                forward_score: m.forward_score,
                backward_score: m.backward_score,
            })
            .collect();
        let friend_circles: Vec<Vec<String>> = graph
            .friend_circles()
            .into_iter()
            .map(|circle| circle.into_iter().map(&name_of).collect())
            .collect();

        Self {
            threshold: analyzer.compatibility_threshold(),
            weights: *analyzer.weights(),
            people: people
                .iter()
                .map(|p| ProfileSummary {
                    name: p.name().to_string(),
                    age: p.age(),
                    variant: p.variant(),
                    interests: p.interests().iter().cloned().collect(),
                    personality: p.personality().clone(),
                    communication: p.communication().clone(),
                    friendships: p
                        .friendships()
                        .iter()
                        .map(|f| FriendshipEntry {
                            friend: name_of(f.friend),
                            score: f.score,
                        })
                        .collect(),
                })
                .collect(),
            pair,
            target: target.map(|t| t.name().to_string()),
            matches,
            mutual_friendships,
            friend_circles,
            network: analyzer.network_stats(),
        }
    }
}
