//! Friendship analyzer
//!
//! Owns the registered profiles and runs scoring over them: pairwise
//! compatibility, ranked matches, and the thresholded friendship network.

mod network;
mod report;

pub use network::{FriendshipGraph, MutualFriendship, NetworkStats};
pub use report::{
    AnalysisReport, FriendshipEntry, MatchEntry, MutualEntry, PairReport, ProfileSummary,
};

use crate::config::{CompatibilityWeights, ScoringConfig, DEFAULT_THRESHOLD};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{Friendship, Person, ProfileId};
use crate::scoring::{CompatibilityBreakdown, CompatibilityScorer};
use tracing::{debug, info, warn};

/// A ranked candidate for a target profile
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub person: &'a Person,
    pub score: f64,
}

/// Holds profiles and exposes scoring, ranking and network building
#[derive(Debug)]
pub struct FriendshipAnalyzer {
    people: Vec<Person>,
    weights: CompatibilityWeights,
    compatibility_threshold: f64,
}

impl Default for FriendshipAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendshipAnalyzer {
    /// Analyzer with default weights and a threshold of 7.0
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            weights: CompatibilityWeights::default(),
            compatibility_threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Analyzer using a scoring configuration (validated first)
    pub fn with_config(scoring: &ScoringConfig) -> AnalyzerResult<Self> {
        let scoring = scoring.clone().validated()?;
        Ok(Self {
            people: Vec::new(),
            weights: scoring.weights,
            compatibility_threshold: scoring.threshold,
        })
    }

    /// Register a profile; insertion order is ranking order among ties
    pub fn add_person(&mut self, person: Person) -> ProfileId {
        let id = person.id();
        debug!("Registered {} ({})", person.name(), id);
        self.people.push(person);
        id
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: ProfileId) -> Option<&Person> {
        self.people.iter().find(|p| p.id() == id)
    }

    /// First registered profile with this name (case-insensitive).
    ///
    /// Names need not be unique; a warning is logged when several match.
    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        let wanted = name.trim();
        let mut found = self
            .people
            .iter()
            .filter(|p| p.name().eq_ignore_ascii_case(wanted));
        let first = found.next()?;
        let others = found.count();
        if others > 0 {
            warn!(
                "{} profiles are named '{}', using the first registered",
                others + 1,
                wanted
            );
        }
        Some(first)
    }

    pub fn weights(&self) -> &CompatibilityWeights {
        &self.weights
    }

    pub fn compatibility_threshold(&self) -> f64 {
        self.compatibility_threshold
    }

    pub fn set_compatibility_threshold(&mut self, threshold: f64) -> AnalyzerResult<()> {
        if !threshold.is_finite() {
            return Err(AnalyzerError::InvalidThreshold(threshold));
        }
        self.compatibility_threshold = threshold;
        Ok(())
    }

    pub fn scorer(&self) -> CompatibilityScorer<'_> {
        CompatibilityScorer::new(&self.weights)
    }

    /// Overall compatibility of `person1` towards `person2`
    pub fn analyze_compatibility(&self, person1: &Person, person2: &Person) -> f64 {
        self.scorer().score(person1, person2)
    }

    pub fn breakdown(&self, person1: &Person, person2: &Person) -> CompatibilityBreakdown {
        self.scorer().breakdown(person1, person2)
    }

    /// Every other registered profile, best match first.
    ///
    /// Self is excluded by identity, so a distinct profile with identical
    /// data still shows up. Ties keep registration order.
    pub fn find_best_matches(&self, person: &Person) -> Vec<Match<'_>> {
        let scorer = self.scorer();
        let mut matches: Vec<Match<'_>> = self
            .people
            .iter()
            .filter(|other| other.id() != person.id())
            .map(|other| Match {
                person: other,
                score: scorer.score(person, other),
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches
    }

    /// Rebuild every friendship list from scratch.
    ///
    /// Each ordered pair is scored; `score >= threshold` records an edge on
    /// the first profile. Lists are cleared first, so calling this again
    /// yields the same lists. Returns the number of edges recorded.
    pub fn create_friendship_network(&mut self) -> usize {
        let threshold = self.compatibility_threshold;
        let scorer = CompatibilityScorer::new(&self.weights);

        let edges: Vec<Vec<Friendship>> = self
            .people
            .iter()
            .map(|person| {
                self.people
                    .iter()
                    .filter(|other| other.id() != person.id())
                    .filter_map(|other| {
                        let score = scorer.score(person, other);
                        (score >= threshold).then_some(Friendship {
                            friend: other.id(),
                            score,
                        })
                    })
                    .collect()
            })
            .collect();

        let mut total = 0;
        for (person, friendships) in self.people.iter_mut().zip(edges) {
            total += friendships.len();
            person.friendships = friendships;
        }

        info!(
            "Friendship network: {} people, {} edges at threshold {:.2}",
            self.people.len(),
            total,
            threshold
        );
        total
    }

    /// Totals over the current friendship lists
    pub fn network_stats(&self) -> NetworkStats {
        NetworkStats::from_people(&self.people)
    }

    /// Graph view of the current friendship lists
    pub fn friendship_graph(&self) -> FriendshipGraph {
        FriendshipGraph::from_people(&self.people)
    }
}
