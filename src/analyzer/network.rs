//! Friendship network views
//!
//! Read-only aggregation over the friendship lists recorded by
//! `FriendshipAnalyzer::create_friendship_network`.

use crate::models::{Person, ProfileId};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

/// Network-wide friendship totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NetworkStats {
    pub total_people: usize,
    pub total_friendships: usize,
    /// Mean friendship records per person (0 with no people)
    pub average_friendships: f64,
}

impl NetworkStats {
    pub fn from_people(people: &[Person]) -> Self {
        let total_friendships: usize = people.iter().map(|p| p.friendships().len()).sum();
        let average_friendships = if people.is_empty() {
            0.0
        } else {
            total_friendships as f64 / people.len() as f64
        };
        Self {
            total_people: people.len(),
            total_friendships,
            average_friendships,
        }
    }
}

/// Directed friendship graph: node = profile, edge weight = score
#[derive(Debug, Clone)]
pub struct FriendshipGraph {
    graph: DiGraph<ProfileId, f64>,
}

/// A pair with friendship edges in both directions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MutualFriendship {
    pub first: ProfileId,
    pub second: ProfileId,
    /// Score of `first` towards `second`
    pub forward_score: f64,
    /// Score of `second` towards `first`
    pub backward_score: f64,
}

impl FriendshipGraph {
    /// Build from recorded friendship lists; node order follows `people`
    pub fn from_people(people: &[Person]) -> Self {
        let mut graph = DiGraph::with_capacity(people.len(), 0);
        let index: HashMap<ProfileId, NodeIndex> = people
            .iter()
            .map(|p| (p.id(), graph.add_node(p.id())))
            .collect();

        for person in people {
            let from = index[&person.id()];
            for friendship in person.friendships() {
                // Edges to profiles that are no longer registered are skipped
                if let Some(&to) = index.get(&friendship.friend) {
                    graph.add_edge(from, to, friendship.score);
                }
            }
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Pairs that chose each other, in registration order
    pub fn mutual_friendships(&self) -> Vec<MutualFriendship> {
        let mut mutual: Vec<(NodeIndex, NodeIndex, MutualFriendship)> = self
            .graph
            .raw_edges()
            .iter()
            .filter(|edge| edge.source() < edge.target())
            .filter_map(|edge| {
                let (from, to) = (edge.source(), edge.target());
                let back = self.graph.find_edge(to, from)?;
                Some((
                    from,
                    to,
                    MutualFriendship {
                        first: self.graph[from],
                        second: self.graph[to],
                        forward_score: edge.weight,
                        backward_score: self.graph[back],
                    },
                ))
            })
            .collect();
        mutual.sort_by_key(|(from, to, _)| (*from, *to));
        mutual.into_iter().map(|(_, _, m)| m).collect()
    }

    /// Groups of two or more people who can all reach each other through
    /// friendship edges (strongly connected components).
    ///
    /// Members are in registration order; larger circles come first.
    pub fn friend_circles(&self) -> Vec<Vec<ProfileId>> {
        let mut circles: Vec<Vec<NodeIndex>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|mut scc| {
                scc.sort();
                scc
            })
            .collect();

        circles.sort_by_key(|c| (std::cmp::Reverse(c.len()), c[0]));
        circles
            .into_iter()
            .map(|c| c.into_iter().map(|idx| self.graph[idx]).collect())
            .collect()
    }
}
