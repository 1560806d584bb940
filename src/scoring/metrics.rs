//! The four generic sub-scores
//!
//! Pure functions of two profiles, each on a 0-10 scale for in-range input.

use crate::models::{Person, MAX_SCORE};
use std::collections::BTreeMap;

/// Age gap buckets: (max gap, score)
const AGE_BUCKETS: [(u32, f64); 4] = [(2, 10.0), (5, 8.0), (10, 6.0), (15, 4.0)];
const AGE_FLOOR: f64 = 2.0;

/// Jaccard similarity of the two interest sets, scaled to 0-10
pub fn interest_compatibility(person1: &Person, person2: &Person) -> f64 {
    let a = person1.interests();
    let b = person2.interests();

    let shared = a.intersection(b).count();
    let total = a.union(b).count();
    if total == 0 {
        return 0.0;
    }
    shared as f64 / total as f64 * 10.0
}

/// Mean closeness over person1's personality traits
pub fn personality_compatibility(person1: &Person, person2: &Person) -> f64 {
    closeness(person1.personality(), person2.personality())
}

/// Mean closeness over person1's communication styles
pub fn communication_compatibility(person1: &Person, person2: &Person) -> f64 {
    closeness(person1.communication(), person2.communication())
}

/// Step function of the absolute age gap
pub fn age_compatibility(person1: &Person, person2: &Person) -> f64 {
    let gap = person1.age().abs_diff(person2.age());
    AGE_BUCKETS
        .iter()
        .find(|(max_gap, _)| gap <= *max_gap)
        .map(|(_, score)| *score)
        .unwrap_or(AGE_FLOOR)
}

/// Average of `10 - |a - b|` over the keys of `a`; keys missing from `b` read as 0.
fn closeness<K: Ord>(a: &BTreeMap<K, i32>, b: &BTreeMap<K, i32>) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let total: i64 = a
        .iter()
        .map(|(key, value)| {
            let other = b.get(key).copied().unwrap_or(0);
            i64::from(MAX_SCORE) - (i64::from(*value) - i64::from(other)).abs()
        })
        .sum();
    total as f64 / a.len() as f64
}
