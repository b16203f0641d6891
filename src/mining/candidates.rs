//! Candidate accumulator (C7).

use std::collections::HashMap;
use std::hash::Hash;

/// Itemset -> cap-sum, an upper bound on expected support. Populated
/// by C3 (singletons) and C6 (everything of length >= 2), and read
/// exclusively by C8.
pub struct CandidateSet<I> {
    map: HashMap<Vec<I>, f64>,
}

impl<I: Clone + Eq + Hash> CandidateSet<I> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Insert a pattern, canonicalizing it to ascending global-rank
    /// order first (OQ-6) so the same itemset always maps to the same
    /// key no matter which recursion path produced it.
    pub fn insert(&mut self, mut items: Vec<I>, cap_sum: f64, rank: &HashMap<I, usize>) {
        items.sort_by_key(|item| rank[item]);
        self.map.insert(items, cap_sum);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vec<I>, &f64)> {
        self.map.iter()
    }

    pub fn into_inner(self) -> HashMap<Vec<I>, f64> {
        self.map
    }
}

impl<I: Clone + Eq + Hash> Default for CandidateSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_canonicalizes_by_rank() {
        let rank: HashMap<String, usize> =
            [("a".to_string(), 0), ("b".to_string(), 1)].into_iter().collect();
        let mut set = CandidateSet::new();
        set.insert(vec!["b".to_string(), "a".to_string()], 0.5, &rank);
        let (key, _) = set.iter().next().unwrap();
        assert_eq!(key, &vec!["a".to_string(), "b".to_string()]);
    }
}
