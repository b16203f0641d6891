//! PUF-tree (C5): a prefix tree whose node weights carry the
//! *prefixed item cap*, an upper bound on each path's contribution to
//! expected support.
//!
//! Nodes live in a flat arena (`Vec<PufNode<I>>`); parent links are
//! plain indices into that arena rather than owning handles, per the
//! design note that back-references must never co-own node lifetime.
//! `children` is keyed by item so a path never revisits the same item
//! twice.

use ahash::AHashMap;
use std::hash::Hash;

type NodeId = usize;
const ROOT: NodeId = 0;

pub(crate) struct PufNode<I> {
    pub item: Option<I>,
    pub cap: f64,
    pub parent: Option<NodeId>,
    pub children: AHashMap<I, NodeId>,
}

/// A PUF-tree together with its header table (`header`: item -> every
/// node carrying that item) and `info` (item -> summed cap across its
/// header), used to order the conditional-pattern extractor's recursion.
pub(crate) struct PufTree<I> {
    arena: Vec<PufNode<I>>,
    pub header: AHashMap<I, Vec<NodeId>>,
    pub info: AHashMap<I, f64>,
}

impl<I: Clone + Eq + Hash> PufTree<I> {
    pub fn new() -> Self {
        Self {
            arena: vec![PufNode {
                item: None,
                cap: 0.0,
                parent: None,
                children: AHashMap::new(),
            }],
            header: AHashMap::new(),
            info: AHashMap::new(),
        }
    }

    fn child_of(&self, node: NodeId, item: &I) -> Option<NodeId> {
        self.arena[node].children.get(item).copied()
    }

    fn insert_child(&mut self, node: NodeId, item: I, cap: f64) -> NodeId {
        let idx = self.arena.len();
        self.arena.push(PufNode {
            item: Some(item.clone()),
            cap,
            parent: Some(node),
            children: AHashMap::new(),
        });
        self.arena[node].children.insert(item.clone(), idx);
        self.header.entry(item).or_default().push(idx);
        idx
    }

    /// Insert a rewritten transaction into the main tree (§4.5).
    ///
    /// `capₖ = pₖ` at depth 0, and `capₖ = max(p₀..p_{k-1}) · pₖ`
    /// thereafter - the maximum-based upper bound is this algorithm's
    /// defining property and must not be replaced with a product or
    /// any other aggregation.
    pub fn insert_ranked_transaction(&mut self, occurrences: &[(I, f64)]) {
        let mut cur = ROOT;
        let mut running_max = 0.0_f64;
        for (k, (item, prob)) in occurrences.iter().enumerate() {
            let cap = if k == 0 { *prob } else { running_max * prob };
            cur = match self.child_of(cur, item) {
                Some(existing) => {
                    self.arena[existing].cap += cap;
                    existing
                }
                None => self.insert_child(cur, item.clone(), cap),
            };
            if *prob > running_max {
                running_max = *prob;
            }
        }
    }

    /// Insert a conditional-pattern-base path with a fixed weight
    /// (§4.6 step 6). Unlike the main tree, every visited node simply
    /// accumulates `weight` - cap semantics are fixed once, at
    /// main-tree construction, and are not recomputed here.
    pub fn insert_weighted_path(&mut self, items: &[I], weight: f64) {
        let mut cur = ROOT;
        for item in items {
            cur = match self.child_of(cur, item) {
                Some(existing) => {
                    self.arena[existing].cap += weight;
                    existing
                }
                None => self.insert_child(cur, item.clone(), weight),
            };
        }
    }

    /// Populate `info` as the summed cap per header list. Used once,
    /// for the main tree; conditional trees get `info` directly from
    /// the conditional frequent set computed by the extractor.
    pub fn recompute_info(&mut self) {
        self.info = self
            .header
            .iter()
            .map(|(item, nodes)| {
                let sum: f64 = nodes.iter().map(|&n| self.arena[n].cap).sum();
                (item.clone(), sum)
            })
            .collect();
    }

    pub fn header_cap_sum(&self, item: &I) -> f64 {
        self.header
            .get(item)
            .map(|nodes| nodes.iter().map(|&n| self.arena[n].cap).sum())
            .unwrap_or(0.0)
    }

    /// Walk every node carrying `item` up to (but excluding) the root,
    /// returning each path in root-to-node order paired with that
    /// node's cap as the path's weight (§4.6 step 4).
    pub fn conditional_pattern_base(&self, item: &I) -> Vec<(Vec<I>, f64)> {
        let mut bases = Vec::new();
        let Some(nodes) = self.header.get(item) else {
            return bases;
        };
        for &n in nodes {
            let weight = self.arena[n].cap;
            let mut path = Vec::new();
            let mut cur = self.arena[n].parent;
            while let Some(idx) = cur {
                match &self.arena[idx].item {
                    Some(ancestor_item) => {
                        path.push(ancestor_item.clone());
                        cur = self.arena[idx].parent;
                    }
                    None => break, // reached the root
                }
            }
            path.reverse();
            if !path.is_empty() {
                bases.push((path, weight));
            }
        }
        bases
    }

    /// Detach every node carrying `item` from its parent's children
    /// map (§4.6 step 8). Ancestor chains of other items are
    /// unaffected, since they are only ever read by walking `parent`
    /// links, never by descending through `children`.
    pub fn remove_item(&mut self, item: &I) {
        if let Some(nodes) = self.header.get(item) {
            for &n in nodes {
                if let Some(parent) = self.arena[n].parent {
                    self.arena[parent].children.remove(item);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_cap_is_the_raw_probability() {
        let mut tree = PufTree::new();
        tree.insert_ranked_transaction(&[("a".to_string(), 0.6)]);
        assert_eq!(tree.header_cap_sum(&"a".to_string()), 0.6);
    }

    #[test]
    fn deeper_cap_uses_max_of_all_ancestors_not_just_the_immediate_one() {
        let mut tree = PufTree::new();
        tree.insert_ranked_transaction(&[
            ("a".to_string(), 0.9),
            ("b".to_string(), 0.1),
            ("c".to_string(), 0.2),
        ]);
        assert_eq!(tree.header_cap_sum(&"b".to_string()), 0.9 * 0.1);
        // cap(c) = max(0.9, 0.1) * 0.2, not just the immediate predecessor's 0.1 * 0.2.
        assert_eq!(tree.header_cap_sum(&"c".to_string()), 0.9 * 0.2);
    }

    #[test]
    fn repeated_paths_accumulate_cap() {
        let mut tree = PufTree::new();
        for _ in 0..5 {
            tree.insert_ranked_transaction(&[
                ("a".to_string(), 1.0),
                ("b".to_string(), 1.0),
                ("c".to_string(), 1.0),
            ]);
        }
        assert_eq!(tree.header_cap_sum(&"a".to_string()), 5.0);
        assert_eq!(tree.header_cap_sum(&"b".to_string()), 5.0);
        assert_eq!(tree.header_cap_sum(&"c".to_string()), 5.0);
    }

    #[test]
    fn conditional_pattern_base_excludes_root() {
        let mut tree = PufTree::new();
        tree.insert_ranked_transaction(&[("a".to_string(), 0.5), ("b".to_string(), 0.5)]);
        let base = tree.conditional_pattern_base(&"b".to_string());
        assert_eq!(base, vec![(vec!["a".to_string()], 0.25)]);
        let base_a = tree.conditional_pattern_base(&"a".to_string());
        assert!(base_a.is_empty());
    }

    #[test]
    fn remove_item_does_not_break_descendant_ancestor_walks() {
        let mut tree = PufTree::new();
        tree.insert_ranked_transaction(&[
            ("a".to_string(), 1.0),
            ("b".to_string(), 1.0),
            ("c".to_string(), 1.0),
        ]);
        tree.remove_item(&"a".to_string());
        // c's ancestor chain (c -> b -> a) is still walkable even though
        // `a` was detached from the root's own children map.
        let base = tree.conditional_pattern_base(&"c".to_string());
        assert_eq!(base[0].0, vec!["a".to_string(), "b".to_string()]);
    }
}
