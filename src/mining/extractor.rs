//! Conditional-pattern extractor (C6): the FP-growth-style recursion
//! that walks header links to materialize prefix paths, trims by
//! `minSup`, and recurses into conditional PUF-trees.

use super::candidates::CandidateSet;
use super::tree::PufTree;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Mine `tree` for patterns extending `prefix`, accumulating survivors
/// into `candidates`.
///
/// Only patterns of length >= 2 are emitted here (OQ-4): 1-item
/// patterns are already in `candidates`, seeded directly from C3's
/// summed probabilities, because the tree never sees transactions
/// shorter than 2 items and so cannot reproduce an exact singleton
/// support on its own.
pub fn generate_patterns<I>(
    tree: &mut PufTree<I>,
    prefix: &[I],
    min_support: f64,
    global_rank: &HashMap<I, usize>,
    candidates: &mut CandidateSet<I>,
) where
    I: Clone + Eq + Hash,
{
    // Snapshot order up front: info[x] for items not yet removed does
    // not change as sibling items are removed later in this loop.
    let mut order: Vec<I> = tree.header.keys().cloned().collect();
    order.sort_by(|a, b| {
        let info_a = tree.info.get(a).copied().unwrap_or(0.0);
        let info_b = tree.info.get(b).copied().unwrap_or(0.0);
        info_a
            .partial_cmp(&info_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| global_rank[a].cmp(&global_rank[b]))
    });

    for x in order {
        let mut pattern = prefix.to_vec();
        pattern.push(x.clone());

        let support = tree.header_cap_sum(&x);
        if pattern.len() >= 2 && support >= min_support {
            candidates.insert(pattern.clone(), support, global_rank);
        }

        let paths = tree.conditional_pattern_base(&x);

        let mut aggregate: HashMap<I, f64> = HashMap::new();
        for (path, weight) in &paths {
            for item in path {
                *aggregate.entry(item.clone()).or_insert(0.0) += *weight;
            }
        }
        aggregate.retain(|_, v| *v >= min_support);

        if !aggregate.is_empty() {
            let mut local_order: Vec<I> = aggregate.keys().cloned().collect();
            local_order.sort_by(|a, b| {
                aggregate[b]
                    .partial_cmp(&aggregate[a])
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| global_rank[a].cmp(&global_rank[b]))
            });
            let local_rank: HashMap<I, usize> = local_order
                .iter()
                .enumerate()
                .map(|(idx, item)| (item.clone(), idx))
                .collect();

            let mut conditional_tree = PufTree::new();
            conditional_tree.info = aggregate
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect::<ahash::AHashMap<_, _>>();

            let mut any_survivor = false;
            for (path, weight) in &paths {
                let mut projected: Vec<I> = path
                    .iter()
                    .filter(|item| aggregate.contains_key(*item))
                    .cloned()
                    .collect();
                projected.sort_by_key(|item| local_rank[item]);
                if !projected.is_empty() {
                    conditional_tree.insert_weighted_path(&projected, *weight);
                    any_survivor = true;
                }
            }

            if any_survivor {
                generate_patterns(
                    &mut conditional_tree,
                    &pattern,
                    min_support,
                    global_rank,
                    candidates,
                );
            }
        }

        tree.remove_item(&x);
    }
}
