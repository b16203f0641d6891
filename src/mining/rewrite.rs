//! Transaction rewriter (C4).

use crate::item::Transaction;
use std::collections::HashMap;
use std::hash::Hash;

/// A rewritten transaction: surviving `(item, probability)` pairs,
/// sorted ascending by rank (most-frequent item first).
pub type RewrittenTransaction<I> = Vec<(I, f64)>;

/// Drop infrequent items and sort the remainder by rank; discard
/// transactions shorter than 2 items, since 1-item patterns are
/// already captured by C3's summed probabilities.
pub fn rewrite_transactions<I>(
    transactions: &[Transaction<I>],
    rank: &HashMap<I, usize>,
) -> Vec<RewrittenTransaction<I>>
where
    I: Clone + Eq + Hash,
{
    let mut rewritten = Vec::new();
    for tx in transactions {
        let mut occs: Vec<(I, f64)> = tx
            .items
            .iter()
            .filter(|occ| rank.contains_key(&occ.item))
            .map(|occ| (occ.item.clone(), occ.probability))
            .collect();
        occs.sort_by_key(|(item, _)| rank[item]);
        if occs.len() >= 2 {
            rewritten.push(occs);
        }
    }
    rewritten
}
