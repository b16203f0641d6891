//! Exact verifier (C8): a second database pass that computes the true
//! expected support of each candidate and discards false positives.

use super::candidates::CandidateSet;
use crate::item::Transaction;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Compute true expected support for every candidate and keep only
/// those meeting `min_support`.
///
/// Singletons carry their cap-sum over unchanged (it already equals
/// true expected support, per OQ-4); every other candidate is
/// recomputed as `Σ_{T ⊇ X} ∏_{x∈X} p(x in T)` over a second pass of
/// `transactions`. An inverted index from item to the candidates that
/// contain it avoids the naive `O(|DB| · |candidates|)` scan.
pub fn verify<I>(
    transactions: &[Transaction<I>],
    candidates: &CandidateSet<I>,
    min_support: f64,
) -> HashMap<Vec<I>, f64>
where
    I: Clone + Eq + Hash,
{
    let candidate_list: Vec<(&Vec<I>, f64)> =
        candidates.iter().map(|(items, &cap)| (items, cap)).collect();

    let mut inverted: HashMap<I, Vec<usize>> = HashMap::new();
    for (idx, (items, _)) in candidate_list.iter().enumerate() {
        for item in items.iter() {
            inverted.entry(item.clone()).or_default().push(idx);
        }
    }

    let mut true_support: HashMap<Vec<I>, f64> = HashMap::new();

    for tx in transactions {
        let tx_probs: HashMap<&I, f64> = tx
            .items
            .iter()
            .map(|occ| (&occ.item, occ.probability))
            .collect();

        let mut touched: HashSet<usize> = HashSet::new();
        for occ in &tx.items {
            if let Some(idxs) = inverted.get(&occ.item) {
                touched.extend(idxs.iter().copied());
            }
        }

        for idx in touched {
            let (items, _) = candidate_list[idx];
            if items.len() == 1 {
                continue;
            }
            if items.iter().all(|item| tx_probs.contains_key(item)) {
                let product: f64 = items.iter().map(|item| tx_probs[item]).product();
                *true_support.entry(items.clone()).or_insert(0.0) += product;
            }
        }
    }

    for (items, cap_sum) in &candidate_list {
        if items.len() == 1 {
            true_support.insert((*items).clone(), *cap_sum);
        }
    }

    true_support.retain(|_, support| *support >= min_support);
    true_support
}
