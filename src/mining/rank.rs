//! One-pass item ranker (C3).

use crate::errors::{MiningError, Result};
use crate::item::Transaction;
use std::collections::HashMap;
use std::hash::Hash;

/// The output of C3: the summed expected support and the rank of each
/// frequent item, plus the items themselves in rank order (rank 0 =
/// highest summed probability).
pub struct RankedItems<I> {
    pub sum_prob: HashMap<I, f64>,
    pub rank: HashMap<I, usize>,
    pub order: Vec<I>,
}

/// Single pass over the database: sum per-item probabilities, drop
/// items below `min_support`, and assign a deterministic descending
/// rank to the survivors.
pub fn rank_items<I>(transactions: &[Transaction<I>], min_support: f64) -> Result<RankedItems<I>>
where
    I: Clone + Eq + Hash + std::fmt::Debug,
{
    if transactions.is_empty() {
        return Err(MiningError::EmptyDatabase);
    }

    let mut sum_prob: HashMap<I, f64> = HashMap::new();
    let mut first_seen: HashMap<I, usize> = HashMap::new();
    let mut seq = 0usize;

    for tx in transactions {
        for occ in &tx.items {
            if occ.probability <= 0.0 || occ.probability > 1.0 {
                return Err(MiningError::ProbabilityOutOfRange {
                    item: format!("{:?}", occ.item),
                    probability: occ.probability,
                });
            }
            *sum_prob.entry(occ.item.clone()).or_insert(0.0) += occ.probability;
            if !first_seen.contains_key(&occ.item) {
                first_seen.insert(occ.item.clone(), seq);
                seq += 1;
            }
        }
    }

    let mut order: Vec<I> = sum_prob
        .iter()
        .filter(|(_, &v)| v >= min_support)
        .map(|(item, _)| item.clone())
        .collect();

    order.sort_by(|a, b| {
        sum_prob[b]
            .partial_cmp(&sum_prob[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| first_seen[a].cmp(&first_seen[b]))
    });

    let rank: HashMap<I, usize> = order
        .iter()
        .enumerate()
        .map(|(idx, item)| (item.clone(), idx))
        .collect();

    let sum_prob: HashMap<I, f64> = order
        .iter()
        .map(|item| (item.clone(), sum_prob[item]))
        .collect();

    log::debug!(
        "C3 ranked {} frequent items out of a database of {} transactions",
        order.len(),
        transactions.len()
    );

    Ok(RankedItems {
        sum_prob,
        rank,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemOccurrence;

    fn tx(occs: &[(&str, f64)]) -> Transaction<String> {
        Transaction::new(
            occs.iter()
                .map(|(i, p)| ItemOccurrence::new(i.to_string(), *p).unwrap())
                .collect(),
        )
    }

    #[test]
    fn empty_database_is_an_error() {
        let result = rank_items::<String>(&[], 1.0);
        assert!(matches!(result, Err(MiningError::EmptyDatabase)));
    }

    #[test]
    fn drops_items_below_threshold() {
        let txs = vec![tx(&[("a", 0.6)]), tx(&[("a", 0.4)]), tx(&[("b", 0.9)])];
        let ranked = rank_items(&txs, 0.8).unwrap();
        assert_eq!(ranked.order, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ranked.sum_prob[&"a".to_string()], 1.0);
        assert_eq!(ranked.sum_prob[&"b".to_string()], 0.9);
    }

    #[test]
    fn ties_broken_by_first_appearance() {
        let txs = vec![tx(&[("a", 1.0), ("b", 1.0)]), tx(&[("c", 1.0)])];
        let ranked = rank_items(&txs, 1.0).unwrap();
        assert_eq!(
            ranked.order,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(ranked.rank[&"a".to_string()], 0);
        assert_eq!(ranked.rank[&"c".to_string()], 2);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        // Bypass ItemOccurrence::new's own validation to exercise C3's
        // defensive re-check against a loader that didn't validate.
        let txs = vec![Transaction::new(vec![ItemOccurrence {
            item: "a".to_string(),
            probability: 1.5,
        }])];
        let result = rank_items(&txs, 0.1);
        assert!(matches!(
            result,
            Err(MiningError::ProbabilityOutOfRange { .. })
        ));
    }
}
