//! The mining pipeline: C3 (rank) -> C4 (rewrite) -> C5 (tree) -> C6
//! (extractor) -> C7 (candidates) -> C8 (verifier).

pub mod candidates;
pub mod extractor;
pub mod rank;
pub mod rewrite;
pub mod tree;
pub mod verifier;

use crate::config::MiningConfig;
use crate::errors::Result;
use crate::item::Transaction;
use crate::stats::MiningStats;
use crate::types::FrequentPattern;
use candidates::CandidateSet;
use std::hash::Hash;

/// Mine every itemset in `transactions` whose expected support meets
/// `config.min_support`, together with that expected support.
///
/// The single pure entry point the mining core contracts to provide:
/// `(database, minSup) -> patterns`. No process-wide state is read or
/// written; the same inputs always produce the same output.
pub fn mine_frequent_patterns<I>(
    transactions: &[Transaction<I>],
    config: &MiningConfig,
) -> Result<Vec<FrequentPattern<I>>>
where
    I: Clone + Eq + Hash + std::fmt::Debug,
{
    run_pipeline(transactions, config).map(|(patterns, _)| patterns)
}

/// Runs the full pipeline and returns both the mined patterns and the
/// statistics gathered along the way. `mine_frequent_patterns` and
/// `PufMiner::mine` are both thin wrappers over this.
fn run_pipeline<I>(
    transactions: &[Transaction<I>],
    config: &MiningConfig,
) -> Result<(Vec<FrequentPattern<I>>, MiningStats)>
where
    I: Clone + Eq + Hash + std::fmt::Debug,
{
    let mut stats = MiningStats::new();
    stats.transactions_processed = transactions.len();

    config.min_support.validate()?;
    let min_support = config.min_support.resolve(transactions.len());

    let ranked = rank::rank_items(transactions, min_support)?;
    stats.frequent_items_count = ranked.order.len();

    // OQ-4: seed singletons directly from C3's summed probabilities.
    // The tree never sees transactions shorter than 2 items, so it
    // cannot reproduce an exact singleton support on its own.
    let mut candidates = CandidateSet::new();
    for item in &ranked.order {
        candidates.insert(vec![item.clone()], ranked.sum_prob[item], &ranked.rank);
    }

    let rewritten = rewrite::rewrite_transactions(transactions, &ranked.rank);
    log::debug!(
        "C4 rewrote {} of {} transactions into multi-item paths",
        rewritten.len(),
        transactions.len()
    );

    let mut main_tree = tree::PufTree::new();
    for occurrences in &rewritten {
        main_tree.insert_ranked_transaction(occurrences);
    }
    main_tree.recompute_info();

    extractor::generate_patterns(&mut main_tree, &[], min_support, &ranked.rank, &mut candidates);
    stats.candidates_generated = candidates.len();
    log::debug!("C6/C7 produced {} candidate patterns", candidates.len());

    let before = candidates.len();
    let verified = verifier::verify(transactions, &candidates, min_support);
    stats.false_positives_pruned = before.saturating_sub(verified.len());
    log::debug!(
        "C8 pruned {} false positives, {} patterns remain",
        stats.false_positives_pruned,
        verified.len()
    );

    let mut patterns: Vec<FrequentPattern<I>> = verified
        .into_iter()
        .map(|(items, expected_support)| FrequentPattern {
            items,
            expected_support,
        })
        .collect();

    patterns.sort_by(|a, b| {
        let rank_a: Vec<usize> = a.items.iter().map(|it| ranked.rank[it]).collect();
        let rank_b: Vec<usize> = b.items.iter().map(|it| ranked.rank[it]).collect();
        rank_a.cmp(&rank_b)
    });

    stats.patterns_emitted = patterns.len();
    Ok((patterns, stats))
}

/// An ergonomic facade over [`mine_frequent_patterns`] that accumulates
/// transactions incrementally and tracks [`MiningStats`], mirroring how
/// a caller typically wires a loader into the core.
pub struct PufMiner<I> {
    config: MiningConfig,
    transactions: Vec<Transaction<I>>,
    stats: MiningStats,
}

impl<I> PufMiner<I>
where
    I: Clone + Eq + Hash + std::fmt::Debug,
{
    pub fn new(config: MiningConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            stats: MiningStats::new(),
        }
    }

    pub fn add_transactions(&mut self, transactions: Vec<Transaction<I>>) {
        self.transactions.extend(transactions);
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn mine(&mut self) -> Result<Vec<FrequentPattern<I>>> {
        let (patterns, stats) = run_pipeline(&self.transactions, &self.config)?;
        self.stats = stats;
        Ok(patterns)
    }

    pub fn stats(&self) -> &MiningStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MinSupport;
    use crate::item::ItemOccurrence;

    fn tx(occs: &[(&str, f64)]) -> Transaction<String> {
        Transaction::new(
            occs.iter()
                .map(|(i, p)| ItemOccurrence::new(i.to_string(), *p).unwrap())
                .collect(),
        )
    }

    fn config(min_support: f64) -> MiningConfig {
        MiningConfig {
            min_support: MinSupport::Absolute(min_support),
        }
    }

    fn expect(patterns: &[FrequentPattern<String>], items: &[&str], support: f64) {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        let found = patterns
            .iter()
            .find(|p| p.items == items)
            .unwrap_or_else(|| panic!("pattern {items:?} not found in {patterns:?}"));
        assert!(
            (found.expected_support - support).abs() < 1e-9,
            "expected {support}, got {}",
            found.expected_support
        );
    }

    #[test]
    fn s1_trivial_singleton() {
        let txs = vec![tx(&[("a", 0.6)]), tx(&[("a", 0.4)]), tx(&[("b", 0.9)])];
        let patterns = mine_frequent_patterns(&txs, &config(0.8)).unwrap();
        assert_eq!(patterns.len(), 2);
        expect(&patterns, &["a"], 1.0);
        expect(&patterns, &["b"], 0.9);
    }

    #[test]
    fn s2_pair_at_threshold() {
        let txs = vec![tx(&[("a", 0.5), ("b", 0.5)]), tx(&[("a", 0.5), ("b", 0.5)])];
        let patterns = mine_frequent_patterns(&txs, &config(0.5)).unwrap();
        assert_eq!(patterns.len(), 3);
        expect(&patterns, &["a"], 1.0);
        expect(&patterns, &["b"], 1.0);
        expect(&patterns, &["a", "b"], 0.5);
    }

    #[test]
    fn s3_cap_over_approximates_verifier_rejects() {
        let txs = vec![tx(&[("a", 0.9), ("b", 0.1)]), tx(&[("a", 0.9), ("b", 0.1)])];
        let patterns = mine_frequent_patterns(&txs, &config(0.5)).unwrap();
        assert_eq!(patterns.len(), 1);
        expect(&patterns, &["a"], 1.8);
    }

    #[test]
    fn s4_three_item_pattern() {
        let txs: Vec<_> = (0..5)
            .map(|_| tx(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]))
            .collect();
        let patterns = mine_frequent_patterns(&txs, &config(4.0)).unwrap();
        assert_eq!(patterns.len(), 7);
        for items in [
            vec!["a"],
            vec!["b"],
            vec!["c"],
            vec!["a", "b"],
            vec!["a", "c"],
            vec!["b", "c"],
            vec!["a", "b", "c"],
        ] {
            expect(&patterns, &items, 5.0);
        }
    }

    #[test]
    fn s6_no_items_clear_threshold() {
        let txs = vec![tx(&[("a", 0.6)]), tx(&[("a", 0.4)]), tx(&[("b", 0.9)])];
        let patterns = mine_frequent_patterns(&txs, &config(2.0)).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn deterministic_across_repeated_runs() {
        let txs = vec![tx(&[("a", 0.5), ("b", 0.5)]), tx(&[("a", 0.5), ("b", 0.5)])];
        let a = mine_frequent_patterns(&txs, &config(0.5)).unwrap();
        let b = mine_frequent_patterns(&txs, &config(0.5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lower_threshold_yields_a_superset() {
        let txs: Vec<_> = (0..5)
            .map(|_| tx(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]))
            .collect();
        let loose = mine_frequent_patterns(&txs, &config(1.0)).unwrap();
        let strict = mine_frequent_patterns(&txs, &config(4.0)).unwrap();
        for pattern in &strict {
            assert!(loose.iter().any(|p| p.items == pattern.items));
        }
    }

    #[test]
    fn empty_database_errors() {
        let txs: Vec<Transaction<String>> = vec![];
        let result = mine_frequent_patterns(&txs, &config(1.0));
        assert!(result.is_err());
    }

    #[test]
    fn facade_tracks_stats() {
        let mut miner = PufMiner::new(config(0.5));
        miner.add_transactions(vec![tx(&[("a", 0.5), ("b", 0.5)]), tx(&[("a", 0.5), ("b", 0.5)])]);
        assert_eq!(miner.transaction_count(), 2);
        let patterns = miner.mine().unwrap();
        assert_eq!(miner.stats().patterns_emitted, patterns.len());
        assert_eq!(miner.stats().transactions_processed, 2);
        assert_eq!(miner.stats().frequent_items_count, 2);
        assert!(miner.stats().candidates_generated >= patterns.len());
    }
}
