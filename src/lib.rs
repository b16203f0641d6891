//! # puf-miner
//!
//! Frequent-itemset mining over uncertain transactional databases. Each
//! transaction carries per-item existential probabilities rather than
//! plain presence/absence; an itemset's *expected support* is the sum,
//! over transactions containing it, of the product of its items'
//! probabilities. Mining finds every itemset whose expected support
//! meets a caller-supplied threshold.
//!
//! The core builds a PUF-tree (a prefix tree whose nodes carry an
//! upper-bound *cap* on expected support), mines it with an FP-growth
//! style conditional recursion, and runs a second, exact pass over the
//! database to discard the false positives the cap-based bound can
//! admit.
//!
//! ## Quick Start
//!
//! ```
//! use puf_miner::{mine_frequent_patterns, MiningConfig, MinSupport};
//! use puf_miner::item::{ItemOccurrence, Transaction};
//!
//! let transactions = vec![
//!     Transaction::new(vec![
//!         ItemOccurrence::new("bread".to_string(), 0.9).unwrap(),
//!         ItemOccurrence::new("milk".to_string(), 0.8).unwrap(),
//!     ]),
//!     Transaction::new(vec![
//!         ItemOccurrence::new("bread".to_string(), 0.7).unwrap(),
//!     ]),
//! ];
//!
//! let config = MiningConfig {
//!     min_support: MinSupport::Absolute(1.0),
//! };
//! let patterns = mine_frequent_patterns(&transactions, &config).unwrap();
//! assert!(!patterns.is_empty());
//! ```

pub mod config;
pub mod errors;
pub mod item;
pub mod loader;
pub mod mining;
pub mod sink;
pub mod stats;
pub mod types;

pub use config::{MinSupport, MiningConfig};
pub use errors::{MiningError, Result};
pub use item::{ItemOccurrence, Transaction};
pub use mining::{mine_frequent_patterns, PufMiner};
pub use stats::MiningStats;
pub use types::{FrequentPattern, Itemset};
