use serde::{Deserialize, Serialize};

/// An itemset, canonicalized by ascending global item rank (OQ-6).
pub type Itemset<I> = Vec<I>;

/// A frequent pattern: an itemset paired with its true expected
/// support, as produced by the exact verifier (C8).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentPattern<I> {
    pub items: Itemset<I>,
    pub expected_support: f64,
}
