use serde::{Deserialize, Serialize};

/// Observational statistics about a single mining run.
///
/// Purely informational - nothing here feeds back into the mining
/// core's behavior.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MiningStats {
    pub transactions_processed: usize,
    pub frequent_items_count: usize,
    pub candidates_generated: usize,
    pub false_positives_pruned: usize,
    pub patterns_emitted: usize,
}

impl MiningStats {
    pub fn new() -> Self {
        Self::default()
    }
}
