use crate::errors::{MiningError, Result};
use serde::{Deserialize, Serialize};

/// `minSup` as the caller means it: either an absolute transaction
/// count, or a proportion of the database size that C3 resolves to an
/// absolute count once it has observed `|DB|`.
///
/// The reference PUF implementation infers this distinction at parse
/// time by sniffing whether the user's CLI string contains a `.`; the
/// core has no such string to sniff (that parsing is the out-of-scope
/// CLI collaborator's job), so callers pick a variant explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MinSupport {
    /// `minSup` is already an absolute count of transactions.
    Absolute(f64),
    /// `minSup` is a proportion of the database size in `(0, 1]`,
    /// converted to an absolute count as `fraction * |DB|`.
    Fraction(f64),
}

impl MinSupport {
    pub fn validate(&self) -> Result<()> {
        match self {
            MinSupport::Absolute(v) if *v <= 0.0 => Err(MiningError::InvalidThreshold(format!(
                "absolute minSup must be positive, got {v}"
            ))),
            MinSupport::Fraction(f) if *f <= 0.0 || *f > 1.0 => {
                Err(MiningError::InvalidThreshold(format!(
                    "fractional minSup must lie in (0, 1], got {f}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Resolve to an absolute count given the observed database size.
    pub fn resolve(&self, database_size: usize) -> f64 {
        match self {
            MinSupport::Absolute(v) => *v,
            MinSupport::Fraction(f) => f * database_size as f64,
        }
    }
}

/// Mining configuration for the PUF-tree core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningConfig {
    /// The expected-support threshold an itemset must meet to be emitted.
    pub min_support: MinSupport,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Fraction(0.1),
        }
    }
}
