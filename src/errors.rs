use thiserror::Error;

pub type Result<T> = std::result::Result<T, MiningError>;

/// Errors surfaced by the PUF-tree mining core.
///
/// None of these is recovered internally: the first error encountered
/// propagates to the caller of the mining entry point, and no partial
/// output is emitted on failure.
#[derive(Error, Debug)]
pub enum MiningError {
    /// The loader could not supply the database at all.
    #[error("input unavailable: {0}")]
    InputUnavailable(String),

    /// A transaction or occurrence could not be parsed by a loader.
    ///
    /// The mining core itself never raises this - it is surfaced by
    /// the reference loader adapters when their input doesn't match
    /// the expected line format.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// The loader yielded zero transactions.
    #[error("empty database: loader produced no transactions")]
    EmptyDatabase,

    /// `minSup` is non-positive, or a fractional `minSup` falls outside `(0, 1]`.
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    /// An occurrence's probability falls outside `(0, 1]`.
    #[error("probability out of range for item {item}: {probability}")]
    ProbabilityOutOfRange { item: String, probability: f64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
