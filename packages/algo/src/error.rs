//! Engine error taxonomy.
//!
//! All variants are data-contract violations, not transient conditions:
//! they surface immediately to the caller and are never retried or
//! silently defaulted inside the core.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// (category, difficulty) pair outside the fixed 9-cell β table.
    #[error("unknown difficulty cell ({category}, {difficulty})")]
    UnknownCell {
        category: String,
        difficulty: String,
    },

    /// Item selection over an empty candidate pool.
    #[error("candidate pool is empty")]
    EmptyPool,

    /// Observation with negative or non-finite elapsed time.
    #[error("invalid observation: {0}")]
    InvalidObservation(String),
}
