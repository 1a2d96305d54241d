use thiserror::Error;

/// Crate-level error type.
///
/// Scoring, categorization, and merge operations are total functions and never
/// return errors; only the persistence seam can fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
