use thiserror::Error;

/// Errors originating from the core computation engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid iteration budget: {0} (must be >= 1)")]
    InvalidBudget(u32),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}
