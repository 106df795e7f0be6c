use thiserror::Error;

/// Errors produced by the bedtime estimation core
#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("Model failure: {reason}")]
    ModelFailure { reason: String },
}
