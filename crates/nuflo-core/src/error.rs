//! Error types for deployment generation.

use thiserror::Error;

/// Failure while sampling well or gateway coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no rural areas configured to sample from")]
    NoRuralAreas,
    #[error("no land point found after {attempts} attempts")]
    LandSamplingExhausted { attempts: usize },
}

/// Failure while flagging wells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("cannot flag {requested} wells out of {available}")]
    TooManyAlerts { requested: usize, available: usize },
}

/// Any failure from building a full deployment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
