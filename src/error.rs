// ABOUTME: Application-wide error types for relmon.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::release::{DeploymentError, EnvironmentError, ReleaseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid environment: {0}")]
    Environment(#[from] EnvironmentError),

    #[error("invalid deployment: {0}")]
    Deployment(#[from] DeploymentError),

    #[error("invalid release: {0}")]
    Release(#[from] ReleaseError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
