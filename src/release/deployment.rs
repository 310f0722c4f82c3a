// ABOUTME: One deployment attempt into a release environment.
// ABOUTME: Environments keep these in API order and compare only their count.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::status::DeploymentStatus;
use crate::api::ApiDeployment;

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("id cannot be less than or equal to zero (got {0})")]
    IdNotPositive(i32),

    #[error("attempt cannot be less than or equal to zero (got {0})")]
    AttemptNotPositive(i32),
}

impl DeploymentError {
    /// Name of the constructor parameter that failed validation.
    pub fn param(&self) -> &'static str {
        match self {
            DeploymentError::IdNotPositive(_) => "id",
            DeploymentError::AttemptNotPositive(_) => "attempt",
        }
    }
}

/// A single attempt to deploy a release into an environment.
///
/// Retries produce additional attempts; the remote service reports them in
/// chronological order and this type preserves that order downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    id: i32,
    attempt: i32,
    status: DeploymentStatus,
    last_modified_on: DateTime<Utc>,
}

impl Deployment {
    pub fn new(
        id: i32,
        attempt: i32,
        status: DeploymentStatus,
        last_modified_on: DateTime<Utc>,
    ) -> Result<Self, DeploymentError> {
        if id <= 0 {
            return Err(DeploymentError::IdNotPositive(id));
        }

        if attempt <= 0 {
            return Err(DeploymentError::AttemptNotPositive(attempt));
        }

        Ok(Self {
            id,
            attempt,
            status,
            last_modified_on,
        })
    }

    /// Translate a raw API deployment record into a validated attempt.
    pub fn from_api(raw: ApiDeployment) -> Result<Self, DeploymentError> {
        Self::new(raw.id, raw.attempt, raw.status, raw.last_modified_on)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn attempt(&self) -> i32 {
        self.attempt
    }

    pub fn status(&self) -> DeploymentStatus {
        self.status
    }

    pub fn last_modified_on(&self) -> DateTime<Utc> {
        self.last_modified_on
    }
}
