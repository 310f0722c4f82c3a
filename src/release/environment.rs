// ABOUTME: The validated, immutable release environment entity.
// ABOUTME: Equality covers id, definition, status, and attempt count; hash is id only.

use thiserror::Error;

use super::deployment::{Deployment, DeploymentError};
use super::status::EnvironmentStatus;
use crate::api::ApiReleaseEnvironment;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("id cannot be negative (got {0})")]
    NegativeId(i32),

    #[error("definition_id cannot be less than or equal to zero (got {0})")]
    DefinitionIdNotPositive(i32),

    #[error("invalid deployment record: {0}")]
    Deployment(#[from] DeploymentError),
}

impl EnvironmentError {
    /// Name of the constructor parameter that failed validation.
    pub fn param(&self) -> &'static str {
        match self {
            EnvironmentError::NegativeId(_) => "id",
            EnvironmentError::DefinitionIdNotPositive(_) => "definition_id",
            EnvironmentError::Deployment(err) => err.param(),
        }
    }
}

/// One environment instance within a release, validated at construction.
///
/// `id` identifies a specific execution of the environment; `id == 0` is the
/// sentinel for a definition that has never executed (see
/// [`ReleaseEnvironment::with_no_result`]). A changed remote state produces a
/// new value, never an in-place update.
///
/// Equality compares `id`, `definition_id`, `status`, and the *count* of
/// deployment attempts. The definition label and the attempts' contents are
/// deliberately excluded, so two fetches of the same logical environment that
/// differ only in label text or attempt detail compare equal. Hashing uses
/// `id` alone: equal values always hash equal, but a hash match does not
/// imply equality, so hash-based containers fall back to the full comparison.
#[derive(Debug, Clone)]
pub struct ReleaseEnvironment {
    id: i32,
    definition_id: i32,
    definition_name: String,
    status: EnvironmentStatus,
    deployments: Vec<Deployment>,
}

impl ReleaseEnvironment {
    /// Construct a validated environment.
    ///
    /// Fails when `id` is negative or `definition_id` is not strictly
    /// positive. The `definition_id` check applies regardless of `id`: a
    /// definition must exist even when no execution has happened.
    pub fn new(
        id: i32,
        definition_id: i32,
        definition_name: impl Into<String>,
        status: EnvironmentStatus,
        deployments: Vec<Deployment>,
    ) -> Result<Self, EnvironmentError> {
        if definition_id <= 0 {
            return Err(EnvironmentError::DefinitionIdNotPositive(definition_id));
        }

        if id < 0 {
            return Err(EnvironmentError::NegativeId(id));
        }

        Ok(Self {
            id,
            definition_id,
            definition_name: definition_name.into(),
            status,
            deployments,
        })
    }

    /// Translate a raw API record into a validated environment.
    ///
    /// This is the only seam aware of the remote schema; malformed records
    /// fail with the same errors as [`ReleaseEnvironment::new`].
    pub fn from_api(raw: ApiReleaseEnvironment) -> Result<Self, EnvironmentError> {
        tracing::debug!(
            id = raw.id,
            definition_id = raw.definition_id,
            "translating release environment record"
        );

        let deployments = raw
            .deploy_steps
            .into_iter()
            .map(Deployment::from_api)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            raw.id,
            raw.definition_id,
            raw.definition_name,
            raw.status,
            deployments,
        )
    }

    /// Synthesize the placeholder for a definition that has never executed.
    ///
    /// Lets downstream aggregation treat "never ran" uniformly with "ran and
    /// has a status" instead of threading optionals through consuming code.
    pub fn with_no_result(definition_id: i32) -> Result<Self, EnvironmentError> {
        tracing::debug!(definition_id, "synthesizing no-result environment");
        Self::new(
            0,
            definition_id,
            String::new(),
            EnvironmentStatus::Undefined,
            Vec::new(),
        )
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn definition_id(&self) -> i32 {
        self.definition_id
    }

    pub fn definition_name(&self) -> &str {
        &self.definition_name
    }

    pub fn status(&self) -> EnvironmentStatus {
        self.status
    }

    /// Deployment attempts in the order the API returned them.
    pub fn deployments(&self) -> &[Deployment] {
        &self.deployments
    }

    pub fn deployment_count(&self) -> usize {
        self.deployments.len()
    }

    /// False for the no-result sentinel, true for any real execution.
    pub fn has_result(&self) -> bool {
        self.id != 0
    }
}

impl PartialEq for ReleaseEnvironment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.definition_id == other.definition_id
            && self.status == other.status
            && self.deployments.len() == other.deployments.len()
    }
}

impl Eq for ReleaseEnvironment {}

// Hash covers a strict subset of the fields eq compares, so equal values
// always hash equal. Collisions across unequal values are expected.
impl std::hash::Hash for ReleaseEnvironment {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
