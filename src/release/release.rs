// ABOUTME: The release aggregate: one pipeline execution and its environments.
// ABOUTME: Lookup by definition falls back to the no-result sentinel.

use thiserror::Error;

use super::environment::{EnvironmentError, ReleaseEnvironment};
use super::status::ReleaseStatus;
use crate::api::ApiRelease;
use crate::error::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("id cannot be less than or equal to zero (got {0})")]
    IdNotPositive(i32),

    #[error("name cannot be empty")]
    EmptyName,
}

impl ReleaseError {
    /// Name of the constructor parameter that failed validation.
    pub fn param(&self) -> &'static str {
        match self {
            ReleaseError::IdNotPositive(_) => "id",
            ReleaseError::EmptyName => "name",
        }
    }
}

/// One versioned execution of a release pipeline across its environments.
///
/// Environments are kept in API order. Equality compares `id`, `status`, and
/// the environment count, mirroring the environment entity's contract; the
/// hash uses `id` alone.
#[derive(Debug, Clone)]
pub struct Release {
    id: i32,
    name: String,
    status: ReleaseStatus,
    environments: Vec<ReleaseEnvironment>,
}

impl Release {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        status: ReleaseStatus,
        environments: Vec<ReleaseEnvironment>,
    ) -> Result<Self, ReleaseError> {
        if id <= 0 {
            return Err(ReleaseError::IdNotPositive(id));
        }

        let name = name.into();
        if name.is_empty() {
            return Err(ReleaseError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            status,
            environments,
        })
    }

    /// Translate a raw API release record, environments included.
    pub fn from_api(raw: ApiRelease) -> Result<Self, Error> {
        tracing::debug!(id = raw.id, "translating release record");

        let environments = raw
            .environments
            .into_iter()
            .map(ReleaseEnvironment::from_api)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(raw.id, raw.name, raw.status, environments)?)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ReleaseStatus {
        self.status
    }

    /// Environments in the order the API returned them.
    pub fn environments(&self) -> &[ReleaseEnvironment] {
        &self.environments
    }

    pub fn has_environment(&self, definition_id: i32) -> bool {
        self.environment(definition_id).is_some()
    }

    /// First environment matching the definition, if the release reached it.
    pub fn environment(&self, definition_id: i32) -> Option<&ReleaseEnvironment> {
        self.environments
            .iter()
            .find(|env| env.definition_id() == definition_id)
    }

    /// Environment for the definition, or the no-result sentinel when this
    /// release never reached it. Fails only when `definition_id` itself is
    /// invalid.
    pub fn environment_or_no_result(
        &self,
        definition_id: i32,
    ) -> Result<ReleaseEnvironment, EnvironmentError> {
        match self.environment(definition_id) {
            Some(env) => Ok(env.clone()),
            None => ReleaseEnvironment::with_no_result(definition_id),
        }
    }
}

impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.status == other.status
            && self.environments.len() == other.environments.len()
    }
}

impl Eq for Release {}

// Same contract as ReleaseEnvironment: equal values hash equal, a hash match
// still requires the full comparison.
impl std::hash::Hash for Release {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
