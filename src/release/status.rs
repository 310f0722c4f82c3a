// ABOUTME: Status enums for releases, environments, and deployment attempts.
// ABOUTME: Wire values follow the release-management API's camelCase scheme.

use serde::{Deserialize, Serialize};

/// Status of one environment instance within a release.
///
/// `Undefined` doubles as the sentinel status for environments that have
/// never produced a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvironmentStatus {
    #[default]
    Undefined,
    NotStarted,
    Queued,
    Scheduled,
    InProgress,
    Succeeded,
    PartiallySucceeded,
    Rejected,
    Canceled,
}

impl std::fmt::Display for EnvironmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentStatus::Undefined => write!(f, "undefined"),
            EnvironmentStatus::NotStarted => write!(f, "not started"),
            EnvironmentStatus::Queued => write!(f, "queued"),
            EnvironmentStatus::Scheduled => write!(f, "scheduled"),
            EnvironmentStatus::InProgress => write!(f, "in progress"),
            EnvironmentStatus::Succeeded => write!(f, "succeeded"),
            EnvironmentStatus::PartiallySucceeded => write!(f, "partially succeeded"),
            EnvironmentStatus::Rejected => write!(f, "rejected"),
            EnvironmentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Status of a single deployment attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeploymentStatus {
    #[default]
    Undefined,
    NotDeployed,
    InProgress,
    Succeeded,
    PartiallySucceeded,
    Failed,
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentStatus::Undefined => write!(f, "undefined"),
            DeploymentStatus::NotDeployed => write!(f, "not deployed"),
            DeploymentStatus::InProgress => write!(f, "in progress"),
            DeploymentStatus::Succeeded => write!(f, "succeeded"),
            DeploymentStatus::PartiallySucceeded => write!(f, "partially succeeded"),
            DeploymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Lifecycle status of a release as reported by the remote service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReleaseStatus {
    #[default]
    Undefined,
    Draft,
    Active,
    Abandoned,
}

impl std::fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseStatus::Undefined => write!(f, "undefined"),
            ReleaseStatus::Draft => write!(f, "draft"),
            ReleaseStatus::Active => write!(f, "active"),
            ReleaseStatus::Abandoned => write!(f, "abandoned"),
        }
    }
}
