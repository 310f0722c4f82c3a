// ABOUTME: Unvalidated boundary structs deserialized from the remote API.
// ABOUTME: Optional fields default so upstream schema drift is absorbed here.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::release::{DeploymentStatus, EnvironmentStatus, ReleaseStatus};

/// Raw release record. Validation happens in `Release::from_api`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRelease {
    pub id: i32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub status: ReleaseStatus,

    #[serde(default)]
    pub environments: Vec<ApiReleaseEnvironment>,
}

/// Raw environment record. Validation happens in `ReleaseEnvironment::from_api`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReleaseEnvironment {
    pub id: i32,

    pub definition_id: i32,

    #[serde(default)]
    pub definition_name: String,

    #[serde(default)]
    pub status: EnvironmentStatus,

    #[serde(default)]
    pub deploy_steps: Vec<ApiDeployment>,
}

/// Raw deployment attempt record nested under an environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeployment {
    pub id: i32,

    pub attempt: i32,

    #[serde(default)]
    pub status: DeploymentStatus,

    #[serde(default)]
    pub last_modified_on: DateTime<Utc>,
}
