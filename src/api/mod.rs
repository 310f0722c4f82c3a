// ABOUTME: Raw record types mirroring the release-management API's JSON schema.
// ABOUTME: All external-format assumptions are isolated in this module.

mod models;

pub use models::{ApiDeployment, ApiRelease, ApiReleaseEnvironment};

use crate::error::{Error, Result};

/// Parse a raw release payload as returned by the remote service.
pub fn parse_release(json: &str) -> Result<ApiRelease> {
    serde_json::from_str(json).map_err(Error::from)
}

/// Parse a single raw environment payload.
pub fn parse_environment(json: &str) -> Result<ApiReleaseEnvironment> {
    serde_json::from_str(json).map_err(Error::from)
}
