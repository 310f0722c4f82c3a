// ABOUTME: Validated release pipeline entities and their status enums.
// ABOUTME: All values are immutable once constructed; re-fetches build new values.

mod deployment;
mod environment;
mod release;
mod status;

pub use deployment::{Deployment, DeploymentError};
pub use environment::{EnvironmentError, ReleaseEnvironment};
pub use release::{Release, ReleaseError};
pub use status::{DeploymentStatus, EnvironmentStatus, ReleaseStatus};
