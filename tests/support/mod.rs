// ABOUTME: Test support utilities.
// ABOUTME: Builds deterministic deployment attempt fixtures.

use chrono::{DateTime, TimeZone, Utc};
use relmon::release::{Deployment, DeploymentStatus};

// Each test binary only uses some of these helpers, so allow dead_code.

#[allow(dead_code)]
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

/// Build `count` successful deployment attempts sharing one timestamp.
#[allow(dead_code)]
pub fn deployments(count: usize) -> Vec<Deployment> {
    deployments_at(count, timestamp())
}

#[allow(dead_code)]
pub fn deployments_at(count: usize, at: DateTime<Utc>) -> Vec<Deployment> {
    (1..=count as i32)
        .map(|n| {
            Deployment::new(n * 100, n, DeploymentStatus::Succeeded, at)
                .expect("fixture deployment is valid")
        })
        .collect()
}
