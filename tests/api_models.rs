// ABOUTME: Integration tests for the raw API boundary types.
// ABOUTME: Verifies camelCase payload parsing and translation into entities.

use chrono::{TimeZone, Utc};
use relmon::api::{parse_environment, parse_release};
use relmon::error::Error;
use relmon::release::{
    DeploymentStatus, EnvironmentStatus, Release, ReleaseEnvironment, ReleaseStatus,
};

#[test]
fn environment_payload_parses_camel_case_fields() {
    let json = r#"{
        "id": 83429,
        "definitionId": 2349080,
        "definitionName": "Old E2E tests",
        "status": "rejected"
    }"#;

    let raw = parse_environment(json).unwrap();

    assert_eq!(raw.id, 83429);
    assert_eq!(raw.definition_id, 2349080);
    assert_eq!(raw.definition_name, "Old E2E tests");
    assert_eq!(raw.status, EnvironmentStatus::Rejected);
    assert!(raw.deploy_steps.is_empty());
}

#[test]
fn missing_optional_fields_take_defaults() {
    let json = r#"{"id": 12, "definitionId": 7}"#;

    let raw = parse_environment(json).unwrap();

    assert_eq!(raw.definition_name, "");
    assert_eq!(raw.status, EnvironmentStatus::Undefined);
    assert!(raw.deploy_steps.is_empty());
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{
        "id": 12,
        "definitionId": 7,
        "status": "inProgress",
        "rank": 3,
        "owner": {"displayName": "release bot"}
    }"#;

    let raw = parse_environment(json).unwrap();
    assert_eq!(raw.status, EnvironmentStatus::InProgress);
}

#[test]
fn deploy_steps_parse_in_order() {
    let json = r#"{
        "id": 555,
        "definitionId": 42,
        "definitionName": "ARM32",
        "status": "partiallySucceeded",
        "deploySteps": [
            {"id": 900, "attempt": 1, "status": "failed",
             "lastModifiedOn": "2024-05-17T09:30:00Z"},
            {"id": 901, "attempt": 2, "status": "succeeded",
             "lastModifiedOn": "2024-05-17T10:05:00Z"}
        ]
    }"#;

    let env = ReleaseEnvironment::from_api(parse_environment(json).unwrap()).unwrap();

    assert_eq!(env.deployment_count(), 2);
    let first = &env.deployments()[0];
    assert_eq!(first.id(), 900);
    assert_eq!(first.attempt(), 1);
    assert_eq!(first.status(), DeploymentStatus::Failed);
    assert_eq!(
        first.last_modified_on(),
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    );
    let second = &env.deployments()[1];
    assert_eq!(second.attempt(), 2);
    assert_eq!(second.status(), DeploymentStatus::Succeeded);
}

#[test]
fn malformed_payload_is_a_json_error() {
    let err = parse_environment("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn invalid_deploy_step_fails_translation() {
    let json = r#"{
        "id": 555,
        "definitionId": 42,
        "deploySteps": [{"id": 900, "attempt": 0}]
    }"#;

    let err = ReleaseEnvironment::from_api(parse_environment(json).unwrap()).unwrap_err();
    assert_eq!(err.param(), "attempt");
}

#[test]
fn release_payload_translates_end_to_end() {
    let json = r#"{
        "id": 510,
        "name": "release-1.4.8",
        "status": "active",
        "environments": [
            {"id": 3242, "definitionId": 343406, "definitionName": "Linux AMD64",
             "status": "succeeded",
             "deploySteps": [{"id": 900, "attempt": 1, "status": "succeeded",
                              "lastModifiedOn": "2024-05-17T09:30:00Z"}]},
            {"id": 9708, "definitionId": 84893, "definitionName": "Linux ARM32",
             "status": "queued"}
        ]
    }"#;

    let release = Release::from_api(parse_release(json).unwrap()).unwrap();

    assert_eq!(release.id(), 510);
    assert_eq!(release.name(), "release-1.4.8");
    assert_eq!(release.status(), ReleaseStatus::Active);
    assert_eq!(release.environments().len(), 2);
    assert_eq!(
        release.environment(343406).unwrap().status(),
        EnvironmentStatus::Succeeded
    );
    assert_eq!(release.environment(84893).unwrap().deployment_count(), 0);
}

#[test]
fn release_with_invalid_environment_fails_translation() {
    let json = r#"{
        "id": 510,
        "name": "release-1.4.8",
        "environments": [{"id": -1, "definitionId": 343406}]
    }"#;

    let err = Release::from_api(parse_release(json).unwrap()).unwrap_err();
    assert!(matches!(err, Error::Environment(_)));
}
