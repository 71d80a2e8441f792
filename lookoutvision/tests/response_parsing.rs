/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use lookoutvision::model::{ModelHostingStatus, ModelStatus, ResourceType};
use lookoutvision::operation::{DeleteDataset, DescribeModel, ListProjects, StartModel};
use lookoutvision::LookoutVisionErrorKind;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "req-1234")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn list_projects_output() {
    let output = ListProjects::new()
        .parse(&response(
            200,
            r#"{
                "Projects": [
                    {"ProjectArn": "arn:aws:lookoutvision:us-east-1:123456789012:project/circuit-boards",
                     "ProjectName": "circuit-boards",
                     "CreationTimestamp": 1613414417.5}
                ],
                "NextToken": "page-2"
            }"#,
        ))
        .expect("valid response");
    let projects = output.projects.expect("projects are set");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].project_name.as_deref(), Some("circuit-boards"));
    let created = projects[0].creation_timestamp.expect("timestamp is set");
    assert_eq!(created.epoch_fractional_seconds(), 1613414417.5);
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
}

#[test]
fn empty_list_is_distinct_from_unset() {
    let output = ListProjects::new()
        .parse(&response(200, r#"{"Projects": []}"#))
        .expect("valid response");
    assert_eq!(output.projects, Some(vec![]));
    assert_eq!(output.next_token, None);
}

#[test]
fn empty_success_body() {
    DeleteDataset::new()
        .parse(&response(200, ""))
        .expect("no output members");
}

#[test]
fn unknown_enum_values_are_preserved() {
    let output = DescribeModel::new()
        .parse(&response(
            200,
            r#"{"ModelDescription": {"ModelVersion": "1", "Status": "QUARANTINED"}}"#,
        ))
        .expect("valid response");
    let status = output
        .model_description
        .and_then(|description| description.status)
        .expect("status is set");
    assert!(matches!(status, ModelStatus::Unknown(_)));
    assert_eq!(status.as_str(), "QUARANTINED");
    assert_eq!(ModelStatus::from("QUARANTINED"), status);

    let output = StartModel::new()
        .parse(&response(200, r#"{"Status": "STARTING_HOSTING"}"#))
        .expect("valid response");
    assert_eq!(output.status, Some(ModelHostingStatus::StartingHosting));
}

#[test]
fn modeled_error() {
    let err = DescribeModel::new()
        .parse(
            &http::Response::builder()
                .status(404)
                .header("x-amzn-errortype", "ResourceNotFoundException")
                .header("x-amzn-requestid", "req-1234")
                .body(Bytes::from_static(
                    br#"{"message": "model 7 does not exist", "ResourceId": "7", "ResourceType": "MODEL"}"#,
                ))
                .unwrap(),
        )
        .expect_err("not found");
    assert!(err.is_resource_not_found_exception());
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("model 7 does not exist"));
    assert_eq!(err.request_id(), Some("req-1234"));
    assert!(!err.is_retryable());
    assert_eq!(
        err.to_string(),
        "ResourceNotFoundException: model 7 does not exist"
    );
    match err.kind {
        LookoutVisionErrorKind::ResourceNotFoundException(inner) => {
            assert_eq!(inner.resource_id.as_deref(), Some("7"));
            assert_eq!(inner.resource_type, Some(ResourceType::Model));
        }
        other => panic!("unexpected error kind {:?}", other),
    }
}

#[test]
fn throttling_carries_retry_after() {
    let err = ListProjects::new()
        .parse(
            &http::Response::builder()
                .status(429)
                .header("Retry-After", "5")
                .body(Bytes::from_static(
                    br#"{"__type": "ThrottlingException", "Message": "slow down", "QuotaCode": "q-1"}"#,
                ))
                .unwrap(),
        )
        .expect_err("throttled");
    assert!(err.is_retryable());
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
    match &err.kind {
        LookoutVisionErrorKind::ThrottlingException(inner) => {
            assert_eq!(inner.retry_after_seconds, Some(5));
            assert_eq!(inner.quota_code.as_deref(), Some("q-1"));
            assert_eq!(inner.message(), Some("slow down"));
        }
        other => panic!("unexpected error kind {:?}", other),
    }
}

#[test]
fn internal_server_errors_are_retryable() {
    let err = ListProjects::new()
        .parse(&response(
            500,
            r#"{"code": "InternalServerException", "message": "try again"}"#,
        ))
        .expect_err("server error");
    assert!(err.is_internal_server_exception());
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
}

#[test]
fn unknown_error_codes_are_unhandled() {
    let err = ListProjects::new()
        .parse(&response(
            400,
            r#"{"__type": "aws.lookoutvision#BrandNewException:http://internal", "message": "new"}"#,
        ))
        .expect_err("client error");
    assert!(matches!(err.kind, LookoutVisionErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("BrandNewException"));
    assert_eq!(err.message(), Some("new"));
    assert!(!err.is_retryable());
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = ListProjects::new()
        .parse(&response(200, r#"{"Projects": "not-a-list"}"#))
        .expect_err("invalid body");
    assert!(matches!(err.kind, LookoutVisionErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

#[test]
fn retryable_flag_matches_retry_policy() {
    use aws_http::AwsErrorRetryPolicy;
    use lookoutvision::operation::DescribeProject;
    use lookoutvision::output::DescribeProjectOutput;
    use smithy_http::body::SdkBody;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::RetryKind;

    let cases = [
        (503, ""),
        (502, "<html>bad gateway</html>"),
        (400, r#"{"__type": "SlowDown", "message": "easy"}"#),
        (408, r#"{"__type": "RequestTimeout"}"#),
        (429, r#"{"__type": "ThrottlingException"}"#),
        (400, r#"{"__type": "ValidationException", "message": "bad"}"#),
        (403, r#"{"__type": "AccessDeniedException"}"#),
    ];
    for (status, body) in cases.iter() {
        let err = DescribeProject::new()
            .parse(&response(*status, *body))
            .expect_err("error response");
        let err = SdkError::ServiceError {
            raw: http::Response::builder()
                .status(*status)
                .body(SdkBody::from(*body))
                .unwrap(),
            err,
        };
        let policy = AwsErrorRetryPolicy::new()
            .classify(Err::<&SdkSuccess<DescribeProjectOutput>, _>(&err));
        assert_eq!(
            policy != RetryKind::NotRetryable,
            err.is_retryable(),
            "status {} body {}",
            status,
            body
        );
    }

    let slow_down = DescribeProject::new()
        .parse(&response(400, r#"{"__type": "SlowDown"}"#))
        .expect_err("throttled");
    assert!(slow_down.is_retryable());
}
