/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::AwsEndpointStageError;
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{RetryConfig, SdkError};
use http::header::{AUTHORIZATION, USER_AGENT};
use http::Uri;
use lookoutvision::input::CreateProjectInput;
use lookoutvision::{Client, Config, Credentials, Endpoint, LookoutVisionErrorKind, Region};
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use smithy_tracing::{TraceEvent, TraceEventKind, TraceProbe};
use std::sync::{Arc, Mutex};
use std::time::{Duration, UNIX_EPOCH};

fn config() -> lookoutvision::config::Builder {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("akid", "secret", None))
        .idempotency_token_provider("00000000-0000-4000-8000-000000000000")
        .retry_config(RetryConfig::default().with_static_base(|| 0_f64))
}

#[derive(Debug, Default)]
struct RecordingProbe {
    events: Mutex<Vec<TraceEvent>>,
}

impl TraceProbe for RecordingProbe {
    fn dispatch_events(&self, events: &[TraceEvent]) {
        self.events.lock().unwrap().extend_from_slice(events);
    }
}

#[tokio::test]
async fn create_project_is_signed() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://lookoutvision.us-east-1.amazonaws.com/2020-11-20/projects",
            ))
            .header("content-type", "application/json")
            .header("x-amzn-client-token", "00000000-0000-4000-8000-000000000000")
            .header("x-amz-date", "20210215T184017Z")
            .body(SdkBody::from(r#"{"ProjectName":"circuit-boards"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"ProjectMetadata": {
                    "ProjectArn": "arn:aws:lookoutvision:us-east-1:123456789012:project/circuit-boards",
                    "ProjectName": "circuit-boards",
                    "CreationTimestamp": 1613414417
                }}"#,
            )
            .unwrap(),
    )]);
    let conf = config().build();
    let mut op = CreateProjectInput::builder()
        .project_name("circuit-boards")
        .build()
        .make_operation(&conf)
        .expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1613414417));
    op.properties_mut().insert(AwsUserAgent::for_tests());

    let client = aws_hyper::Client::new(conn.clone());
    let output = client.call(op).await.expect("success");
    let metadata = output.project_metadata.expect("metadata is set");
    assert_eq!(metadata.project_name.as_deref(), Some("circuit-boards"));
    assert_eq!(
        metadata.creation_timestamp.map(|ts| ts.epoch_seconds()),
        Some(1613414417)
    );

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
    let request = &conn.requests()[0].actual;
    let auth = request
        .headers()
        .get(AUTHORIZATION)
        .expect("request is signed")
        .to_str()
        .unwrap();
    assert!(auth.starts_with(
        "AWS4-HMAC-SHA256 Credential=akid/20210215/us-east-1/lookoutvision/aws4_request"
    ));
    assert!(request.headers().contains_key(USER_AGENT));
}

#[tokio::test]
async fn fluent_client_round_trip() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static(
                "https://lookoutvision.us-east-1.amazonaws.com/2020-11-20/projects/circuit-boards",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"ProjectDescription": {
                    "ProjectName": "circuit-boards",
                    "Datasets": [{"DatasetType": "train", "Status": "CREATE_COMPLETE"}]
                }}"#,
            )
            .unwrap(),
    )]);
    let probe = Arc::new(RecordingProbe::default());
    let client = Client::from_conf_conn(config().trace_probe(probe.clone()).build(), conn.clone());
    let output = client
        .describe_project()
        .project_name("circuit-boards")
        .send()
        .await
        .expect("success");
    let datasets = output
        .project_description
        .and_then(|description| description.datasets)
        .expect("datasets are set");
    assert_eq!(datasets[0].dataset_type.as_deref(), Some("train"));
    conn.assert_requests_match(&[]);

    let events = probe.events.lock().unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![TraceEventKind::Start, TraceEventKind::End]);
    assert_eq!(events[0].operation.as_deref(), Some("DescribeProject"));
    assert_eq!(events[0].service.as_deref(), Some("lookoutvision"));
}

#[tokio::test]
async fn modeled_errors_surface_as_service_errors() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "ResourceNotFoundException")
            .body(r#"{"message": "no such project", "ResourceType": "PROJECT"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config().build(), conn.clone());
    let err = client
        .delete_project()
        .project_name("missing")
        .send()
        .await
        .expect_err("project does not exist");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status().as_u16(), 404);
            assert!(matches!(
                err.kind,
                LookoutVisionErrorKind::ResourceNotFoundException(_)
            ));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn throttling_is_retried() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(SdkBody::empty()),
            http::Response::builder()
                .status(429)
                .body(r#"{"__type": "ThrottlingException", "message": "slow down"}"#)
                .unwrap(),
        ),
        (
            http::Request::new(SdkBody::empty()),
            http::Response::builder()
                .status(200)
                .body(r#"{"Projects": []}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(config().build(), conn.clone());
    let output = client
        .list_projects()
        .max_results(5)
        .send()
        .await
        .expect("second attempt succeeds");
    assert_eq!(output.projects, Some(vec![]));
    assert_eq!(conn.requests().len(), 2);
    assert_eq!(
        conn.requests()[0].actual.uri().query(),
        Some("maxResults=5")
    );
}

#[tokio::test]
async fn endpoint_override() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static(
                "http://localhost:8080/2020-11-20/tags/arn%3Aaws%3Alookoutvision%3Aus-east-1%3A123456789012%3Amodel%2Fcircuit-boards%2F1",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"Tags": [{"Key": "team", "Value": "vision"}]}"#)
            .unwrap(),
    )]);
    let conf = config()
        .endpoint_resolver(Endpoint::immutable(Uri::from_static(
            "http://localhost:8080",
        )))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let output = client
        .list_tags_for_resource()
        .resource_arn("arn:aws:lookoutvision:us-east-1:123456789012:model/circuit-boards/1")
        .send()
        .await
        .expect("success");
    assert_eq!(output.tags.map(|tags| tags.len()), Some(1));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn missing_region_fails_before_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let conf = config().region(None::<Region>).build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let err = client
        .list_projects()
        .send()
        .await
        .expect_err("no region is configured");
    match err {
        SdkError::ConstructionFailure(err) => {
            let err = err
                .downcast_ref::<AwsEndpointStageError>()
                .expect("endpoint stage error");
            assert_eq!(err.code(), "MISSING_REGION");
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}

#[tokio::test]
async fn missing_required_field_fails_before_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(config().build(), conn.clone());
    let err = client
        .describe_model()
        .project_name("circuit-boards")
        .send()
        .await
        .expect_err("ModelVersion is required");
    match err {
        SdkError::ConstructionFailure(err) => {
            let err = err.downcast_ref::<BuildError>().expect("build error");
            assert_eq!(err.code(), "MISSING_PARAMETER");
            assert!(err.to_string().contains("ModelVersion"));
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}
