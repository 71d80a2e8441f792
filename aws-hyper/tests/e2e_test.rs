/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::partition::endpoint::{Metadata, Protocol, SignatureVersion};
use aws_endpoint::{set_endpoint_resolver, AwsEndpointStageError};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseStrictResponse;
use smithy_tracing::{TraceEvent, TraceEventKind, TraceProbe};
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, UNIX_EPOCH};

#[derive(Debug)]
struct TestError {
    status: u16,
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed with status {}", self.status)
    }
}

impl Error for TestError {}

impl ProvideErrorKind for TestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        if self.status >= 500 {
            Some(ErrorKind::ServerError)
        } else {
            None
        }
    }

    fn code(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, TestError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            Err(TestError {
                status: response.status().as_u16(),
            })
        }
    }
}

fn test_operation(
    region: Option<&'static str>,
) -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/2020-11-20/projects")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(Metadata {
                uri_template: "test-service.{region}.amazonaws.com",
                protocol: Protocol::Https,
                credential_scope: Default::default(),
                signature_versions: SignatureVersion::V4,
            }),
        );
        aws_auth::set_provider(
            conf,
            Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
        );
        if let Some(region) = region {
            conf.insert(Region::new(region));
        }
        conf.insert(SigningService::from_static("test-service"));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
        conf.insert(AwsUserAgent::for_tests());
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(operation::Metadata::new("CreateProject", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
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

fn no_backoff() -> RetryConfig {
    RetryConfig::default().with_static_base(|| 0_f64)
}

#[tokio::test]
async fn e2e_test() {
    let expected_req = http::Request::builder()
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0",
        )
        .header("x-amz-date", "20210215T184017Z")
        .method("POST")
        .uri(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/2020-11-20/projects",
        ))
        .body(SdkBody::from("request body"))
        .unwrap();
    let events = vec![(
        expected_req,
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation(Some("test-region"))).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
    let auth = conn.requests()[0]
        .actual
        .headers()
        .get(AUTHORIZATION)
        .expect("request is signed")
        .to_str()
        .unwrap()
        .to_string();
    assert!(auth.starts_with(
        "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, \
         SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature="
    ));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let events = vec![
        (
            http::Request::new(SdkBody::from("request body")),
            http::Response::builder().status(500).body("boom").unwrap(),
        ),
        (
            http::Request::new(SdkBody::from("request body")),
            http::Response::builder().status(200).body("ok").unwrap(),
        ),
    ];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let resp = client
        .call(test_operation(Some("test-region")))
        .await
        .expect("second attempt succeeds");
    assert_eq!(resp, "ok");
    assert_eq!(conn.requests().len(), 2);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let events = vec![(
        http::Request::new(SdkBody::from("request body")),
        http::Response::builder().status(400).body("bad").unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    match client.call(test_operation(Some("test-region"))).await {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(err.status, 400);
            assert_eq!(raw.status().as_u16(), 400);
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn missing_region_fails_before_dispatch() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let probe = Arc::new(RecordingProbe::default());
    let client = Client::new(conn.clone()).with_trace_probe(probe.clone());
    let err = client
        .call(test_operation(None))
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
    let events = probe.events.lock().unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![TraceEventKind::Start, TraceEventKind::Error]);
    assert_eq!(events[1].attribute("error_kind"), Some("ConstructionFailure"));
}

#[tokio::test]
async fn trace_probe_sees_start_and_end() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::from("request body")),
        http::Response::builder().status(200).body("ok").unwrap(),
    )]);
    let probe = Arc::new(RecordingProbe::default());
    let client = Client::new(conn).with_trace_probe(probe.clone());
    client
        .call(test_operation(Some("test-region")))
        .await
        .expect("success");
    let events = probe.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, TraceEventKind::Start);
    assert_eq!(events[0].operation.as_deref(), Some("CreateProject"));
    assert_eq!(events[0].service.as_deref(), Some("test-service"));
    assert_eq!(events[1].kind, TraceEventKind::End);
    assert_eq!(events[1].attribute("status"), Some("200"));
}

#[tokio::test]
async fn dispatch_failures_are_retried() {
    let (svc, mut handle) =
        tower_test::mock::pair::<http::Request<SdkBody>, http::Response<SdkBody>>();
    let client = Client::new(svc).with_retry_config(no_backoff());
    let server = async move {
        let (_, send_response) = handle.next_request().await.expect("first attempt");
        send_response.send_error("connection reset");
        let (req, send_response) = handle.next_request().await.expect("second attempt");
        assert!(req.headers().contains_key(AUTHORIZATION));
        send_response.send_response(http::Response::new(SdkBody::from("recovered")));
    };
    let (result, _) = tokio::join!(client.call(test_operation(Some("test-region"))), server);
    assert_eq!(result.expect("retried after dispatch failure"), "recovered");
}
