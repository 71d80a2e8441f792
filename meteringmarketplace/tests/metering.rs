/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{RetryConfig, SdkError};
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::Uri;
use meteringmarketplace::input::{BatchMeterUsageInput, MeterUsageInput, ResolveCustomerInput};
use meteringmarketplace::model::{Tag, UsageAllocation, UsageRecord, UsageRecordResultStatus};
use meteringmarketplace::operation::{BatchMeterUsage, RegisterUsage};
use meteringmarketplace::{Client, Config, Credentials, MeteringErrorKind, Region};
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use smithy_types::Instant;
use std::time::{Duration, UNIX_EPOCH};

fn config() -> meteringmarketplace::config::Builder {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("akid", "secret", None))
        .retry_config(RetryConfig::default().with_static_base(|| 0_f64))
}

fn body(request: &http::Request<SdkBody>) -> &[u8] {
    request.body().bytes().expect("body is in memory")
}

#[test]
fn meter_usage_request() {
    let op = MeterUsageInput::builder()
        .product_code("prod-1234")
        .timestamp(Instant::from_epoch_seconds(1613414417))
        .usage_dimension("hosts")
        .usage_quantity(3)
        .usage_allocations(vec![UsageAllocation::builder()
            .allocated_usage_quantity(3)
            .tags(vec![Tag::builder().key("team").value("metering").build()])
            .build()])
        .build()
        .make_operation(&config().build())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "AWSMPMeteringService.MeterUsage"),
        ],
    ));
    assert_ok(validate_body(
        body(request),
        r#"{
            "ProductCode": "prod-1234",
            "Timestamp": 1613414417,
            "UsageDimension": "hosts",
            "UsageQuantity": 3,
            "UsageAllocations": [
                {"AllocatedUsageQuantity": 3, "Tags": [{"Key": "team", "Value": "metering"}]}
            ]
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn dry_run_false_is_sent() {
    let op = MeterUsageInput::builder()
        .product_code("prod-1234")
        .timestamp(Instant::from_epoch_seconds(1613414417))
        .usage_dimension("hosts")
        .dry_run(false)
        .build()
        .make_operation(&config().build())
        .expect("valid operation");
    assert_ok(validate_body(
        body(op.request().http()),
        r#"{"ProductCode": "prod-1234", "Timestamp": 1613414417, "UsageDimension": "hosts", "DryRun": false}"#,
        MediaType::Json,
    ));
}

#[test]
fn required_fields_are_checked_in_order() {
    let err = MeterUsageInput::builder()
        .product_code("prod-1234")
        .build()
        .make_operation(&config().build())
        .expect_err("Timestamp and UsageDimension are missing");
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "Timestamp"),
        other => panic!("expected a missing field error, got {:?}", other),
    }

    // an empty list is set
    BatchMeterUsageInput::builder()
        .product_code("prod-1234")
        .usage_records(vec![])
        .build()
        .make_operation(&config().build())
        .expect("empty records are set");
}

#[test]
fn batch_results() {
    let output = BatchMeterUsage::new()
        .parse(
            &http::Response::builder()
                .status(200)
                .body(Bytes::from_static(
                    br#"{
                        "Results": [
                            {"UsageRecord": {"Timestamp": 1613414417, "CustomerIdentifier": "c-1", "Dimension": "users", "Quantity": 2},
                             "MeteringRecordId": "rec-1",
                             "Status": "Success"},
                            {"MeteringRecordId": "rec-2", "Status": "Paused"}
                        ],
                        "UnprocessedRecords": []
                    }"#,
                ))
                .unwrap(),
        )
        .expect("valid response");
    let results = output.results.expect("results are set");
    assert_eq!(results[0].status, Some(UsageRecordResultStatus::Success));
    let record = results[0].usage_record.as_ref().expect("record is set");
    assert_eq!(record.quantity, Some(2));
    assert_eq!(
        record.timestamp.map(|ts| ts.epoch_seconds()),
        Some(1613414417)
    );
    let unknown = results[1].status.expect("status is set");
    assert_eq!(unknown.as_str(), "Paused");
    assert_eq!(output.unprocessed_records, Some(Vec::<UsageRecord>::new()));
}

#[test]
fn aws_json_error_codes() {
    let err = RegisterUsage::new()
        .parse(
            &http::Response::builder()
                .status(400)
                .body(Bytes::from_static(
                    br#"{"__type": "com.amazonaws.marketplace.metering#InvalidPublicKeyVersionException", "message": "version 3 is not valid"}"#,
                ))
                .unwrap(),
        )
        .expect_err("invalid key version");
    assert!(err.is_invalid_public_key_version_exception());
    assert_eq!(err.message(), Some("version 3 is not valid"));
    assert!(!err.is_retryable());

    let err = RegisterUsage::new()
        .parse(
            &http::Response::builder()
                .status(500)
                .body(Bytes::from_static(
                    br#"{"__type": "InternalServiceErrorException", "message": "oops"}"#,
                ))
                .unwrap(),
        )
        .expect_err("server error");
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
}

#[tokio::test]
async fn resolve_customer_is_signed() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://metering.marketplace.us-east-1.amazonaws.com/",
            ))
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSMPMeteringService.ResolveCustomer")
            .header("x-amz-date", "20210215T184017Z")
            .body(SdkBody::from(r#"{"RegistrationToken":"token-1"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"CustomerIdentifier": "c-1", "ProductCode": "prod-1234", "CustomerAWSAccountId": "123456789012"}"#,
            )
            .unwrap(),
    )]);
    let mut op = ResolveCustomerInput::builder()
        .registration_token("token-1")
        .build()
        .make_operation(&config().build())
        .expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1613414417));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let output = aws_hyper::Client::new(conn.clone())
        .call(op)
        .await
        .expect("success");
    assert_eq!(output.customer_identifier.as_deref(), Some("c-1"));
    assert_eq!(
        output.customer_aws_account_id.as_deref(),
        Some("123456789012")
    );
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
        "AWS4-HMAC-SHA256 Credential=akid/20210215/us-east-1/aws-marketplace/aws4_request"
    ));
}

#[tokio::test]
async fn throttling_is_retried() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(SdkBody::empty()),
            http::Response::builder()
                .status(400)
                .body(r#"{"__type": "ThrottlingException", "message": "slow down"}"#)
                .unwrap(),
        ),
        (
            http::Request::new(SdkBody::empty()),
            http::Response::builder()
                .status(200)
                .body(r#"{"MeteringRecordId": "rec-1"}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(config().build(), conn.clone());
    let output = client
        .meter_usage()
        .product_code("prod-1234")
        .timestamp(Instant::from_epoch_seconds(1613414417))
        .usage_dimension("hosts")
        .send()
        .await
        .expect("second attempt succeeds");
    assert_eq!(output.metering_record_id.as_deref(), Some("rec-1"));
    assert_eq!(conn.requests().len(), 2);
}

#[tokio::test]
async fn entitlement_errors_are_not_retried() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "CustomerNotEntitledException")
            .body(r#"{"message": "not subscribed"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config().build(), conn.clone());
    let err = client
        .register_usage()
        .product_code("prod-1234")
        .public_key_version(1)
        .send()
        .await
        .expect_err("customer is not entitled");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(
                err.kind,
                MeteringErrorKind::CustomerNotEntitledException(_)
            ));
            assert_eq!(
                err.to_string(),
                "CustomerNotEntitledException: not subscribed"
            );
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}
