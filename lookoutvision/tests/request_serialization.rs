/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use lookoutvision::input::{
    CreateDatasetInput, CreateProjectInput, DeleteDatasetInput, DescribeModelInput,
    DetectAnomaliesInput, ListDatasetEntriesInput, ListProjectsInput, StartModelPackagingJobInput,
    TagResourceInput, UntagResourceInput, UpdateDatasetEntriesInput,
};
use lookoutvision::model::{
    DatasetGroundTruthManifest, DatasetSource, GreengrassConfiguration, InputS3Object,
    ModelPackagingConfiguration, S3Location, Tag, TargetPlatform, TargetPlatformAccelerator,
    TargetPlatformArch, TargetPlatformOs,
};
use lookoutvision::{Config, Region};
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, validate_body, validate_headers,
    validate_query_string, MediaType,
};
use smithy_http::operation::BuildError;
use smithy_types::{Blob, Instant};

const TOKEN: &str = "00000000-0000-4000-8000-000000000000";

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(lookoutvision::Credentials::from_keys("akid", "secret", None))
        .idempotency_token_provider(TOKEN)
        .build()
}

fn body(request: &http::Request<smithy_http::body::SdkBody>) -> &[u8] {
    request.body().bytes().expect("body is in memory")
}

#[test]
fn create_project_request() {
    let op = CreateProjectInput::builder()
        .project_name("circuit-boards")
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/2020-11-20/projects");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/json"),
            ("x-amzn-client-token", TOKEN),
        ],
    ));
    assert_ok(validate_body(
        body(request),
        r#"{"ProjectName": "circuit-boards"}"#,
        MediaType::Json,
    ));
    assert_eq!(op.metadata().map(|m| m.name()), Some("CreateProject"));
    assert_eq!(op.metadata().map(|m| m.service()), Some("lookoutvision"));
}

#[test]
fn explicit_client_token_is_kept() {
    let op = DeleteDatasetInput::builder()
        .project_name("circuit-boards")
        .dataset_type("train")
        .client_token("my-token")
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(
        request.uri(),
        "/2020-11-20/projects/circuit-boards/datasets/train"
    );
    assert_ok(validate_headers(request, &[("x-amzn-client-token", "my-token")]));
    assert_eq!(body(request), b"");
}

#[test]
fn generated_client_token_is_a_uuid() {
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .build();
    let op = DeleteDatasetInput::builder()
        .project_name("circuit-boards")
        .dataset_type("train")
        .build()
        .make_operation(&conf)
        .expect("valid operation");
    let token = op
        .request()
        .http()
        .headers()
        .get("x-amzn-client-token")
        .expect("token is generated")
        .to_str()
        .expect("ascii")
        .to_string();
    assert_eq!(token.len(), 36);
    assert_eq!(&token[14..15], "4");
}

#[test]
fn labels_are_percent_encoded() {
    let op = DescribeModelInput::builder()
        .project_name("circuit boards/v2")
        .model_version("1")
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri(),
        "/2020-11-20/projects/circuit%20boards%2Fv2/models/1"
    );
    assert_ok(forbid_headers(request, &["x-amzn-client-token", "content-type"]));
}

#[test]
fn nested_structures_are_serialized() {
    let op = CreateDatasetInput::builder()
        .project_name("circuit-boards")
        .dataset_type("train")
        .dataset_source(
            DatasetSource::builder()
                .ground_truth_manifest(
                    DatasetGroundTruthManifest::builder()
                        .s3_object(
                            InputS3Object::builder()
                                .bucket("bucket")
                                .key("manifests/train.manifest")
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(
        request.uri(),
        "/2020-11-20/projects/circuit-boards/datasets"
    );
    assert_ok(validate_body(
        body(request),
        r#"{
            "DatasetType": "train",
            "DatasetSource": {
                "GroundTruthManifest": {
                    "S3Object": {"Bucket": "bucket", "Key": "manifests/train.manifest"}
                }
            }
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn missing_label_fails_before_serialization() {
    let err = CreateDatasetInput::builder()
        .dataset_type("train")
        .build()
        .make_operation(&config())
        .expect_err("ProjectName is required");
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "ProjectName"),
        other => panic!("expected a missing field error, got {:?}", other),
    }
}

#[test]
fn missing_query_list_fails() {
    let err = UntagResourceInput::builder()
        .resource_arn("arn:aws:lookoutvision:us-east-1:123456789012:model/circuit-boards/1")
        .build()
        .make_operation(&config())
        .expect_err("TagKeys is required");
    assert_eq!(err.code(), "MISSING_PARAMETER");
    assert!(!err.is_retryable());
}

#[test]
fn untag_repeats_tag_keys() {
    let op = UntagResourceInput::builder()
        .resource_arn("arn:aws:lookoutvision:us-east-1:123456789012:model/circuit-boards/1")
        .tag_keys(vec!["team".to_string(), "cost center".to_string()])
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert!(request
        .uri()
        .path()
        .starts_with("/2020-11-20/tags/arn%3Aaws%3Alookoutvision"));
    assert_ok(validate_query_string(
        request,
        &["tagKeys=team", "tagKeys=cost%20center"],
    ));
}

#[test]
fn list_dataset_entries_query() {
    let op = ListDatasetEntriesInput::builder()
        .project_name("circuit-boards")
        .dataset_type("test")
        .labeled(true)
        .anomaly_class("scratch")
        .before_creation_date(Instant::from_epoch_seconds(1613414417))
        .max_results(10)
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(
        request.uri().path(),
        "/2020-11-20/projects/circuit-boards/datasets/test/entries"
    );
    assert_ok(validate_query_string(
        request,
        &[
            "labeled=true",
            "anomalyClass=scratch",
            "createdBefore=2021-02-15T18%3A40%3A17Z",
            "maxResults=10",
        ],
    ));
    assert_ok(forbid_query_params(
        request,
        &["createdAfter", "nextToken", "sourceRefContains"],
    ));
}

#[test]
fn list_projects_without_query() {
    let op = ListProjectsInput::builder()
        .build()
        .make_operation(&config())
        .expect("valid operation");
    assert_eq!(op.request().http().uri(), "/2020-11-20/projects");
}

#[test]
fn detect_anomalies_sends_raw_image() {
    let op = DetectAnomaliesInput::builder()
        .project_name("circuit-boards")
        .model_version("1")
        .content_type("image/jpeg")
        .body(Blob::new(b"\xff\xd8\xff\xe0".to_vec()))
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(
        request.uri(),
        "/2020-11-20/projects/circuit-boards/models/1/detect"
    );
    assert_ok(validate_headers(request, &[("content-type", "image/jpeg")]));
    assert_eq!(body(request), b"\xff\xd8\xff\xe0");
}

#[test]
fn update_dataset_entries_base64_changes() {
    let op = UpdateDatasetEntriesInput::builder()
        .project_name("circuit-boards")
        .dataset_type("train")
        .changes(Blob::new(b"{\"source-ref\": \"s3://bucket/a.jpg\"}".to_vec()))
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "PATCH");
    assert_ok(validate_body(
        body(request),
        r#"{"Changes": "eyJzb3VyY2UtcmVmIjogInMzOi8vYnVja2V0L2EuanBnIn0="}"#,
        MediaType::Json,
    ));
}

#[test]
fn packaging_job_configuration() {
    let op = StartModelPackagingJobInput::builder()
        .project_name("circuit-boards")
        .model_version("1")
        .job_name("package-1")
        .configuration(
            ModelPackagingConfiguration::builder()
                .greengrass(
                    GreengrassConfiguration::builder()
                        .compiler_options("{\"gpu-code\": \"sm_75\"}")
                        .target_platform(
                            TargetPlatform::builder()
                                .os(TargetPlatformOs::Linux)
                                .arch(TargetPlatformArch::X8664)
                                .accelerator(TargetPlatformAccelerator::Nvidia)
                                .build(),
                        )
                        .s3_output_location(
                            S3Location::builder()
                                .bucket("bucket")
                                .prefix("components/")
                                .build(),
                        )
                        .component_name("CircuitBoardDetector")
                        .build(),
                )
                .build(),
        )
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(
        request.uri(),
        "/2020-11-20/projects/circuit-boards/modelpackagingjobs"
    );
    assert_ok(validate_body(
        body(request),
        r#"{
            "ModelVersion": "1",
            "JobName": "package-1",
            "Configuration": {
                "Greengrass": {
                    "CompilerOptions": "{\"gpu-code\": \"sm_75\"}",
                    "TargetPlatform": {"Os": "LINUX", "Arch": "X86_64", "Accelerator": "NVIDIA"},
                    "S3OutputLocation": {"Bucket": "bucket", "Prefix": "components/"},
                    "ComponentName": "CircuitBoardDetector"
                }
            }
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn tag_resource_body() {
    let op = TagResourceInput::builder()
        .resource_arn("arn:aws:lookoutvision:us-east-1:123456789012:model/circuit-boards/1")
        .tags(vec![Tag::builder().key("team").value("vision").build()])
        .build()
        .make_operation(&config())
        .expect("valid operation");
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_ok(validate_body(
        body(request),
        r#"{"Tags": [{"Key": "team", "Value": "vision"}]}"#,
        MediaType::Json,
    ));
    assert_ok(forbid_headers(request, &["x-amzn-client-token"]));
}
