/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::TestConnection;
use aws_hyper::SdkError;
use lookoutvision::{Client, Config, Credentials, Region};
use smithy_http::operation::BuildError;
use std::fmt::Debug;

fn client(conn: TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("akid", "secret", None))
        .build();
    Client::from_conf_conn(conf, conn)
}

fn assert_missing<E: Debug>(err: SdkError<E>, expected: &str) {
    match err {
        SdkError::ConstructionFailure(err) => match err.downcast_ref::<BuildError>() {
            Some(BuildError::MissingField { field, .. }) => assert_eq!(*field, expected),
            other => panic!("expected MissingField({}), got {:?}", expected, other),
        },
        other => panic!("expected a construction failure, got {:?}", other),
    }
}

/// Sends `$op` with the given setters and asserts it fails on `$field` without dispatching.
macro_rules! missing {
    ($op:ident, $field:literal $(, $setter:ident($value:expr))*) => {{
        let conn = TestConnection::<&'static str>::new(vec![]);
        let err = client(conn.clone())
            .$op()
            $(.$setter($value))*
            .send()
            .await
            .expect_err(concat!(stringify!($op), " without ", $field));
        assert_missing(err, $field);
        assert_eq!(conn.requests().len(), 0, "{} was dispatched", stringify!($op));
    }};
}

#[tokio::test]
async fn project_operations() {
    missing!(create_dataset, "ProjectName", dataset_type("train"));
    missing!(create_model, "ProjectName", description("first model"));
    missing!(delete_project, "ProjectName");
    missing!(describe_project, "ProjectName");
    missing!(list_models, "ProjectName", max_results(5));
    missing!(list_model_packaging_jobs, "ProjectName", next_token("page-2"));
    missing!(start_model_packaging_job, "ProjectName", job_name("job-1"), model_version("1"));
}

#[tokio::test]
async fn dataset_operations() {
    missing!(delete_dataset, "ProjectName", dataset_type("train"));
    missing!(delete_dataset, "DatasetType", project_name("circuit-boards"));
    missing!(describe_dataset, "ProjectName", dataset_type("test"));
    missing!(describe_dataset, "DatasetType", project_name("circuit-boards"));
    missing!(list_dataset_entries, "ProjectName", dataset_type("train"));
    missing!(list_dataset_entries, "DatasetType", project_name("circuit-boards"));
    missing!(update_dataset_entries, "ProjectName", dataset_type("train"));
    missing!(update_dataset_entries, "DatasetType", project_name("circuit-boards"));
}

#[tokio::test]
async fn model_operations() {
    missing!(delete_model, "ProjectName", model_version("1"));
    missing!(delete_model, "ModelVersion", project_name("circuit-boards"));
    missing!(describe_model, "ProjectName", model_version("1"));
    missing!(describe_model, "ModelVersion", project_name("circuit-boards"));
    missing!(detect_anomalies, "ProjectName", model_version("1"), content_type("image/png"));
    missing!(detect_anomalies, "ModelVersion", project_name("circuit-boards"));
    missing!(start_model, "ProjectName", model_version("1"), min_inference_units(1));
    missing!(start_model, "ModelVersion", project_name("circuit-boards"));
    missing!(stop_model, "ProjectName", model_version("1"));
    missing!(stop_model, "ModelVersion", project_name("circuit-boards"));
    missing!(describe_model_packaging_job, "ProjectName", job_name("job-1"));
    missing!(describe_model_packaging_job, "JobName", project_name("circuit-boards"));
}

#[tokio::test]
async fn tag_operations() {
    let arn = "arn:aws:lookoutvision:us-east-1:123456789012:project/circuit-boards";
    missing!(list_tags_for_resource, "ResourceArn");
    missing!(tag_resource, "ResourceArn");
    missing!(untag_resource, "ResourceArn", tag_keys(vec!["team".to_string()]));
    missing!(untag_resource, "TagKeys", resource_arn(arn));
}
