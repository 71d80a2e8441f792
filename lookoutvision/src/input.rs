/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs and their restJson1 serialization.

use crate::config::Config;
use aws_http::AwsErrorRetryPolicy;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Operation};
use smithy_http::{label, query};
use smithy_types::instant::Format;

fn required<'a, T: ?Sized>(
    operation: &'static str,
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, BuildError> {
    value.ok_or_else(|| {
        tracing::error!(operation, "Required field: {}, is not set", field);
        BuildError::MissingField {
            field,
            details: "the field is required by the operation",
        }
    })
}

fn json_body<T: Serialize>(input: &T) -> Result<SdkBody, BuildError> {
    serde_json::to_vec(input)
        .map(SdkBody::from)
        .map_err(|err| BuildError::SerializationError(err.into()))
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateDatasetInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(rename = "DatasetType", default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<String>,
    #[serde(rename = "DatasetSource", default, skip_serializing_if = "Option::is_none")]
    pub dataset_source: Option<crate::model::DatasetSource>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`CreateDatasetInput`](crate::input::CreateDatasetInput)
pub mod create_dataset_input {
    /// A builder for [`CreateDatasetInput`](crate::input::CreateDatasetInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        dataset_type: Option<String>,
        dataset_source: Option<crate::model::DatasetSource>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.dataset_type = Some(inp.into());
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.dataset_type = inp;
            self
        }
        pub fn dataset_source(mut self, inp: crate::model::DatasetSource) -> Self {
            self.dataset_source = Some(inp);
            self
        }
        pub fn set_dataset_source(mut self, inp: Option<crate::model::DatasetSource>) -> Self {
            self.dataset_source = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateDatasetInput`](crate::input::CreateDatasetInput)
        pub fn build(self) -> crate::input::CreateDatasetInput {
            crate::input::CreateDatasetInput {
                project_name: self.project_name,
                dataset_type: self.dataset_type,
                dataset_source: self.dataset_source,
                client_token: self.client_token,
            }
        }
    }
}
impl CreateDatasetInput {
    /// Creates a new builder-style object to manufacture [`CreateDatasetInput`](crate::input::CreateDatasetInput)
    pub fn builder() -> crate::input::create_dataset_input::Builder {
        crate::input::create_dataset_input::Builder::default()
    }
}
impl CreateDatasetInput {
    /// Checks required fields and serializes the input into a signed `CreateDataset` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateDataset, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("CreateDataset", "ProjectName", self.project_name.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/datasets",
            label::fmt_string(project_name, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::CreateDataset::new(), "CreateDataset"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateModelInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
    #[serde(rename = "OutputConfig", default, skip_serializing_if = "Option::is_none")]
    pub output_config: Option<crate::model::OutputConfig>,
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
/// See [`CreateModelInput`](crate::input::CreateModelInput)
pub mod create_model_input {
    /// A builder for [`CreateModelInput`](crate::input::CreateModelInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        description: Option<String>,
        client_token: Option<String>,
        output_config: Option<crate::model::OutputConfig>,
        kms_key_id: Option<String>,
        tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        pub fn output_config(mut self, inp: crate::model::OutputConfig) -> Self {
            self.output_config = Some(inp);
            self
        }
        pub fn set_output_config(mut self, inp: Option<crate::model::OutputConfig>) -> Self {
            self.output_config = inp;
            self
        }
        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.kms_key_id = Some(inp.into());
            self
        }
        pub fn set_kms_key_id(mut self, inp: Option<String>) -> Self {
            self.kms_key_id = inp;
            self
        }
        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateModelInput`](crate::input::CreateModelInput)
        pub fn build(self) -> crate::input::CreateModelInput {
            crate::input::CreateModelInput {
                project_name: self.project_name,
                description: self.description,
                client_token: self.client_token,
                output_config: self.output_config,
                kms_key_id: self.kms_key_id,
                tags: self.tags,
            }
        }
    }
}
impl CreateModelInput {
    /// Creates a new builder-style object to manufacture [`CreateModelInput`](crate::input::CreateModelInput)
    pub fn builder() -> crate::input::create_model_input::Builder {
        crate::input::create_model_input::Builder::default()
    }
}
impl CreateModelInput {
    /// Checks required fields and serializes the input into a signed `CreateModel` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateModel, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("CreateModel", "ProjectName", self.project_name.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/models",
            label::fmt_string(project_name, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::CreateModel::new(), "CreateModel"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateProjectInput {
    #[serde(rename = "ProjectName", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`CreateProjectInput`](crate::input::CreateProjectInput)
pub mod create_project_input {
    /// A builder for [`CreateProjectInput`](crate::input::CreateProjectInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateProjectInput`](crate::input::CreateProjectInput)
        pub fn build(self) -> crate::input::CreateProjectInput {
            crate::input::CreateProjectInput {
                project_name: self.project_name,
                client_token: self.client_token,
            }
        }
    }
}
impl CreateProjectInput {
    /// Creates a new builder-style object to manufacture [`CreateProjectInput`](crate::input::CreateProjectInput)
    pub fn builder() -> crate::input::create_project_input::Builder {
        crate::input::create_project_input::Builder::default()
    }
}
impl CreateProjectInput {
    /// Checks required fields and serializes the input into a signed `CreateProject` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateProject, AwsErrorRetryPolicy>, BuildError> {
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = String::from("/2020-11-20/projects");
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::CreateProject::new(), "CreateProject"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeleteDatasetInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub dataset_type: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
pub mod delete_dataset_input {
    /// A builder for [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        dataset_type: Option<String>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.dataset_type = Some(inp.into());
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.dataset_type = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
        pub fn build(self) -> crate::input::DeleteDatasetInput {
            crate::input::DeleteDatasetInput {
                project_name: self.project_name,
                dataset_type: self.dataset_type,
                client_token: self.client_token,
            }
        }
    }
}
impl DeleteDatasetInput {
    /// Creates a new builder-style object to manufacture [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
    pub fn builder() -> crate::input::delete_dataset_input::Builder {
        crate::input::delete_dataset_input::Builder::default()
    }
}
impl DeleteDatasetInput {
    /// Checks required fields and serializes the input into a signed `DeleteDataset` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteDataset, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("DeleteDataset", "ProjectName", self.project_name.as_deref())?;
        let dataset_type = required("DeleteDataset", "DatasetType", self.dataset_type.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/datasets/{}",
            label::fmt_string(project_name, false),
            label::fmt_string(dataset_type, false),
        );
        let mut builder = http::Request::builder().method("DELETE").uri(uri);
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DeleteDataset::new(), "DeleteDataset"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeleteModelInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub model_version: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`DeleteModelInput`](crate::input::DeleteModelInput)
pub mod delete_model_input {
    /// A builder for [`DeleteModelInput`](crate::input::DeleteModelInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        model_version: Option<String>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteModelInput`](crate::input::DeleteModelInput)
        pub fn build(self) -> crate::input::DeleteModelInput {
            crate::input::DeleteModelInput {
                project_name: self.project_name,
                model_version: self.model_version,
                client_token: self.client_token,
            }
        }
    }
}
impl DeleteModelInput {
    /// Creates a new builder-style object to manufacture [`DeleteModelInput`](crate::input::DeleteModelInput)
    pub fn builder() -> crate::input::delete_model_input::Builder {
        crate::input::delete_model_input::Builder::default()
    }
}
impl DeleteModelInput {
    /// Checks required fields and serializes the input into a signed `DeleteModel` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteModel, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("DeleteModel", "ProjectName", self.project_name.as_deref())?;
        let model_version = required("DeleteModel", "ModelVersion", self.model_version.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/models/{}",
            label::fmt_string(project_name, false),
            label::fmt_string(model_version, false),
        );
        let mut builder = http::Request::builder().method("DELETE").uri(uri);
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DeleteModel::new(), "DeleteModel"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeleteProjectInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`DeleteProjectInput`](crate::input::DeleteProjectInput)
pub mod delete_project_input {
    /// A builder for [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteProjectInput`](crate::input::DeleteProjectInput)
        pub fn build(self) -> crate::input::DeleteProjectInput {
            crate::input::DeleteProjectInput {
                project_name: self.project_name,
                client_token: self.client_token,
            }
        }
    }
}
impl DeleteProjectInput {
    /// Creates a new builder-style object to manufacture [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    pub fn builder() -> crate::input::delete_project_input::Builder {
        crate::input::delete_project_input::Builder::default()
    }
}
impl DeleteProjectInput {
    /// Checks required fields and serializes the input into a signed `DeleteProject` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteProject, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("DeleteProject", "ProjectName", self.project_name.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}",
            label::fmt_string(project_name, false),
        );
        let mut builder = http::Request::builder().method("DELETE").uri(uri);
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DeleteProject::new(), "DeleteProject"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DescribeDatasetInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub dataset_type: Option<String>,
}
/// See [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
pub mod describe_dataset_input {
    /// A builder for [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        dataset_type: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.dataset_type = Some(inp.into());
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.dataset_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
        pub fn build(self) -> crate::input::DescribeDatasetInput {
            crate::input::DescribeDatasetInput {
                project_name: self.project_name,
                dataset_type: self.dataset_type,
            }
        }
    }
}
impl DescribeDatasetInput {
    /// Creates a new builder-style object to manufacture [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
    pub fn builder() -> crate::input::describe_dataset_input::Builder {
        crate::input::describe_dataset_input::Builder::default()
    }
}
impl DescribeDatasetInput {
    /// Checks required fields and serializes the input into a signed `DescribeDataset` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeDataset, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required(
            "DescribeDataset",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let dataset_type = required(
            "DescribeDataset",
            "DatasetType",
            self.dataset_type.as_deref(),
        )?;
        let uri = format!(
            "/2020-11-20/projects/{}/datasets/{}",
            label::fmt_string(project_name, false),
            label::fmt_string(dataset_type, false),
        );
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DescribeDataset::new(), "DescribeDataset"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DescribeModelInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub model_version: Option<String>,
}
/// See [`DescribeModelInput`](crate::input::DescribeModelInput)
pub mod describe_model_input {
    /// A builder for [`DescribeModelInput`](crate::input::DescribeModelInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        model_version: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeModelInput`](crate::input::DescribeModelInput)
        pub fn build(self) -> crate::input::DescribeModelInput {
            crate::input::DescribeModelInput {
                project_name: self.project_name,
                model_version: self.model_version,
            }
        }
    }
}
impl DescribeModelInput {
    /// Creates a new builder-style object to manufacture [`DescribeModelInput`](crate::input::DescribeModelInput)
    pub fn builder() -> crate::input::describe_model_input::Builder {
        crate::input::describe_model_input::Builder::default()
    }
}
impl DescribeModelInput {
    /// Checks required fields and serializes the input into a signed `DescribeModel` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeModel, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("DescribeModel", "ProjectName", self.project_name.as_deref())?;
        let model_version = required(
            "DescribeModel",
            "ModelVersion",
            self.model_version.as_deref(),
        )?;
        let uri = format!(
            "/2020-11-20/projects/{}/models/{}",
            label::fmt_string(project_name, false),
            label::fmt_string(model_version, false),
        );
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DescribeModel::new(), "DescribeModel"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DescribeModelPackagingJobInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub job_name: Option<String>,
}
/// See [`DescribeModelPackagingJobInput`](crate::input::DescribeModelPackagingJobInput)
pub mod describe_model_packaging_job_input {
    /// A builder for [`DescribeModelPackagingJobInput`](crate::input::DescribeModelPackagingJobInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        job_name: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.job_name = Some(inp.into());
            self
        }
        pub fn set_job_name(mut self, inp: Option<String>) -> Self {
            self.job_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeModelPackagingJobInput`](crate::input::DescribeModelPackagingJobInput)
        pub fn build(self) -> crate::input::DescribeModelPackagingJobInput {
            crate::input::DescribeModelPackagingJobInput {
                project_name: self.project_name,
                job_name: self.job_name,
            }
        }
    }
}
impl DescribeModelPackagingJobInput {
    /// Creates a new builder-style object to manufacture [`DescribeModelPackagingJobInput`](crate::input::DescribeModelPackagingJobInput)
    pub fn builder() -> crate::input::describe_model_packaging_job_input::Builder {
        crate::input::describe_model_packaging_job_input::Builder::default()
    }
}
impl DescribeModelPackagingJobInput {
    /// Checks required fields and serializes the input into a signed `DescribeModelPackagingJob` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<
        Operation<crate::operation::DescribeModelPackagingJob, AwsErrorRetryPolicy>,
        BuildError,
    > {
        let project_name = required(
            "DescribeModelPackagingJob",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let job_name = required("DescribeModelPackagingJob", "JobName", self.job_name.as_deref())?;
        let uri = format!(
            "/2020-11-20/projects/{}/modelpackagingjobs/{}",
            label::fmt_string(project_name, false),
            label::fmt_string(job_name, false),
        );
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(
            request,
            crate::operation::DescribeModelPackagingJob::new(),
            "DescribeModelPackagingJob",
        ))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DescribeProjectInput {
    #[serde(skip)]
    pub project_name: Option<String>,
}
/// See [`DescribeProjectInput`](crate::input::DescribeProjectInput)
pub mod describe_project_input {
    /// A builder for [`DescribeProjectInput`](crate::input::DescribeProjectInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeProjectInput`](crate::input::DescribeProjectInput)
        pub fn build(self) -> crate::input::DescribeProjectInput {
            crate::input::DescribeProjectInput {
                project_name: self.project_name,
            }
        }
    }
}
impl DescribeProjectInput {
    /// Creates a new builder-style object to manufacture [`DescribeProjectInput`](crate::input::DescribeProjectInput)
    pub fn builder() -> crate::input::describe_project_input::Builder {
        crate::input::describe_project_input::Builder::default()
    }
}
impl DescribeProjectInput {
    /// Checks required fields and serializes the input into a signed `DescribeProject` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeProject, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required(
            "DescribeProject",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let uri = format!(
            "/2020-11-20/projects/{}",
            label::fmt_string(project_name, false),
        );
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DescribeProject::new(), "DescribeProject"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DetectAnomaliesInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub model_version: Option<String>,
    #[serde(skip)]
    pub body: Option<smithy_types::Blob>,
    #[serde(skip)]
    pub content_type: Option<String>,
}
/// See [`DetectAnomaliesInput`](crate::input::DetectAnomaliesInput)
pub mod detect_anomalies_input {
    /// A builder for [`DetectAnomaliesInput`](crate::input::DetectAnomaliesInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        model_version: Option<String>,
        body: Option<smithy_types::Blob>,
        content_type: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        pub fn body(mut self, inp: smithy_types::Blob) -> Self {
            self.body = Some(inp);
            self
        }
        pub fn set_body(mut self, inp: Option<smithy_types::Blob>) -> Self {
            self.body = inp;
            self
        }
        pub fn content_type(mut self, inp: impl Into<String>) -> Self {
            self.content_type = Some(inp.into());
            self
        }
        pub fn set_content_type(mut self, inp: Option<String>) -> Self {
            self.content_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectAnomaliesInput`](crate::input::DetectAnomaliesInput)
        pub fn build(self) -> crate::input::DetectAnomaliesInput {
            crate::input::DetectAnomaliesInput {
                project_name: self.project_name,
                model_version: self.model_version,
                body: self.body,
                content_type: self.content_type,
            }
        }
    }
}
impl DetectAnomaliesInput {
    /// Creates a new builder-style object to manufacture [`DetectAnomaliesInput`](crate::input::DetectAnomaliesInput)
    pub fn builder() -> crate::input::detect_anomalies_input::Builder {
        crate::input::detect_anomalies_input::Builder::default()
    }
}
impl DetectAnomaliesInput {
    /// Checks required fields and serializes the input into a signed `DetectAnomalies` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DetectAnomalies, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required(
            "DetectAnomalies",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let model_version = required(
            "DetectAnomalies",
            "ModelVersion",
            self.model_version.as_deref(),
        )?;
        let uri = format!(
            "/2020-11-20/projects/{}/models/{}/detect",
            label::fmt_string(project_name, false),
            label::fmt_string(model_version, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        if let Some(inner) = &self.content_type {
            builder = builder.header("Content-Type", inner.as_str());
        }
        let body = match &self.body {
            Some(blob) => SdkBody::from(blob.as_ref().to_vec()),
            None => SdkBody::empty(),
        };
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::DetectAnomalies::new(), "DetectAnomalies"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListDatasetEntriesInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub dataset_type: Option<String>,
    #[serde(skip)]
    pub labeled: Option<bool>,
    #[serde(skip)]
    pub anomaly_class: Option<String>,
    #[serde(skip)]
    pub before_creation_date: Option<smithy_types::Instant>,
    #[serde(skip)]
    pub after_creation_date: Option<smithy_types::Instant>,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub source_ref_contains: Option<String>,
}
/// See [`ListDatasetEntriesInput`](crate::input::ListDatasetEntriesInput)
pub mod list_dataset_entries_input {
    /// A builder for [`ListDatasetEntriesInput`](crate::input::ListDatasetEntriesInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        dataset_type: Option<String>,
        labeled: Option<bool>,
        anomaly_class: Option<String>,
        before_creation_date: Option<smithy_types::Instant>,
        after_creation_date: Option<smithy_types::Instant>,
        next_token: Option<String>,
        max_results: Option<i32>,
        source_ref_contains: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.dataset_type = Some(inp.into());
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.dataset_type = inp;
            self
        }
        pub fn labeled(mut self, inp: bool) -> Self {
            self.labeled = Some(inp);
            self
        }
        pub fn set_labeled(mut self, inp: Option<bool>) -> Self {
            self.labeled = inp;
            self
        }
        pub fn anomaly_class(mut self, inp: impl Into<String>) -> Self {
            self.anomaly_class = Some(inp.into());
            self
        }
        pub fn set_anomaly_class(mut self, inp: Option<String>) -> Self {
            self.anomaly_class = inp;
            self
        }
        pub fn before_creation_date(mut self, inp: smithy_types::Instant) -> Self {
            self.before_creation_date = Some(inp);
            self
        }
        pub fn set_before_creation_date(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.before_creation_date = inp;
            self
        }
        pub fn after_creation_date(mut self, inp: smithy_types::Instant) -> Self {
            self.after_creation_date = Some(inp);
            self
        }
        pub fn set_after_creation_date(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.after_creation_date = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn source_ref_contains(mut self, inp: impl Into<String>) -> Self {
            self.source_ref_contains = Some(inp.into());
            self
        }
        pub fn set_source_ref_contains(mut self, inp: Option<String>) -> Self {
            self.source_ref_contains = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListDatasetEntriesInput`](crate::input::ListDatasetEntriesInput)
        pub fn build(self) -> crate::input::ListDatasetEntriesInput {
            crate::input::ListDatasetEntriesInput {
                project_name: self.project_name,
                dataset_type: self.dataset_type,
                labeled: self.labeled,
                anomaly_class: self.anomaly_class,
                before_creation_date: self.before_creation_date,
                after_creation_date: self.after_creation_date,
                next_token: self.next_token,
                max_results: self.max_results,
                source_ref_contains: self.source_ref_contains,
            }
        }
    }
}
impl ListDatasetEntriesInput {
    /// Creates a new builder-style object to manufacture [`ListDatasetEntriesInput`](crate::input::ListDatasetEntriesInput)
    pub fn builder() -> crate::input::list_dataset_entries_input::Builder {
        crate::input::list_dataset_entries_input::Builder::default()
    }
}
impl ListDatasetEntriesInput {
    /// Checks required fields and serializes the input into a signed `ListDatasetEntries` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListDatasetEntries, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required(
            "ListDatasetEntries",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let dataset_type = required(
            "ListDatasetEntries",
            "DatasetType",
            self.dataset_type.as_deref(),
        )?;
        let mut uri = format!(
            "/2020-11-20/projects/{}/datasets/{}/entries",
            label::fmt_string(project_name, false),
            label::fmt_string(dataset_type, false),
        );
        let mut writer = query::Writer::new(&mut uri);
        if let Some(inner) = &self.labeled {
            writer.push_kv("labeled", &inner.to_string());
        }
        if let Some(inner) = &self.anomaly_class {
            writer.push_kv("anomalyClass", &query::fmt_string(inner));
        }
        if let Some(inner) = &self.before_creation_date {
            writer.push_kv("createdBefore", &query::fmt_timestamp(inner, Format::DateTime));
        }
        if let Some(inner) = &self.after_creation_date {
            writer.push_kv("createdAfter", &query::fmt_timestamp(inner, Format::DateTime));
        }
        if let Some(inner) = &self.next_token {
            writer.push_kv("nextToken", &query::fmt_string(inner));
        }
        if let Some(inner) = &self.max_results {
            writer.push_kv("maxResults", &inner.to_string());
        }
        if let Some(inner) = &self.source_ref_contains {
            writer.push_kv("sourceRefContains", &query::fmt_string(inner));
        }
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(
            request,
            crate::operation::ListDatasetEntries::new(),
            "ListDatasetEntries",
        ))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListModelPackagingJobsInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}
/// See [`ListModelPackagingJobsInput`](crate::input::ListModelPackagingJobsInput)
pub mod list_model_packaging_jobs_input {
    /// A builder for [`ListModelPackagingJobsInput`](crate::input::ListModelPackagingJobsInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListModelPackagingJobsInput`](crate::input::ListModelPackagingJobsInput)
        pub fn build(self) -> crate::input::ListModelPackagingJobsInput {
            crate::input::ListModelPackagingJobsInput {
                project_name: self.project_name,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListModelPackagingJobsInput {
    /// Creates a new builder-style object to manufacture [`ListModelPackagingJobsInput`](crate::input::ListModelPackagingJobsInput)
    pub fn builder() -> crate::input::list_model_packaging_jobs_input::Builder {
        crate::input::list_model_packaging_jobs_input::Builder::default()
    }
}
impl ListModelPackagingJobsInput {
    /// Checks required fields and serializes the input into a signed `ListModelPackagingJobs` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<
        Operation<crate::operation::ListModelPackagingJobs, AwsErrorRetryPolicy>,
        BuildError,
    > {
        let project_name = required(
            "ListModelPackagingJobs",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let mut uri = format!(
            "/2020-11-20/projects/{}/modelpackagingjobs",
            label::fmt_string(project_name, false),
        );
        let mut writer = query::Writer::new(&mut uri);
        if let Some(inner) = &self.next_token {
            writer.push_kv("nextToken", &query::fmt_string(inner));
        }
        if let Some(inner) = &self.max_results {
            writer.push_kv("maxResults", &inner.to_string());
        }
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(
            request,
            crate::operation::ListModelPackagingJobs::new(),
            "ListModelPackagingJobs",
        ))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListModelsInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}
/// See [`ListModelsInput`](crate::input::ListModelsInput)
pub mod list_models_input {
    /// A builder for [`ListModelsInput`](crate::input::ListModelsInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListModelsInput`](crate::input::ListModelsInput)
        pub fn build(self) -> crate::input::ListModelsInput {
            crate::input::ListModelsInput {
                project_name: self.project_name,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListModelsInput {
    /// Creates a new builder-style object to manufacture [`ListModelsInput`](crate::input::ListModelsInput)
    pub fn builder() -> crate::input::list_models_input::Builder {
        crate::input::list_models_input::Builder::default()
    }
}
impl ListModelsInput {
    /// Checks required fields and serializes the input into a signed `ListModels` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListModels, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("ListModels", "ProjectName", self.project_name.as_deref())?;
        let mut uri = format!(
            "/2020-11-20/projects/{}/models",
            label::fmt_string(project_name, false),
        );
        let mut writer = query::Writer::new(&mut uri);
        if let Some(inner) = &self.next_token {
            writer.push_kv("nextToken", &query::fmt_string(inner));
        }
        if let Some(inner) = &self.max_results {
            writer.push_kv("maxResults", &inner.to_string());
        }
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::ListModels::new(), "ListModels"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListProjectsInput {
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
}
/// See [`ListProjectsInput`](crate::input::ListProjectsInput)
pub mod list_projects_input {
    /// A builder for [`ListProjectsInput`](crate::input::ListProjectsInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListProjectsInput`](crate::input::ListProjectsInput)
        pub fn build(self) -> crate::input::ListProjectsInput {
            crate::input::ListProjectsInput {
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListProjectsInput {
    /// Creates a new builder-style object to manufacture [`ListProjectsInput`](crate::input::ListProjectsInput)
    pub fn builder() -> crate::input::list_projects_input::Builder {
        crate::input::list_projects_input::Builder::default()
    }
}
impl ListProjectsInput {
    /// Checks required fields and serializes the input into a signed `ListProjects` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListProjects, AwsErrorRetryPolicy>, BuildError> {
        let mut uri = String::from("/2020-11-20/projects");
        let mut writer = query::Writer::new(&mut uri);
        if let Some(inner) = &self.next_token {
            writer.push_kv("nextToken", &query::fmt_string(inner));
        }
        if let Some(inner) = &self.max_results {
            writer.push_kv("maxResults", &inner.to_string());
        }
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::ListProjects::new(), "ListProjects"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListTagsForResourceInput {
    #[serde(skip)]
    pub resource_arn: Option<String>,
}
/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        resource_arn: Option<String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
        pub fn build(self) -> crate::input::ListTagsForResourceInput {
            crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            }
        }
    }
}
impl ListTagsForResourceInput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}
impl ListTagsForResourceInput {
    /// Checks required fields and serializes the input into a signed `ListTagsForResource` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListTagsForResource, AwsErrorRetryPolicy>, BuildError> {
        let resource_arn = required(
            "ListTagsForResource",
            "ResourceArn",
            self.resource_arn.as_deref(),
        )?;
        let uri = format!(
            "/2020-11-20/tags/{}",
            label::fmt_string(resource_arn, false),
        );
        let builder = http::Request::builder().method("GET").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(
            request,
            crate::operation::ListTagsForResource::new(),
            "ListTagsForResource",
        ))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StartModelInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub model_version: Option<String>,
    #[serde(rename = "MinInferenceUnits", default, skip_serializing_if = "Option::is_none")]
    pub min_inference_units: Option<i32>,
    #[serde(skip)]
    pub client_token: Option<String>,
    #[serde(rename = "MaxInferenceUnits", default, skip_serializing_if = "Option::is_none")]
    pub max_inference_units: Option<i32>,
}
/// See [`StartModelInput`](crate::input::StartModelInput)
pub mod start_model_input {
    /// A builder for [`StartModelInput`](crate::input::StartModelInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        model_version: Option<String>,
        min_inference_units: Option<i32>,
        client_token: Option<String>,
        max_inference_units: Option<i32>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        pub fn min_inference_units(mut self, inp: i32) -> Self {
            self.min_inference_units = Some(inp);
            self
        }
        pub fn set_min_inference_units(mut self, inp: Option<i32>) -> Self {
            self.min_inference_units = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        pub fn max_inference_units(mut self, inp: i32) -> Self {
            self.max_inference_units = Some(inp);
            self
        }
        pub fn set_max_inference_units(mut self, inp: Option<i32>) -> Self {
            self.max_inference_units = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartModelInput`](crate::input::StartModelInput)
        pub fn build(self) -> crate::input::StartModelInput {
            crate::input::StartModelInput {
                project_name: self.project_name,
                model_version: self.model_version,
                min_inference_units: self.min_inference_units,
                client_token: self.client_token,
                max_inference_units: self.max_inference_units,
            }
        }
    }
}
impl StartModelInput {
    /// Creates a new builder-style object to manufacture [`StartModelInput`](crate::input::StartModelInput)
    pub fn builder() -> crate::input::start_model_input::Builder {
        crate::input::start_model_input::Builder::default()
    }
}
impl StartModelInput {
    /// Checks required fields and serializes the input into a signed `StartModel` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::StartModel, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("StartModel", "ProjectName", self.project_name.as_deref())?;
        let model_version = required("StartModel", "ModelVersion", self.model_version.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/models/{}/start",
            label::fmt_string(project_name, false),
            label::fmt_string(model_version, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::StartModel::new(), "StartModel"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StartModelPackagingJobInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(rename = "ModelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(rename = "Configuration", default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<crate::model::ModelPackagingConfiguration>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`StartModelPackagingJobInput`](crate::input::StartModelPackagingJobInput)
pub mod start_model_packaging_job_input {
    /// A builder for [`StartModelPackagingJobInput`](crate::input::StartModelPackagingJobInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        model_version: Option<String>,
        job_name: Option<String>,
        configuration: Option<crate::model::ModelPackagingConfiguration>,
        description: Option<String>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.job_name = Some(inp.into());
            self
        }
        pub fn set_job_name(mut self, inp: Option<String>) -> Self {
            self.job_name = inp;
            self
        }
        pub fn configuration(mut self, inp: crate::model::ModelPackagingConfiguration) -> Self {
            self.configuration = Some(inp);
            self
        }
        pub fn set_configuration(
            mut self,
            inp: Option<crate::model::ModelPackagingConfiguration>,
        ) -> Self {
            self.configuration = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartModelPackagingJobInput`](crate::input::StartModelPackagingJobInput)
        pub fn build(self) -> crate::input::StartModelPackagingJobInput {
            crate::input::StartModelPackagingJobInput {
                project_name: self.project_name,
                model_version: self.model_version,
                job_name: self.job_name,
                configuration: self.configuration,
                description: self.description,
                client_token: self.client_token,
            }
        }
    }
}
impl StartModelPackagingJobInput {
    /// Creates a new builder-style object to manufacture [`StartModelPackagingJobInput`](crate::input::StartModelPackagingJobInput)
    pub fn builder() -> crate::input::start_model_packaging_job_input::Builder {
        crate::input::start_model_packaging_job_input::Builder::default()
    }
}
impl StartModelPackagingJobInput {
    /// Checks required fields and serializes the input into a signed `StartModelPackagingJob` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<
        Operation<crate::operation::StartModelPackagingJob, AwsErrorRetryPolicy>,
        BuildError,
    > {
        let project_name = required(
            "StartModelPackagingJob",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/modelpackagingjobs",
            label::fmt_string(project_name, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(
            request,
            crate::operation::StartModelPackagingJob::new(),
            "StartModelPackagingJob",
        ))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StopModelInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub model_version: Option<String>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`StopModelInput`](crate::input::StopModelInput)
pub mod stop_model_input {
    /// A builder for [`StopModelInput`](crate::input::StopModelInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        model_version: Option<String>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`StopModelInput`](crate::input::StopModelInput)
        pub fn build(self) -> crate::input::StopModelInput {
            crate::input::StopModelInput {
                project_name: self.project_name,
                model_version: self.model_version,
                client_token: self.client_token,
            }
        }
    }
}
impl StopModelInput {
    /// Creates a new builder-style object to manufacture [`StopModelInput`](crate::input::StopModelInput)
    pub fn builder() -> crate::input::stop_model_input::Builder {
        crate::input::stop_model_input::Builder::default()
    }
}
impl StopModelInput {
    /// Checks required fields and serializes the input into a signed `StopModel` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::StopModel, AwsErrorRetryPolicy>, BuildError> {
        let project_name = required("StopModel", "ProjectName", self.project_name.as_deref())?;
        let model_version = required("StopModel", "ModelVersion", self.model_version.as_deref())?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/models/{}/stop",
            label::fmt_string(project_name, false),
            label::fmt_string(model_version, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::StopModel::new(), "StopModel"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TagResourceInput {
    #[serde(skip)]
    pub resource_arn: Option<String>,
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        resource_arn: Option<String>,
        tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput)
        pub fn build(self) -> crate::input::TagResourceInput {
            crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}
impl TagResourceInput {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}
impl TagResourceInput {
    /// Checks required fields and serializes the input into a signed `TagResource` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::TagResource, AwsErrorRetryPolicy>, BuildError> {
        let resource_arn = required("TagResource", "ResourceArn", self.resource_arn.as_deref())?;
        let uri = format!(
            "/2020-11-20/tags/{}",
            label::fmt_string(resource_arn, false),
        );
        let mut builder = http::Request::builder().method("POST").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::TagResource::new(), "TagResource"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UntagResourceInput {
    #[serde(skip)]
    pub resource_arn: Option<String>,
    #[serde(skip)]
    pub tag_keys: Option<Vec<String>>,
}
/// See [`UntagResourceInput`](crate::input::UntagResourceInput)
pub mod untag_resource_input {
    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        resource_arn: Option<String>,
        tag_keys: Option<Vec<String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn tag_keys(mut self, inp: Vec<String>) -> Self {
            self.tag_keys = Some(inp);
            self
        }
        pub fn set_tag_keys(mut self, inp: Option<Vec<String>>) -> Self {
            self.tag_keys = inp;
            self
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput)
        pub fn build(self) -> crate::input::UntagResourceInput {
            crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            }
        }
    }
}
impl UntagResourceInput {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}
impl UntagResourceInput {
    /// Checks required fields and serializes the input into a signed `UntagResource` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UntagResource, AwsErrorRetryPolicy>, BuildError> {
        let resource_arn = required("UntagResource", "ResourceArn", self.resource_arn.as_deref())?;
        let tag_keys = required("UntagResource", "TagKeys", self.tag_keys.as_ref())?;
        let mut uri = format!(
            "/2020-11-20/tags/{}",
            label::fmt_string(resource_arn, false),
        );
        let mut writer = query::Writer::new(&mut uri);
        for inner in tag_keys {
            writer.push_kv("tagKeys", &query::fmt_string(inner));
        }
        let builder = http::Request::builder().method("DELETE").uri(uri);
        let body = SdkBody::empty();
        let request = builder.body(body)?;
        Ok(config.operation(request, crate::operation::UntagResource::new(), "UntagResource"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdateDatasetEntriesInput {
    #[serde(skip)]
    pub project_name: Option<String>,
    #[serde(skip)]
    pub dataset_type: Option<String>,
    #[serde(
        rename = "Changes",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::blob_base64",
    )]
    pub changes: Option<smithy_types::Blob>,
    #[serde(skip)]
    pub client_token: Option<String>,
}
/// See [`UpdateDatasetEntriesInput`](crate::input::UpdateDatasetEntriesInput)
pub mod update_dataset_entries_input {
    /// A builder for [`UpdateDatasetEntriesInput`](crate::input::UpdateDatasetEntriesInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        dataset_type: Option<String>,
        changes: Option<smithy_types::Blob>,
        client_token: Option<String>,
    }
    impl Builder {
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.dataset_type = Some(inp.into());
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.dataset_type = inp;
            self
        }
        pub fn changes(mut self, inp: smithy_types::Blob) -> Self {
            self.changes = Some(inp);
            self
        }
        pub fn set_changes(mut self, inp: Option<smithy_types::Blob>) -> Self {
            self.changes = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateDatasetEntriesInput`](crate::input::UpdateDatasetEntriesInput)
        pub fn build(self) -> crate::input::UpdateDatasetEntriesInput {
            crate::input::UpdateDatasetEntriesInput {
                project_name: self.project_name,
                dataset_type: self.dataset_type,
                changes: self.changes,
                client_token: self.client_token,
            }
        }
    }
}
impl UpdateDatasetEntriesInput {
    /// Creates a new builder-style object to manufacture [`UpdateDatasetEntriesInput`](crate::input::UpdateDatasetEntriesInput)
    pub fn builder() -> crate::input::update_dataset_entries_input::Builder {
        crate::input::update_dataset_entries_input::Builder::default()
    }
}
impl UpdateDatasetEntriesInput {
    /// Checks required fields and serializes the input into a signed `UpdateDatasetEntries` operation
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<
        Operation<crate::operation::UpdateDatasetEntries, AwsErrorRetryPolicy>,
        BuildError,
    > {
        let project_name = required(
            "UpdateDatasetEntries",
            "ProjectName",
            self.project_name.as_deref(),
        )?;
        let dataset_type = required(
            "UpdateDatasetEntries",
            "DatasetType",
            self.dataset_type.as_deref(),
        )?;
        let client_token = self
            .client_token
            .clone()
            .unwrap_or_else(|| config.idempotency_token_provider.make_idempotency_token());
        let uri = format!(
            "/2020-11-20/projects/{}/datasets/{}/entries",
            label::fmt_string(project_name, false),
            label::fmt_string(dataset_type, false),
        );
        let mut builder = http::Request::builder().method("PATCH").uri(uri);
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        builder = builder.header("X-Amzn-Client-Token", client_token);
        let body = json_body(self)?;
        let request = builder.body(body)?;
        Ok(config.operation(
            request,
            crate::operation::UpdateDatasetEntries::new(),
            "UpdateDatasetEntries",
        ))
    }
}
