/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Fluent client for Amazon Lookout for Vision.

use crate::config::Config;
use aws_hyper::conn::Standard;
use smithy_http::body::SdkBody;
use std::error::Error;
use std::sync::Arc;

type BoxError = Box<dyn Error + Send + Sync>;

pub(crate) struct Handle<C> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

/// Client for Amazon Lookout for Vision
///
/// Each operation has a method returning a fluent builder. `send()` validates the input, builds
/// the operation and dispatches it through the [`aws_hyper::Client`] middleware stack.
pub struct Client<C = Standard> {
    handle: Arc<Handle<C>>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            handle: self.handle.clone(),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("client", &self.handle.client)
            .field("conf", &self.handle.conf)
            .finish()
    }
}

impl Client<Standard> {
    /// Client configured from the environment, talking https
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, Standard::https())
    }
}

impl<C> Client<C> {
    /// Client using a custom connector, eg. a [`TestConnection`](aws_hyper::test_connection::TestConnection)
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let mut client = aws_hyper::Client::new(conn);
        if let Some(retry_config) = &conf.retry_config {
            client = client.with_retry_config(retry_config.clone());
        }
        if let Some(trace_probe) = &conf.trace_probe {
            client = client.with_trace_probe(trace_probe.clone());
        }
        Client {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }
}

impl<C> Client<C>
where
    C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    pub fn create_dataset(&self) -> fluent_builders::CreateDataset<C> {
        fluent_builders::CreateDataset::new(self.handle.clone())
    }

    pub fn create_model(&self) -> fluent_builders::CreateModel<C> {
        fluent_builders::CreateModel::new(self.handle.clone())
    }

    pub fn create_project(&self) -> fluent_builders::CreateProject<C> {
        fluent_builders::CreateProject::new(self.handle.clone())
    }

    pub fn delete_dataset(&self) -> fluent_builders::DeleteDataset<C> {
        fluent_builders::DeleteDataset::new(self.handle.clone())
    }

    pub fn delete_model(&self) -> fluent_builders::DeleteModel<C> {
        fluent_builders::DeleteModel::new(self.handle.clone())
    }

    pub fn delete_project(&self) -> fluent_builders::DeleteProject<C> {
        fluent_builders::DeleteProject::new(self.handle.clone())
    }

    pub fn describe_dataset(&self) -> fluent_builders::DescribeDataset<C> {
        fluent_builders::DescribeDataset::new(self.handle.clone())
    }

    pub fn describe_model(&self) -> fluent_builders::DescribeModel<C> {
        fluent_builders::DescribeModel::new(self.handle.clone())
    }

    pub fn describe_model_packaging_job(&self) -> fluent_builders::DescribeModelPackagingJob<C> {
        fluent_builders::DescribeModelPackagingJob::new(self.handle.clone())
    }

    pub fn describe_project(&self) -> fluent_builders::DescribeProject<C> {
        fluent_builders::DescribeProject::new(self.handle.clone())
    }

    pub fn detect_anomalies(&self) -> fluent_builders::DetectAnomalies<C> {
        fluent_builders::DetectAnomalies::new(self.handle.clone())
    }

    pub fn list_dataset_entries(&self) -> fluent_builders::ListDatasetEntries<C> {
        fluent_builders::ListDatasetEntries::new(self.handle.clone())
    }

    pub fn list_model_packaging_jobs(&self) -> fluent_builders::ListModelPackagingJobs<C> {
        fluent_builders::ListModelPackagingJobs::new(self.handle.clone())
    }

    pub fn list_models(&self) -> fluent_builders::ListModels<C> {
        fluent_builders::ListModels::new(self.handle.clone())
    }

    pub fn list_projects(&self) -> fluent_builders::ListProjects<C> {
        fluent_builders::ListProjects::new(self.handle.clone())
    }

    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource<C> {
        fluent_builders::ListTagsForResource::new(self.handle.clone())
    }

    pub fn start_model(&self) -> fluent_builders::StartModel<C> {
        fluent_builders::StartModel::new(self.handle.clone())
    }

    pub fn start_model_packaging_job(&self) -> fluent_builders::StartModelPackagingJob<C> {
        fluent_builders::StartModelPackagingJob::new(self.handle.clone())
    }

    pub fn stop_model(&self) -> fluent_builders::StopModel<C> {
        fluent_builders::StopModel::new(self.handle.clone())
    }

    pub fn tag_resource(&self) -> fluent_builders::TagResource<C> {
        fluent_builders::TagResource::new(self.handle.clone())
    }

    pub fn untag_resource(&self) -> fluent_builders::UntagResource<C> {
        fluent_builders::UntagResource::new(self.handle.clone())
    }

    pub fn update_dataset_entries(&self) -> fluent_builders::UpdateDatasetEntries<C> {
        fluent_builders::UpdateDatasetEntries::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{BoxError, Handle};
    use crate::error::LookoutVisionError;
    use smithy_http::body::SdkBody;
    use smithy_http::result::SdkError;
    use std::sync::Arc;

    /// Fluent builder for the `CreateDataset` operation
    pub struct CreateDataset<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_dataset_input::Builder,
    }

    impl<C> CreateDataset<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::CreateDatasetOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.dataset_type(inp);
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_dataset_type(inp);
            self
        }
        pub fn dataset_source(mut self, inp: crate::model::DatasetSource) -> Self {
            self.inner = self.inner.dataset_source(inp);
            self
        }
        pub fn set_dataset_source(mut self, inp: Option<crate::model::DatasetSource>) -> Self {
            self.inner = self.inner.set_dataset_source(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `CreateModel` operation
    pub struct CreateModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_model_input::Builder,
    }

    impl<C> CreateModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::CreateModelOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
        pub fn output_config(mut self, inp: crate::model::OutputConfig) -> Self {
            self.inner = self.inner.output_config(inp);
            self
        }
        pub fn set_output_config(mut self, inp: Option<crate::model::OutputConfig>) -> Self {
            self.inner = self.inner.set_output_config(inp);
            self
        }
        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.kms_key_id(inp);
            self
        }
        pub fn set_kms_key_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_kms_key_id(inp);
            self
        }
        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    /// Fluent builder for the `CreateProject` operation
    pub struct CreateProject<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_project_input::Builder,
    }

    impl<C> CreateProject<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::CreateProjectOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `DeleteDataset` operation
    pub struct DeleteDataset<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_dataset_input::Builder,
    }

    impl<C> DeleteDataset<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DeleteDatasetOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.dataset_type(inp);
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_dataset_type(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `DeleteModel` operation
    pub struct DeleteModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_model_input::Builder,
    }

    impl<C> DeleteModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DeleteModelOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.model_version(inp);
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_model_version(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `DeleteProject` operation
    pub struct DeleteProject<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_project_input::Builder,
    }

    impl<C> DeleteProject<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DeleteProjectOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `DescribeDataset` operation
    pub struct DescribeDataset<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_dataset_input::Builder,
    }

    impl<C> DescribeDataset<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeDatasetOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.dataset_type(inp);
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_dataset_type(inp);
            self
        }
    }

    /// Fluent builder for the `DescribeModel` operation
    pub struct DescribeModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_model_input::Builder,
    }

    impl<C> DescribeModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeModelOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.model_version(inp);
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_model_version(inp);
            self
        }
    }

    /// Fluent builder for the `DescribeModelPackagingJob` operation
    pub struct DescribeModelPackagingJob<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_model_packaging_job_input::Builder,
    }

    impl<C> DescribeModelPackagingJob<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeModelPackagingJobOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.job_name(inp);
            self
        }
        pub fn set_job_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_job_name(inp);
            self
        }
    }

    /// Fluent builder for the `DescribeProject` operation
    pub struct DescribeProject<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_project_input::Builder,
    }

    impl<C> DescribeProject<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeProjectOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
    }

    /// Fluent builder for the `DetectAnomalies` operation
    pub struct DetectAnomalies<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::detect_anomalies_input::Builder,
    }

    impl<C> DetectAnomalies<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DetectAnomaliesOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.model_version(inp);
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_model_version(inp);
            self
        }
        pub fn body(mut self, inp: smithy_types::Blob) -> Self {
            self.inner = self.inner.body(inp);
            self
        }
        pub fn set_body(mut self, inp: Option<smithy_types::Blob>) -> Self {
            self.inner = self.inner.set_body(inp);
            self
        }
        pub fn content_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.content_type(inp);
            self
        }
        pub fn set_content_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_content_type(inp);
            self
        }
    }

    /// Fluent builder for the `ListDatasetEntries` operation
    pub struct ListDatasetEntries<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_dataset_entries_input::Builder,
    }

    impl<C> ListDatasetEntries<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListDatasetEntriesOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.dataset_type(inp);
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_dataset_type(inp);
            self
        }
        pub fn labeled(mut self, inp: bool) -> Self {
            self.inner = self.inner.labeled(inp);
            self
        }
        pub fn set_labeled(mut self, inp: Option<bool>) -> Self {
            self.inner = self.inner.set_labeled(inp);
            self
        }
        pub fn anomaly_class(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.anomaly_class(inp);
            self
        }
        pub fn set_anomaly_class(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_anomaly_class(inp);
            self
        }
        pub fn before_creation_date(mut self, inp: smithy_types::Instant) -> Self {
            self.inner = self.inner.before_creation_date(inp);
            self
        }
        pub fn set_before_creation_date(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_before_creation_date(inp);
            self
        }
        pub fn after_creation_date(mut self, inp: smithy_types::Instant) -> Self {
            self.inner = self.inner.after_creation_date(inp);
            self
        }
        pub fn set_after_creation_date(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_after_creation_date(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn source_ref_contains(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.source_ref_contains(inp);
            self
        }
        pub fn set_source_ref_contains(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_source_ref_contains(inp);
            self
        }
    }

    /// Fluent builder for the `ListModelPackagingJobs` operation
    pub struct ListModelPackagingJobs<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_model_packaging_jobs_input::Builder,
    }

    impl<C> ListModelPackagingJobs<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListModelPackagingJobsOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    /// Fluent builder for the `ListModels` operation
    pub struct ListModels<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_models_input::Builder,
    }

    impl<C> ListModels<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListModelsOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    /// Fluent builder for the `ListProjects` operation
    pub struct ListProjects<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_projects_input::Builder,
    }

    impl<C> ListProjects<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListProjectsOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    /// Fluent builder for the `ListTagsForResource` operation
    pub struct ListTagsForResource<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_tags_for_resource_input::Builder,
    }

    impl<C> ListTagsForResource<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListTagsForResourceOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
    }

    /// Fluent builder for the `StartModel` operation
    pub struct StartModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::start_model_input::Builder,
    }

    impl<C> StartModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::StartModelOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.model_version(inp);
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_model_version(inp);
            self
        }
        pub fn min_inference_units(mut self, inp: i32) -> Self {
            self.inner = self.inner.min_inference_units(inp);
            self
        }
        pub fn set_min_inference_units(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_min_inference_units(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
        pub fn max_inference_units(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_inference_units(inp);
            self
        }
        pub fn set_max_inference_units(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_inference_units(inp);
            self
        }
    }

    /// Fluent builder for the `StartModelPackagingJob` operation
    pub struct StartModelPackagingJob<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::start_model_packaging_job_input::Builder,
    }

    impl<C> StartModelPackagingJob<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::StartModelPackagingJobOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.model_version(inp);
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_model_version(inp);
            self
        }
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.job_name(inp);
            self
        }
        pub fn set_job_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_job_name(inp);
            self
        }
        pub fn configuration(mut self, inp: crate::model::ModelPackagingConfiguration) -> Self {
            self.inner = self.inner.configuration(inp);
            self
        }
        pub fn set_configuration(
            mut self,
            inp: Option<crate::model::ModelPackagingConfiguration>,
        ) -> Self {
            self.inner = self.inner.set_configuration(inp);
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `StopModel` operation
    pub struct StopModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::stop_model_input::Builder,
    }

    impl<C> StopModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::StopModelOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.model_version(inp);
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_model_version(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }

    /// Fluent builder for the `TagResource` operation
    pub struct TagResource<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::tag_resource_input::Builder,
    }

    impl<C> TagResource<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::TagResourceOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    /// Fluent builder for the `UntagResource` operation
    pub struct UntagResource<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::untag_resource_input::Builder,
    }

    impl<C> UntagResource<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::UntagResourceOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
        pub fn tag_keys(mut self, inp: Vec<String>) -> Self {
            self.inner = self.inner.tag_keys(inp);
            self
        }
        pub fn set_tag_keys(mut self, inp: Option<Vec<String>>) -> Self {
            self.inner = self.inner.set_tag_keys(inp);
            self
        }
    }

    /// Fluent builder for the `UpdateDatasetEntries` operation
    pub struct UpdateDatasetEntries<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::update_dataset_entries_input::Builder,
    }

    impl<C> UpdateDatasetEntries<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::UpdateDatasetEntriesOutput, SdkError<LookoutVisionError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.project_name(inp);
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_project_name(inp);
            self
        }
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.dataset_type(inp);
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_dataset_type(inp);
            self
        }
        pub fn changes(mut self, inp: smithy_types::Blob) -> Self {
            self.inner = self.inner.changes(inp);
            self
        }
        pub fn set_changes(mut self, inp: Option<smithy_types::Blob>) -> Self {
            self.inner = self.inner.set_changes(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
}
