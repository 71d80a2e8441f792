/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One response handler per Lookout for Vision operation.

use crate::error::LookoutVisionError;
use crate::output;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use smithy_http::response::ParseStrictResponse;

fn parse_response<T: DeserializeOwned>(
    response: &http::Response<Bytes>,
) -> Result<T, LookoutVisionError> {
    if !response.status().is_success() {
        return Err(crate::error::parse_error(response));
    }
    // operations without output members may answer with an empty body
    let body: &[u8] = if response.body().is_empty() {
        b"{}"
    } else {
        response.body()
    };
    serde_json::from_slice(body).map_err(LookoutVisionError::unhandled)
}

/// Creates a new dataset in a project.
///
/// Response handler for the `CreateDataset` operation.
#[derive(Clone, Debug, Default)]
pub struct CreateDataset {
    _private: (),
}
impl CreateDataset {
    /// Creates a new builder-style object to manufacture [`CreateDatasetInput`](crate::input::CreateDatasetInput)
    pub fn builder() -> crate::input::create_dataset_input::Builder {
        crate::input::create_dataset_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateDataset {
    type Output = Result<output::CreateDatasetOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Starts training a new version of a model.
///
/// Response handler for the `CreateModel` operation.
#[derive(Clone, Debug, Default)]
pub struct CreateModel {
    _private: (),
}
impl CreateModel {
    /// Creates a new builder-style object to manufacture [`CreateModelInput`](crate::input::CreateModelInput)
    pub fn builder() -> crate::input::create_model_input::Builder {
        crate::input::create_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateModel {
    type Output = Result<output::CreateModelOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Creates an empty project.
///
/// Response handler for the `CreateProject` operation.
#[derive(Clone, Debug, Default)]
pub struct CreateProject {
    _private: (),
}
impl CreateProject {
    /// Creates a new builder-style object to manufacture [`CreateProjectInput`](crate::input::CreateProjectInput)
    pub fn builder() -> crate::input::create_project_input::Builder {
        crate::input::create_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateProject {
    type Output = Result<output::CreateProjectOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Deletes a dataset from a project.
///
/// Response handler for the `DeleteDataset` operation.
#[derive(Clone, Debug, Default)]
pub struct DeleteDataset {
    _private: (),
}
impl DeleteDataset {
    /// Creates a new builder-style object to manufacture [`DeleteDatasetInput`](crate::input::DeleteDatasetInput)
    pub fn builder() -> crate::input::delete_dataset_input::Builder {
        crate::input::delete_dataset_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteDataset {
    type Output = Result<output::DeleteDatasetOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Deletes a model version.
///
/// Response handler for the `DeleteModel` operation.
#[derive(Clone, Debug, Default)]
pub struct DeleteModel {
    _private: (),
}
impl DeleteModel {
    /// Creates a new builder-style object to manufacture [`DeleteModelInput`](crate::input::DeleteModelInput)
    pub fn builder() -> crate::input::delete_model_input::Builder {
        crate::input::delete_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteModel {
    type Output = Result<output::DeleteModelOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Deletes a project.
///
/// Response handler for the `DeleteProject` operation.
#[derive(Clone, Debug, Default)]
pub struct DeleteProject {
    _private: (),
}
impl DeleteProject {
    /// Creates a new builder-style object to manufacture [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    pub fn builder() -> crate::input::delete_project_input::Builder {
        crate::input::delete_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteProject {
    type Output = Result<output::DeleteProjectOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Describes a dataset.
///
/// Response handler for the `DescribeDataset` operation.
#[derive(Clone, Debug, Default)]
pub struct DescribeDataset {
    _private: (),
}
impl DescribeDataset {
    /// Creates a new builder-style object to manufacture [`DescribeDatasetInput`](crate::input::DescribeDatasetInput)
    pub fn builder() -> crate::input::describe_dataset_input::Builder {
        crate::input::describe_dataset_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeDataset {
    type Output = Result<output::DescribeDatasetOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Describes a model version.
///
/// Response handler for the `DescribeModel` operation.
#[derive(Clone, Debug, Default)]
pub struct DescribeModel {
    _private: (),
}
impl DescribeModel {
    /// Creates a new builder-style object to manufacture [`DescribeModelInput`](crate::input::DescribeModelInput)
    pub fn builder() -> crate::input::describe_model_input::Builder {
        crate::input::describe_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeModel {
    type Output = Result<output::DescribeModelOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Describes a model packaging job.
///
/// Response handler for the `DescribeModelPackagingJob` operation.
#[derive(Clone, Debug, Default)]
pub struct DescribeModelPackagingJob {
    _private: (),
}
impl DescribeModelPackagingJob {
    /// Creates a new builder-style object to manufacture [`DescribeModelPackagingJobInput`](crate::input::DescribeModelPackagingJobInput)
    pub fn builder() -> crate::input::describe_model_packaging_job_input::Builder {
        crate::input::describe_model_packaging_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeModelPackagingJob {
    type Output = Result<output::DescribeModelPackagingJobOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Describes a project.
///
/// Response handler for the `DescribeProject` operation.
#[derive(Clone, Debug, Default)]
pub struct DescribeProject {
    _private: (),
}
impl DescribeProject {
    /// Creates a new builder-style object to manufacture [`DescribeProjectInput`](crate::input::DescribeProjectInput)
    pub fn builder() -> crate::input::describe_project_input::Builder {
        crate::input::describe_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeProject {
    type Output = Result<output::DescribeProjectOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Detects anomalies in an image using a hosted model.
///
/// Response handler for the `DetectAnomalies` operation.
#[derive(Clone, Debug, Default)]
pub struct DetectAnomalies {
    _private: (),
}
impl DetectAnomalies {
    /// Creates a new builder-style object to manufacture [`DetectAnomaliesInput`](crate::input::DetectAnomaliesInput)
    pub fn builder() -> crate::input::detect_anomalies_input::Builder {
        crate::input::detect_anomalies_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DetectAnomalies {
    type Output = Result<output::DetectAnomaliesOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Lists the JSON Lines entries of a dataset.
///
/// Response handler for the `ListDatasetEntries` operation.
#[derive(Clone, Debug, Default)]
pub struct ListDatasetEntries {
    _private: (),
}
impl ListDatasetEntries {
    /// Creates a new builder-style object to manufacture [`ListDatasetEntriesInput`](crate::input::ListDatasetEntriesInput)
    pub fn builder() -> crate::input::list_dataset_entries_input::Builder {
        crate::input::list_dataset_entries_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListDatasetEntries {
    type Output = Result<output::ListDatasetEntriesOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Lists the model packaging jobs of a project.
///
/// Response handler for the `ListModelPackagingJobs` operation.
#[derive(Clone, Debug, Default)]
pub struct ListModelPackagingJobs {
    _private: (),
}
impl ListModelPackagingJobs {
    /// Creates a new builder-style object to manufacture [`ListModelPackagingJobsInput`](crate::input::ListModelPackagingJobsInput)
    pub fn builder() -> crate::input::list_model_packaging_jobs_input::Builder {
        crate::input::list_model_packaging_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListModelPackagingJobs {
    type Output = Result<output::ListModelPackagingJobsOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Lists the model versions of a project.
///
/// Response handler for the `ListModels` operation.
#[derive(Clone, Debug, Default)]
pub struct ListModels {
    _private: (),
}
impl ListModels {
    /// Creates a new builder-style object to manufacture [`ListModelsInput`](crate::input::ListModelsInput)
    pub fn builder() -> crate::input::list_models_input::Builder {
        crate::input::list_models_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListModels {
    type Output = Result<output::ListModelsOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Lists the projects in the account and region.
///
/// Response handler for the `ListProjects` operation.
#[derive(Clone, Debug, Default)]
pub struct ListProjects {
    _private: (),
}
impl ListProjects {
    /// Creates a new builder-style object to manufacture [`ListProjectsInput`](crate::input::ListProjectsInput)
    pub fn builder() -> crate::input::list_projects_input::Builder {
        crate::input::list_projects_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListProjects {
    type Output = Result<output::ListProjectsOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Lists the tags attached to a model.
///
/// Response handler for the `ListTagsForResource` operation.
#[derive(Clone, Debug, Default)]
pub struct ListTagsForResource {
    _private: (),
}
impl ListTagsForResource {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListTagsForResource {
    type Output = Result<output::ListTagsForResourceOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Starts hosting a model version so that it can detect anomalies.
///
/// Response handler for the `StartModel` operation.
#[derive(Clone, Debug, Default)]
pub struct StartModel {
    _private: (),
}
impl StartModel {
    /// Creates a new builder-style object to manufacture [`StartModelInput`](crate::input::StartModelInput)
    pub fn builder() -> crate::input::start_model_input::Builder {
        crate::input::start_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for StartModel {
    type Output = Result<output::StartModelOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Starts packaging a model version as an AWS IoT Greengrass component.
///
/// Response handler for the `StartModelPackagingJob` operation.
#[derive(Clone, Debug, Default)]
pub struct StartModelPackagingJob {
    _private: (),
}
impl StartModelPackagingJob {
    /// Creates a new builder-style object to manufacture [`StartModelPackagingJobInput`](crate::input::StartModelPackagingJobInput)
    pub fn builder() -> crate::input::start_model_packaging_job_input::Builder {
        crate::input::start_model_packaging_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for StartModelPackagingJob {
    type Output = Result<output::StartModelPackagingJobOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Stops hosting a model version.
///
/// Response handler for the `StopModel` operation.
#[derive(Clone, Debug, Default)]
pub struct StopModel {
    _private: (),
}
impl StopModel {
    /// Creates a new builder-style object to manufacture [`StopModelInput`](crate::input::StopModelInput)
    pub fn builder() -> crate::input::stop_model_input::Builder {
        crate::input::stop_model_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for StopModel {
    type Output = Result<output::StopModelOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Attaches tags to a model.
///
/// Response handler for the `TagResource` operation.
#[derive(Clone, Debug, Default)]
pub struct TagResource {
    _private: (),
}
impl TagResource {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for TagResource {
    type Output = Result<output::TagResourceOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Removes tags from a model.
///
/// Response handler for the `UntagResource` operation.
#[derive(Clone, Debug, Default)]
pub struct UntagResource {
    _private: (),
}
impl UntagResource {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UntagResource {
    type Output = Result<output::UntagResourceOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Adds or updates JSON Lines entries in a dataset.
///
/// Response handler for the `UpdateDatasetEntries` operation.
#[derive(Clone, Debug, Default)]
pub struct UpdateDatasetEntries {
    _private: (),
}
impl UpdateDatasetEntries {
    /// Creates a new builder-style object to manufacture [`UpdateDatasetEntriesInput`](crate::input::UpdateDatasetEntriesInput)
    pub fn builder() -> crate::input::update_dataset_entries_input::Builder {
        crate::input::update_dataset_entries_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateDatasetEntries {
    type Output = Result<output::UpdateDatasetEntriesOutput, LookoutVisionError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}
