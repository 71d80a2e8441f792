/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use serde::Deserialize;

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CreateDatasetOutput {
    #[serde(rename = "DatasetMetadata", default)]
    pub dataset_metadata: Option<crate::model::DatasetMetadata>,
}
/// See [`CreateDatasetOutput`](crate::output::CreateDatasetOutput)
pub mod create_dataset_output {
    /// A builder for [`CreateDatasetOutput`](crate::output::CreateDatasetOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        dataset_metadata: Option<crate::model::DatasetMetadata>,
    }
    impl Builder {
        pub fn dataset_metadata(mut self, inp: crate::model::DatasetMetadata) -> Self {
            self.dataset_metadata = Some(inp);
            self
        }
        pub fn set_dataset_metadata(mut self, inp: Option<crate::model::DatasetMetadata>) -> Self {
            self.dataset_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateDatasetOutput`](crate::output::CreateDatasetOutput)
        pub fn build(self) -> crate::output::CreateDatasetOutput {
            crate::output::CreateDatasetOutput {
                dataset_metadata: self.dataset_metadata,
            }
        }
    }
}
impl CreateDatasetOutput {
    /// Creates a new builder-style object to manufacture [`CreateDatasetOutput`](crate::output::CreateDatasetOutput)
    pub fn builder() -> crate::output::create_dataset_output::Builder {
        crate::output::create_dataset_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CreateModelOutput {
    #[serde(rename = "ModelMetadata", default)]
    pub model_metadata: Option<crate::model::ModelMetadata>,
}
/// See [`CreateModelOutput`](crate::output::CreateModelOutput)
pub mod create_model_output {
    /// A builder for [`CreateModelOutput`](crate::output::CreateModelOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        model_metadata: Option<crate::model::ModelMetadata>,
    }
    impl Builder {
        pub fn model_metadata(mut self, inp: crate::model::ModelMetadata) -> Self {
            self.model_metadata = Some(inp);
            self
        }
        pub fn set_model_metadata(mut self, inp: Option<crate::model::ModelMetadata>) -> Self {
            self.model_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateModelOutput`](crate::output::CreateModelOutput)
        pub fn build(self) -> crate::output::CreateModelOutput {
            crate::output::CreateModelOutput {
                model_metadata: self.model_metadata,
            }
        }
    }
}
impl CreateModelOutput {
    /// Creates a new builder-style object to manufacture [`CreateModelOutput`](crate::output::CreateModelOutput)
    pub fn builder() -> crate::output::create_model_output::Builder {
        crate::output::create_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CreateProjectOutput {
    #[serde(rename = "ProjectMetadata", default)]
    pub project_metadata: Option<crate::model::ProjectMetadata>,
}
/// See [`CreateProjectOutput`](crate::output::CreateProjectOutput)
pub mod create_project_output {
    /// A builder for [`CreateProjectOutput`](crate::output::CreateProjectOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_metadata: Option<crate::model::ProjectMetadata>,
    }
    impl Builder {
        pub fn project_metadata(mut self, inp: crate::model::ProjectMetadata) -> Self {
            self.project_metadata = Some(inp);
            self
        }
        pub fn set_project_metadata(mut self, inp: Option<crate::model::ProjectMetadata>) -> Self {
            self.project_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateProjectOutput`](crate::output::CreateProjectOutput)
        pub fn build(self) -> crate::output::CreateProjectOutput {
            crate::output::CreateProjectOutput {
                project_metadata: self.project_metadata,
            }
        }
    }
}
impl CreateProjectOutput {
    /// Creates a new builder-style object to manufacture [`CreateProjectOutput`](crate::output::CreateProjectOutput)
    pub fn builder() -> crate::output::create_project_output::Builder {
        crate::output::create_project_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeleteDatasetOutput {
}
/// See [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
pub mod delete_dataset_output {
    /// A builder for [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
        pub fn build(self) -> crate::output::DeleteDatasetOutput {
            crate::output::DeleteDatasetOutput {
            }
        }
    }
}
impl DeleteDatasetOutput {
    /// Creates a new builder-style object to manufacture [`DeleteDatasetOutput`](crate::output::DeleteDatasetOutput)
    pub fn builder() -> crate::output::delete_dataset_output::Builder {
        crate::output::delete_dataset_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeleteModelOutput {
    #[serde(rename = "ModelArn", default)]
    pub model_arn: Option<String>,
}
/// See [`DeleteModelOutput`](crate::output::DeleteModelOutput)
pub mod delete_model_output {
    /// A builder for [`DeleteModelOutput`](crate::output::DeleteModelOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        model_arn: Option<String>,
    }
    impl Builder {
        pub fn model_arn(mut self, inp: impl Into<String>) -> Self {
            self.model_arn = Some(inp.into());
            self
        }
        pub fn set_model_arn(mut self, inp: Option<String>) -> Self {
            self.model_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteModelOutput`](crate::output::DeleteModelOutput)
        pub fn build(self) -> crate::output::DeleteModelOutput {
            crate::output::DeleteModelOutput {
                model_arn: self.model_arn,
            }
        }
    }
}
impl DeleteModelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteModelOutput`](crate::output::DeleteModelOutput)
    pub fn builder() -> crate::output::delete_model_output::Builder {
        crate::output::delete_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeleteProjectOutput {
    #[serde(rename = "ProjectArn", default)]
    pub project_arn: Option<String>,
}
/// See [`DeleteProjectOutput`](crate::output::DeleteProjectOutput)
pub mod delete_project_output {
    /// A builder for [`DeleteProjectOutput`](crate::output::DeleteProjectOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_arn: Option<String>,
    }
    impl Builder {
        pub fn project_arn(mut self, inp: impl Into<String>) -> Self {
            self.project_arn = Some(inp.into());
            self
        }
        pub fn set_project_arn(mut self, inp: Option<String>) -> Self {
            self.project_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteProjectOutput`](crate::output::DeleteProjectOutput)
        pub fn build(self) -> crate::output::DeleteProjectOutput {
            crate::output::DeleteProjectOutput {
                project_arn: self.project_arn,
            }
        }
    }
}
impl DeleteProjectOutput {
    /// Creates a new builder-style object to manufacture [`DeleteProjectOutput`](crate::output::DeleteProjectOutput)
    pub fn builder() -> crate::output::delete_project_output::Builder {
        crate::output::delete_project_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DescribeDatasetOutput {
    #[serde(rename = "DatasetDescription", default)]
    pub dataset_description: Option<crate::model::DatasetDescription>,
}
/// See [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
pub mod describe_dataset_output {
    /// A builder for [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        dataset_description: Option<crate::model::DatasetDescription>,
    }
    impl Builder {
        pub fn dataset_description(mut self, inp: crate::model::DatasetDescription) -> Self {
            self.dataset_description = Some(inp);
            self
        }
        pub fn set_dataset_description(
            mut self,
            inp: Option<crate::model::DatasetDescription>,
        ) -> Self {
            self.dataset_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
        pub fn build(self) -> crate::output::DescribeDatasetOutput {
            crate::output::DescribeDatasetOutput {
                dataset_description: self.dataset_description,
            }
        }
    }
}
impl DescribeDatasetOutput {
    /// Creates a new builder-style object to manufacture [`DescribeDatasetOutput`](crate::output::DescribeDatasetOutput)
    pub fn builder() -> crate::output::describe_dataset_output::Builder {
        crate::output::describe_dataset_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DescribeModelOutput {
    #[serde(rename = "ModelDescription", default)]
    pub model_description: Option<crate::model::ModelDescription>,
}
/// See [`DescribeModelOutput`](crate::output::DescribeModelOutput)
pub mod describe_model_output {
    /// A builder for [`DescribeModelOutput`](crate::output::DescribeModelOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        model_description: Option<crate::model::ModelDescription>,
    }
    impl Builder {
        pub fn model_description(mut self, inp: crate::model::ModelDescription) -> Self {
            self.model_description = Some(inp);
            self
        }
        pub fn set_model_description(
            mut self,
            inp: Option<crate::model::ModelDescription>,
        ) -> Self {
            self.model_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeModelOutput`](crate::output::DescribeModelOutput)
        pub fn build(self) -> crate::output::DescribeModelOutput {
            crate::output::DescribeModelOutput {
                model_description: self.model_description,
            }
        }
    }
}
impl DescribeModelOutput {
    /// Creates a new builder-style object to manufacture [`DescribeModelOutput`](crate::output::DescribeModelOutput)
    pub fn builder() -> crate::output::describe_model_output::Builder {
        crate::output::describe_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DescribeModelPackagingJobOutput {
    #[serde(rename = "ModelPackagingDescription", default)]
    pub model_packaging_description: Option<crate::model::ModelPackagingDescription>,
}
/// See [`DescribeModelPackagingJobOutput`](crate::output::DescribeModelPackagingJobOutput)
pub mod describe_model_packaging_job_output {
    /// A builder for [`DescribeModelPackagingJobOutput`](crate::output::DescribeModelPackagingJobOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        model_packaging_description: Option<crate::model::ModelPackagingDescription>,
    }
    impl Builder {
        pub fn model_packaging_description(
            mut self,
            inp: crate::model::ModelPackagingDescription,
        ) -> Self {
            self.model_packaging_description = Some(inp);
            self
        }
        pub fn set_model_packaging_description(
            mut self,
            inp: Option<crate::model::ModelPackagingDescription>,
        ) -> Self {
            self.model_packaging_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeModelPackagingJobOutput`](crate::output::DescribeModelPackagingJobOutput)
        pub fn build(self) -> crate::output::DescribeModelPackagingJobOutput {
            crate::output::DescribeModelPackagingJobOutput {
                model_packaging_description: self.model_packaging_description,
            }
        }
    }
}
impl DescribeModelPackagingJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeModelPackagingJobOutput`](crate::output::DescribeModelPackagingJobOutput)
    pub fn builder() -> crate::output::describe_model_packaging_job_output::Builder {
        crate::output::describe_model_packaging_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DescribeProjectOutput {
    #[serde(rename = "ProjectDescription", default)]
    pub project_description: Option<crate::model::ProjectDescription>,
}
/// See [`DescribeProjectOutput`](crate::output::DescribeProjectOutput)
pub mod describe_project_output {
    /// A builder for [`DescribeProjectOutput`](crate::output::DescribeProjectOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_description: Option<crate::model::ProjectDescription>,
    }
    impl Builder {
        pub fn project_description(mut self, inp: crate::model::ProjectDescription) -> Self {
            self.project_description = Some(inp);
            self
        }
        pub fn set_project_description(
            mut self,
            inp: Option<crate::model::ProjectDescription>,
        ) -> Self {
            self.project_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeProjectOutput`](crate::output::DescribeProjectOutput)
        pub fn build(self) -> crate::output::DescribeProjectOutput {
            crate::output::DescribeProjectOutput {
                project_description: self.project_description,
            }
        }
    }
}
impl DescribeProjectOutput {
    /// Creates a new builder-style object to manufacture [`DescribeProjectOutput`](crate::output::DescribeProjectOutput)
    pub fn builder() -> crate::output::describe_project_output::Builder {
        crate::output::describe_project_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DetectAnomaliesOutput {
    #[serde(rename = "DetectAnomalyResult", default)]
    pub detect_anomaly_result: Option<crate::model::DetectAnomalyResult>,
}
/// See [`DetectAnomaliesOutput`](crate::output::DetectAnomaliesOutput)
pub mod detect_anomalies_output {
    /// A builder for [`DetectAnomaliesOutput`](crate::output::DetectAnomaliesOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        detect_anomaly_result: Option<crate::model::DetectAnomalyResult>,
    }
    impl Builder {
        pub fn detect_anomaly_result(mut self, inp: crate::model::DetectAnomalyResult) -> Self {
            self.detect_anomaly_result = Some(inp);
            self
        }
        pub fn set_detect_anomaly_result(
            mut self,
            inp: Option<crate::model::DetectAnomalyResult>,
        ) -> Self {
            self.detect_anomaly_result = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectAnomaliesOutput`](crate::output::DetectAnomaliesOutput)
        pub fn build(self) -> crate::output::DetectAnomaliesOutput {
            crate::output::DetectAnomaliesOutput {
                detect_anomaly_result: self.detect_anomaly_result,
            }
        }
    }
}
impl DetectAnomaliesOutput {
    /// Creates a new builder-style object to manufacture [`DetectAnomaliesOutput`](crate::output::DetectAnomaliesOutput)
    pub fn builder() -> crate::output::detect_anomalies_output::Builder {
        crate::output::detect_anomalies_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ListDatasetEntriesOutput {
    #[serde(rename = "DatasetEntries", default)]
    pub dataset_entries: Option<Vec<String>>,
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}
/// See [`ListDatasetEntriesOutput`](crate::output::ListDatasetEntriesOutput)
pub mod list_dataset_entries_output {
    /// A builder for [`ListDatasetEntriesOutput`](crate::output::ListDatasetEntriesOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        dataset_entries: Option<Vec<String>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn dataset_entries(mut self, inp: Vec<String>) -> Self {
            self.dataset_entries = Some(inp);
            self
        }
        pub fn set_dataset_entries(mut self, inp: Option<Vec<String>>) -> Self {
            self.dataset_entries = inp;
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
        /// Consumes the builder and constructs a [`ListDatasetEntriesOutput`](crate::output::ListDatasetEntriesOutput)
        pub fn build(self) -> crate::output::ListDatasetEntriesOutput {
            crate::output::ListDatasetEntriesOutput {
                dataset_entries: self.dataset_entries,
                next_token: self.next_token,
            }
        }
    }
}
impl ListDatasetEntriesOutput {
    /// Creates a new builder-style object to manufacture [`ListDatasetEntriesOutput`](crate::output::ListDatasetEntriesOutput)
    pub fn builder() -> crate::output::list_dataset_entries_output::Builder {
        crate::output::list_dataset_entries_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ListModelPackagingJobsOutput {
    #[serde(rename = "ModelPackagingJobs", default)]
    pub model_packaging_jobs: Option<Vec<crate::model::ModelPackagingJobMetadata>>,
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}
/// See [`ListModelPackagingJobsOutput`](crate::output::ListModelPackagingJobsOutput)
pub mod list_model_packaging_jobs_output {
    /// A builder for [`ListModelPackagingJobsOutput`](crate::output::ListModelPackagingJobsOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        model_packaging_jobs: Option<Vec<crate::model::ModelPackagingJobMetadata>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn model_packaging_jobs(
            mut self,
            inp: Vec<crate::model::ModelPackagingJobMetadata>,
        ) -> Self {
            self.model_packaging_jobs = Some(inp);
            self
        }
        pub fn set_model_packaging_jobs(
            mut self,
            inp: Option<Vec<crate::model::ModelPackagingJobMetadata>>,
        ) -> Self {
            self.model_packaging_jobs = inp;
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
        /// Consumes the builder and constructs a [`ListModelPackagingJobsOutput`](crate::output::ListModelPackagingJobsOutput)
        pub fn build(self) -> crate::output::ListModelPackagingJobsOutput {
            crate::output::ListModelPackagingJobsOutput {
                model_packaging_jobs: self.model_packaging_jobs,
                next_token: self.next_token,
            }
        }
    }
}
impl ListModelPackagingJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListModelPackagingJobsOutput`](crate::output::ListModelPackagingJobsOutput)
    pub fn builder() -> crate::output::list_model_packaging_jobs_output::Builder {
        crate::output::list_model_packaging_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ListModelsOutput {
    #[serde(rename = "Models", default)]
    pub models: Option<Vec<crate::model::ModelMetadata>>,
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}
/// See [`ListModelsOutput`](crate::output::ListModelsOutput)
pub mod list_models_output {
    /// A builder for [`ListModelsOutput`](crate::output::ListModelsOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        models: Option<Vec<crate::model::ModelMetadata>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn models(mut self, inp: Vec<crate::model::ModelMetadata>) -> Self {
            self.models = Some(inp);
            self
        }
        pub fn set_models(mut self, inp: Option<Vec<crate::model::ModelMetadata>>) -> Self {
            self.models = inp;
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
        /// Consumes the builder and constructs a [`ListModelsOutput`](crate::output::ListModelsOutput)
        pub fn build(self) -> crate::output::ListModelsOutput {
            crate::output::ListModelsOutput {
                models: self.models,
                next_token: self.next_token,
            }
        }
    }
}
impl ListModelsOutput {
    /// Creates a new builder-style object to manufacture [`ListModelsOutput`](crate::output::ListModelsOutput)
    pub fn builder() -> crate::output::list_models_output::Builder {
        crate::output::list_models_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ListProjectsOutput {
    #[serde(rename = "Projects", default)]
    pub projects: Option<Vec<crate::model::ProjectMetadata>>,
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}
/// See [`ListProjectsOutput`](crate::output::ListProjectsOutput)
pub mod list_projects_output {
    /// A builder for [`ListProjectsOutput`](crate::output::ListProjectsOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        projects: Option<Vec<crate::model::ProjectMetadata>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn projects(mut self, inp: Vec<crate::model::ProjectMetadata>) -> Self {
            self.projects = Some(inp);
            self
        }
        pub fn set_projects(mut self, inp: Option<Vec<crate::model::ProjectMetadata>>) -> Self {
            self.projects = inp;
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
        /// Consumes the builder and constructs a [`ListProjectsOutput`](crate::output::ListProjectsOutput)
        pub fn build(self) -> crate::output::ListProjectsOutput {
            crate::output::ListProjectsOutput {
                projects: self.projects,
                next_token: self.next_token,
            }
        }
    }
}
impl ListProjectsOutput {
    /// Creates a new builder-style object to manufacture [`ListProjectsOutput`](crate::output::ListProjectsOutput)
    pub fn builder() -> crate::output::list_projects_output::Builder {
        crate::output::list_projects_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ListTagsForResourceOutput {
    #[serde(rename = "Tags", default)]
    pub tags: Option<Vec<crate::model::Tag>>,
}
/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
pub mod list_tags_for_resource_output {
    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                tags: self.tags,
            }
        }
    }
}
impl ListTagsForResourceOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StartModelOutput {
    #[serde(rename = "Status", default)]
    pub status: Option<crate::model::ModelHostingStatus>,
}
/// See [`StartModelOutput`](crate::output::StartModelOutput)
pub mod start_model_output {
    /// A builder for [`StartModelOutput`](crate::output::StartModelOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        status: Option<crate::model::ModelHostingStatus>,
    }
    impl Builder {
        pub fn status(mut self, inp: crate::model::ModelHostingStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::ModelHostingStatus>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartModelOutput`](crate::output::StartModelOutput)
        pub fn build(self) -> crate::output::StartModelOutput {
            crate::output::StartModelOutput {
                status: self.status,
            }
        }
    }
}
impl StartModelOutput {
    /// Creates a new builder-style object to manufacture [`StartModelOutput`](crate::output::StartModelOutput)
    pub fn builder() -> crate::output::start_model_output::Builder {
        crate::output::start_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StartModelPackagingJobOutput {
    #[serde(rename = "JobName", default)]
    pub job_name: Option<String>,
}
/// See [`StartModelPackagingJobOutput`](crate::output::StartModelPackagingJobOutput)
pub mod start_model_packaging_job_output {
    /// A builder for [`StartModelPackagingJobOutput`](crate::output::StartModelPackagingJobOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        job_name: Option<String>,
    }
    impl Builder {
        pub fn job_name(mut self, inp: impl Into<String>) -> Self {
            self.job_name = Some(inp.into());
            self
        }
        pub fn set_job_name(mut self, inp: Option<String>) -> Self {
            self.job_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartModelPackagingJobOutput`](crate::output::StartModelPackagingJobOutput)
        pub fn build(self) -> crate::output::StartModelPackagingJobOutput {
            crate::output::StartModelPackagingJobOutput {
                job_name: self.job_name,
            }
        }
    }
}
impl StartModelPackagingJobOutput {
    /// Creates a new builder-style object to manufacture [`StartModelPackagingJobOutput`](crate::output::StartModelPackagingJobOutput)
    pub fn builder() -> crate::output::start_model_packaging_job_output::Builder {
        crate::output::start_model_packaging_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StopModelOutput {
    #[serde(rename = "Status", default)]
    pub status: Option<crate::model::ModelHostingStatus>,
}
/// See [`StopModelOutput`](crate::output::StopModelOutput)
pub mod stop_model_output {
    /// A builder for [`StopModelOutput`](crate::output::StopModelOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        status: Option<crate::model::ModelHostingStatus>,
    }
    impl Builder {
        pub fn status(mut self, inp: crate::model::ModelHostingStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::ModelHostingStatus>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`StopModelOutput`](crate::output::StopModelOutput)
        pub fn build(self) -> crate::output::StopModelOutput {
            crate::output::StopModelOutput {
                status: self.status,
            }
        }
    }
}
impl StopModelOutput {
    /// Creates a new builder-style object to manufacture [`StopModelOutput`](crate::output::StopModelOutput)
    pub fn builder() -> crate::output::stop_model_output::Builder {
        crate::output::stop_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TagResourceOutput {
}
/// See [`TagResourceOutput`](crate::output::TagResourceOutput)
pub mod tag_resource_output {
    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput)
        pub fn build(self) -> crate::output::TagResourceOutput {
            crate::output::TagResourceOutput {
            }
        }
    }
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput)
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct UntagResourceOutput {
}
/// See [`UntagResourceOutput`](crate::output::UntagResourceOutput)
pub mod untag_resource_output {
    /// A builder for [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UntagResourceOutput`](crate::output::UntagResourceOutput)
        pub fn build(self) -> crate::output::UntagResourceOutput {
            crate::output::UntagResourceOutput {
            }
        }
    }
}
impl UntagResourceOutput {
    /// Creates a new builder-style object to manufacture [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    pub fn builder() -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct UpdateDatasetEntriesOutput {
    #[serde(rename = "Status", default)]
    pub status: Option<crate::model::DatasetStatus>,
}
/// See [`UpdateDatasetEntriesOutput`](crate::output::UpdateDatasetEntriesOutput)
pub mod update_dataset_entries_output {
    /// A builder for [`UpdateDatasetEntriesOutput`](crate::output::UpdateDatasetEntriesOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        status: Option<crate::model::DatasetStatus>,
    }
    impl Builder {
        pub fn status(mut self, inp: crate::model::DatasetStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::DatasetStatus>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateDatasetEntriesOutput`](crate::output::UpdateDatasetEntriesOutput)
        pub fn build(self) -> crate::output::UpdateDatasetEntriesOutput {
            crate::output::UpdateDatasetEntriesOutput {
                status: self.status,
            }
        }
    }
}
impl UpdateDatasetEntriesOutput {
    /// Creates a new builder-style object to manufacture [`UpdateDatasetEntriesOutput`](crate::output::UpdateDatasetEntriesOutput)
    pub fn builder() -> crate::output::update_dataset_entries_output::Builder {
        crate::output::update_dataset_entries_output::Builder::default()
    }
}
