/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data types shared by Amazon Lookout for Vision operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::{Blob, Instant, UnknownVariantValue};

/// A type of anomaly found in an image and the pixels it covers.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Anomaly {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "PixelAnomaly", default, skip_serializing_if = "Option::is_none")]
    pub pixel_anomaly: Option<PixelAnomaly>,
}
/// See [`Anomaly`](crate::model::Anomaly)
pub mod anomaly {
    /// A builder for [`Anomaly`](crate::model::Anomaly)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
        pixel_anomaly: Option<crate::model::PixelAnomaly>,
    }
    impl Builder {
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn pixel_anomaly(mut self, inp: crate::model::PixelAnomaly) -> Self {
            self.pixel_anomaly = Some(inp);
            self
        }
        pub fn set_pixel_anomaly(mut self, inp: Option<crate::model::PixelAnomaly>) -> Self {
            self.pixel_anomaly = inp;
            self
        }
        /// Consumes the builder and constructs a [`Anomaly`](crate::model::Anomaly)
        pub fn build(self) -> crate::model::Anomaly {
            crate::model::Anomaly {
                name: self.name,
                pixel_anomaly: self.pixel_anomaly,
            }
        }
    }
}
impl Anomaly {
    /// Creates a new builder-style object to manufacture [`Anomaly`](crate::model::Anomaly)
    pub fn builder() -> crate::model::anomaly::Builder {
        crate::model::anomaly::Builder::default()
    }
}

/// The description of a dataset returned by `DescribeDataset`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DatasetDescription {
    #[serde(rename = "ProjectName", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(rename = "DatasetType", default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(
        rename = "LastUpdatedTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub last_updated_timestamp: Option<Instant>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DatasetStatus>,
    #[serde(rename = "StatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(rename = "ImageStats", default, skip_serializing_if = "Option::is_none")]
    pub image_stats: Option<DatasetImageStats>,
}
/// See [`DatasetDescription`](crate::model::DatasetDescription)
pub mod dataset_description {
    /// A builder for [`DatasetDescription`](crate::model::DatasetDescription)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_name: Option<String>,
        dataset_type: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
        last_updated_timestamp: Option<smithy_types::Instant>,
        status: Option<crate::model::DatasetStatus>,
        status_message: Option<String>,
        image_stats: Option<crate::model::DatasetImageStats>,
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
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
            self
        }
        pub fn last_updated_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.last_updated_timestamp = Some(inp);
            self
        }
        pub fn set_last_updated_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::DatasetStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::DatasetStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn status_message(mut self, inp: impl Into<String>) -> Self {
            self.status_message = Some(inp.into());
            self
        }
        pub fn set_status_message(mut self, inp: Option<String>) -> Self {
            self.status_message = inp;
            self
        }
        pub fn image_stats(mut self, inp: crate::model::DatasetImageStats) -> Self {
            self.image_stats = Some(inp);
            self
        }
        pub fn set_image_stats(mut self, inp: Option<crate::model::DatasetImageStats>) -> Self {
            self.image_stats = inp;
            self
        }
        /// Consumes the builder and constructs a [`DatasetDescription`](crate::model::DatasetDescription)
        pub fn build(self) -> crate::model::DatasetDescription {
            crate::model::DatasetDescription {
                project_name: self.project_name,
                dataset_type: self.dataset_type,
                creation_timestamp: self.creation_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
                status: self.status,
                status_message: self.status_message,
                image_stats: self.image_stats,
            }
        }
    }
}
impl DatasetDescription {
    /// Creates a new builder-style object to manufacture [`DatasetDescription`](crate::model::DatasetDescription)
    pub fn builder() -> crate::model::dataset_description::Builder {
        crate::model::dataset_description::Builder::default()
    }
}

/// Location of a SageMaker Ground Truth manifest file.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DatasetGroundTruthManifest {
    #[serde(rename = "S3Object", default, skip_serializing_if = "Option::is_none")]
    pub s3_object: Option<InputS3Object>,
}
/// See [`DatasetGroundTruthManifest`](crate::model::DatasetGroundTruthManifest)
pub mod dataset_ground_truth_manifest {
    /// A builder for [`DatasetGroundTruthManifest`](crate::model::DatasetGroundTruthManifest)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        s3_object: Option<crate::model::InputS3Object>,
    }
    impl Builder {
        pub fn s3_object(mut self, inp: crate::model::InputS3Object) -> Self {
            self.s3_object = Some(inp);
            self
        }
        pub fn set_s3_object(mut self, inp: Option<crate::model::InputS3Object>) -> Self {
            self.s3_object = inp;
            self
        }
        /// Consumes the builder and constructs a [`DatasetGroundTruthManifest`](crate::model::DatasetGroundTruthManifest)
        pub fn build(self) -> crate::model::DatasetGroundTruthManifest {
            crate::model::DatasetGroundTruthManifest {
                s3_object: self.s3_object,
            }
        }
    }
}
impl DatasetGroundTruthManifest {
    /// Creates a new builder-style object to manufacture [`DatasetGroundTruthManifest`](crate::model::DatasetGroundTruthManifest)
    pub fn builder() -> crate::model::dataset_ground_truth_manifest::Builder {
        crate::model::dataset_ground_truth_manifest::Builder::default()
    }
}

/// Image counts for a dataset.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DatasetImageStats {
    #[serde(rename = "Total", default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i32>,
    #[serde(rename = "Labeled", default, skip_serializing_if = "Option::is_none")]
    pub labeled: Option<i32>,
    #[serde(rename = "Normal", default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<i32>,
    #[serde(rename = "Anomaly", default, skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<i32>,
}
/// See [`DatasetImageStats`](crate::model::DatasetImageStats)
pub mod dataset_image_stats {
    /// A builder for [`DatasetImageStats`](crate::model::DatasetImageStats)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        total: Option<i32>,
        labeled: Option<i32>,
        normal: Option<i32>,
        anomaly: Option<i32>,
    }
    impl Builder {
        pub fn total(mut self, inp: i32) -> Self {
            self.total = Some(inp);
            self
        }
        pub fn set_total(mut self, inp: Option<i32>) -> Self {
            self.total = inp;
            self
        }
        pub fn labeled(mut self, inp: i32) -> Self {
            self.labeled = Some(inp);
            self
        }
        pub fn set_labeled(mut self, inp: Option<i32>) -> Self {
            self.labeled = inp;
            self
        }
        pub fn normal(mut self, inp: i32) -> Self {
            self.normal = Some(inp);
            self
        }
        pub fn set_normal(mut self, inp: Option<i32>) -> Self {
            self.normal = inp;
            self
        }
        pub fn anomaly(mut self, inp: i32) -> Self {
            self.anomaly = Some(inp);
            self
        }
        pub fn set_anomaly(mut self, inp: Option<i32>) -> Self {
            self.anomaly = inp;
            self
        }
        /// Consumes the builder and constructs a [`DatasetImageStats`](crate::model::DatasetImageStats)
        pub fn build(self) -> crate::model::DatasetImageStats {
            crate::model::DatasetImageStats {
                total: self.total,
                labeled: self.labeled,
                normal: self.normal,
                anomaly: self.anomaly,
            }
        }
    }
}
impl DatasetImageStats {
    /// Creates a new builder-style object to manufacture [`DatasetImageStats`](crate::model::DatasetImageStats)
    pub fn builder() -> crate::model::dataset_image_stats::Builder {
        crate::model::dataset_image_stats::Builder::default()
    }
}

/// Summary information for a dataset.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DatasetMetadata {
    #[serde(rename = "DatasetType", default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DatasetStatus>,
    #[serde(rename = "StatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}
/// See [`DatasetMetadata`](crate::model::DatasetMetadata)
pub mod dataset_metadata {
    /// A builder for [`DatasetMetadata`](crate::model::DatasetMetadata)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        dataset_type: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
        status: Option<crate::model::DatasetStatus>,
        status_message: Option<String>,
    }
    impl Builder {
        pub fn dataset_type(mut self, inp: impl Into<String>) -> Self {
            self.dataset_type = Some(inp.into());
            self
        }
        pub fn set_dataset_type(mut self, inp: Option<String>) -> Self {
            self.dataset_type = inp;
            self
        }
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::DatasetStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::DatasetStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn status_message(mut self, inp: impl Into<String>) -> Self {
            self.status_message = Some(inp.into());
            self
        }
        pub fn set_status_message(mut self, inp: Option<String>) -> Self {
            self.status_message = inp;
            self
        }
        /// Consumes the builder and constructs a [`DatasetMetadata`](crate::model::DatasetMetadata)
        pub fn build(self) -> crate::model::DatasetMetadata {
            crate::model::DatasetMetadata {
                dataset_type: self.dataset_type,
                creation_timestamp: self.creation_timestamp,
                status: self.status,
                status_message: self.status_message,
            }
        }
    }
}
impl DatasetMetadata {
    /// Creates a new builder-style object to manufacture [`DatasetMetadata`](crate::model::DatasetMetadata)
    pub fn builder() -> crate::model::dataset_metadata::Builder {
        crate::model::dataset_metadata::Builder::default()
    }
}

/// The source used to create a dataset.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DatasetSource {
    #[serde(rename = "GroundTruthManifest", default, skip_serializing_if = "Option::is_none")]
    pub ground_truth_manifest: Option<DatasetGroundTruthManifest>,
}
/// See [`DatasetSource`](crate::model::DatasetSource)
pub mod dataset_source {
    /// A builder for [`DatasetSource`](crate::model::DatasetSource)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        ground_truth_manifest: Option<crate::model::DatasetGroundTruthManifest>,
    }
    impl Builder {
        pub fn ground_truth_manifest(
            mut self,
            inp: crate::model::DatasetGroundTruthManifest,
        ) -> Self {
            self.ground_truth_manifest = Some(inp);
            self
        }
        pub fn set_ground_truth_manifest(
            mut self,
            inp: Option<crate::model::DatasetGroundTruthManifest>,
        ) -> Self {
            self.ground_truth_manifest = inp;
            self
        }
        /// Consumes the builder and constructs a [`DatasetSource`](crate::model::DatasetSource)
        pub fn build(self) -> crate::model::DatasetSource {
            crate::model::DatasetSource {
                ground_truth_manifest: self.ground_truth_manifest,
            }
        }
    }
}
impl DatasetSource {
    /// Creates a new builder-style object to manufacture [`DatasetSource`](crate::model::DatasetSource)
    pub fn builder() -> crate::model::dataset_source::Builder {
        crate::model::dataset_source::Builder::default()
    }
}

/// Status of a dataset or of a dataset update.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DatasetStatus {
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    UpdateInProgress,
    UpdateComplete,
    UpdateFailedRollbackInProgress,
    UpdateFailedRollbackComplete,
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl DatasetStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DatasetStatus::CreateInProgress => "CREATE_IN_PROGRESS",
            DatasetStatus::CreateComplete => "CREATE_COMPLETE",
            DatasetStatus::CreateFailed => "CREATE_FAILED",
            DatasetStatus::UpdateInProgress => "UPDATE_IN_PROGRESS",
            DatasetStatus::UpdateComplete => "UPDATE_COMPLETE",
            DatasetStatus::UpdateFailedRollbackInProgress => "UPDATE_FAILED_ROLLBACK_IN_PROGRESS",
            DatasetStatus::UpdateFailedRollbackComplete => "UPDATE_FAILED_ROLLBACK_COMPLETE",
            DatasetStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
            DatasetStatus::DeleteComplete => "DELETE_COMPLETE",
            DatasetStatus::DeleteFailed => "DELETE_FAILED",
            DatasetStatus::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &[
            "CREATE_IN_PROGRESS",
            "CREATE_COMPLETE",
            "CREATE_FAILED",
            "UPDATE_IN_PROGRESS",
            "UPDATE_COMPLETE",
            "UPDATE_FAILED_ROLLBACK_IN_PROGRESS",
            "UPDATE_FAILED_ROLLBACK_COMPLETE",
            "DELETE_IN_PROGRESS",
            "DELETE_COMPLETE",
            "DELETE_FAILED",
        ]
    }
}
impl<'a> From<&'a str> for DatasetStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "CREATE_IN_PROGRESS" => DatasetStatus::CreateInProgress,
            "CREATE_COMPLETE" => DatasetStatus::CreateComplete,
            "CREATE_FAILED" => DatasetStatus::CreateFailed,
            "UPDATE_IN_PROGRESS" => DatasetStatus::UpdateInProgress,
            "UPDATE_COMPLETE" => DatasetStatus::UpdateComplete,
            "UPDATE_FAILED_ROLLBACK_IN_PROGRESS" => DatasetStatus::UpdateFailedRollbackInProgress,
            "UPDATE_FAILED_ROLLBACK_COMPLETE" => DatasetStatus::UpdateFailedRollbackComplete,
            "DELETE_IN_PROGRESS" => DatasetStatus::DeleteInProgress,
            "DELETE_COMPLETE" => DatasetStatus::DeleteComplete,
            "DELETE_FAILED" => DatasetStatus::DeleteFailed,
            other => DatasetStatus::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for DatasetStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DatasetStatus::from(s))
    }
}
impl AsRef<str> for DatasetStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for DatasetStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for DatasetStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(DatasetStatus::from(value.as_str()))
    }
}

/// Prediction for a single image analysed by `DetectAnomalies`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DetectAnomalyResult {
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageSource>,
    #[serde(rename = "IsAnomalous", default, skip_serializing_if = "Option::is_none")]
    pub is_anomalous: Option<bool>,
    #[serde(rename = "Confidence", default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(rename = "Anomalies", default, skip_serializing_if = "Option::is_none")]
    pub anomalies: Option<Vec<Anomaly>>,
    #[serde(
        rename = "AnomalyMask",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::blob_base64",
    )]
    pub anomaly_mask: Option<Blob>,
}
/// See [`DetectAnomalyResult`](crate::model::DetectAnomalyResult)
pub mod detect_anomaly_result {
    /// A builder for [`DetectAnomalyResult`](crate::model::DetectAnomalyResult)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        source: Option<crate::model::ImageSource>,
        is_anomalous: Option<bool>,
        confidence: Option<f32>,
        anomalies: Option<Vec<crate::model::Anomaly>>,
        anomaly_mask: Option<smithy_types::Blob>,
    }
    impl Builder {
        pub fn source(mut self, inp: crate::model::ImageSource) -> Self {
            self.source = Some(inp);
            self
        }
        pub fn set_source(mut self, inp: Option<crate::model::ImageSource>) -> Self {
            self.source = inp;
            self
        }
        pub fn is_anomalous(mut self, inp: bool) -> Self {
            self.is_anomalous = Some(inp);
            self
        }
        pub fn set_is_anomalous(mut self, inp: Option<bool>) -> Self {
            self.is_anomalous = inp;
            self
        }
        pub fn confidence(mut self, inp: f32) -> Self {
            self.confidence = Some(inp);
            self
        }
        pub fn set_confidence(mut self, inp: Option<f32>) -> Self {
            self.confidence = inp;
            self
        }
        pub fn anomalies(mut self, inp: Vec<crate::model::Anomaly>) -> Self {
            self.anomalies = Some(inp);
            self
        }
        pub fn set_anomalies(mut self, inp: Option<Vec<crate::model::Anomaly>>) -> Self {
            self.anomalies = inp;
            self
        }
        pub fn anomaly_mask(mut self, inp: smithy_types::Blob) -> Self {
            self.anomaly_mask = Some(inp);
            self
        }
        pub fn set_anomaly_mask(mut self, inp: Option<smithy_types::Blob>) -> Self {
            self.anomaly_mask = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectAnomalyResult`](crate::model::DetectAnomalyResult)
        pub fn build(self) -> crate::model::DetectAnomalyResult {
            crate::model::DetectAnomalyResult {
                source: self.source,
                is_anomalous: self.is_anomalous,
                confidence: self.confidence,
                anomalies: self.anomalies,
                anomaly_mask: self.anomaly_mask,
            }
        }
    }
}
impl DetectAnomalyResult {
    /// Creates a new builder-style object to manufacture [`DetectAnomalyResult`](crate::model::DetectAnomalyResult)
    pub fn builder() -> crate::model::detect_anomaly_result::Builder {
        crate::model::detect_anomaly_result::Builder::default()
    }
}

/// Settings for an AWS IoT Greengrass component built from a model.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GreengrassConfiguration {
    #[serde(rename = "CompilerOptions", default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<String>,
    #[serde(rename = "TargetDevice", default, skip_serializing_if = "Option::is_none")]
    pub target_device: Option<TargetDevice>,
    #[serde(rename = "TargetPlatform", default, skip_serializing_if = "Option::is_none")]
    pub target_platform: Option<TargetPlatform>,
    #[serde(rename = "S3OutputLocation", default, skip_serializing_if = "Option::is_none")]
    pub s3_output_location: Option<S3Location>,
    #[serde(rename = "ComponentName", default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(rename = "ComponentVersion", default, skip_serializing_if = "Option::is_none")]
    pub component_version: Option<String>,
    #[serde(rename = "ComponentDescription", default, skip_serializing_if = "Option::is_none")]
    pub component_description: Option<String>,
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
/// See [`GreengrassConfiguration`](crate::model::GreengrassConfiguration)
pub mod greengrass_configuration {
    /// A builder for [`GreengrassConfiguration`](crate::model::GreengrassConfiguration)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        compiler_options: Option<String>,
        target_device: Option<crate::model::TargetDevice>,
        target_platform: Option<crate::model::TargetPlatform>,
        s3_output_location: Option<crate::model::S3Location>,
        component_name: Option<String>,
        component_version: Option<String>,
        component_description: Option<String>,
        tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn compiler_options(mut self, inp: impl Into<String>) -> Self {
            self.compiler_options = Some(inp.into());
            self
        }
        pub fn set_compiler_options(mut self, inp: Option<String>) -> Self {
            self.compiler_options = inp;
            self
        }
        pub fn target_device(mut self, inp: crate::model::TargetDevice) -> Self {
            self.target_device = Some(inp);
            self
        }
        pub fn set_target_device(mut self, inp: Option<crate::model::TargetDevice>) -> Self {
            self.target_device = inp;
            self
        }
        pub fn target_platform(mut self, inp: crate::model::TargetPlatform) -> Self {
            self.target_platform = Some(inp);
            self
        }
        pub fn set_target_platform(mut self, inp: Option<crate::model::TargetPlatform>) -> Self {
            self.target_platform = inp;
            self
        }
        pub fn s3_output_location(mut self, inp: crate::model::S3Location) -> Self {
            self.s3_output_location = Some(inp);
            self
        }
        pub fn set_s3_output_location(mut self, inp: Option<crate::model::S3Location>) -> Self {
            self.s3_output_location = inp;
            self
        }
        pub fn component_name(mut self, inp: impl Into<String>) -> Self {
            self.component_name = Some(inp.into());
            self
        }
        pub fn set_component_name(mut self, inp: Option<String>) -> Self {
            self.component_name = inp;
            self
        }
        pub fn component_version(mut self, inp: impl Into<String>) -> Self {
            self.component_version = Some(inp.into());
            self
        }
        pub fn set_component_version(mut self, inp: Option<String>) -> Self {
            self.component_version = inp;
            self
        }
        pub fn component_description(mut self, inp: impl Into<String>) -> Self {
            self.component_description = Some(inp.into());
            self
        }
        pub fn set_component_description(mut self, inp: Option<String>) -> Self {
            self.component_description = inp;
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
        /// Consumes the builder and constructs a [`GreengrassConfiguration`](crate::model::GreengrassConfiguration)
        pub fn build(self) -> crate::model::GreengrassConfiguration {
            crate::model::GreengrassConfiguration {
                compiler_options: self.compiler_options,
                target_device: self.target_device,
                target_platform: self.target_platform,
                s3_output_location: self.s3_output_location,
                component_name: self.component_name,
                component_version: self.component_version,
                component_description: self.component_description,
                tags: self.tags,
            }
        }
    }
}
impl GreengrassConfiguration {
    /// Creates a new builder-style object to manufacture [`GreengrassConfiguration`](crate::model::GreengrassConfiguration)
    pub fn builder() -> crate::model::greengrass_configuration::Builder {
        crate::model::greengrass_configuration::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GreengrassOutputDetails {
    #[serde(rename = "ComponentVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub component_version_arn: Option<String>,
    #[serde(rename = "ComponentName", default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(rename = "ComponentVersion", default, skip_serializing_if = "Option::is_none")]
    pub component_version: Option<String>,
}
/// See [`GreengrassOutputDetails`](crate::model::GreengrassOutputDetails)
pub mod greengrass_output_details {
    /// A builder for [`GreengrassOutputDetails`](crate::model::GreengrassOutputDetails)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        component_version_arn: Option<String>,
        component_name: Option<String>,
        component_version: Option<String>,
    }
    impl Builder {
        pub fn component_version_arn(mut self, inp: impl Into<String>) -> Self {
            self.component_version_arn = Some(inp.into());
            self
        }
        pub fn set_component_version_arn(mut self, inp: Option<String>) -> Self {
            self.component_version_arn = inp;
            self
        }
        pub fn component_name(mut self, inp: impl Into<String>) -> Self {
            self.component_name = Some(inp.into());
            self
        }
        pub fn set_component_name(mut self, inp: Option<String>) -> Self {
            self.component_name = inp;
            self
        }
        pub fn component_version(mut self, inp: impl Into<String>) -> Self {
            self.component_version = Some(inp.into());
            self
        }
        pub fn set_component_version(mut self, inp: Option<String>) -> Self {
            self.component_version = inp;
            self
        }
        /// Consumes the builder and constructs a [`GreengrassOutputDetails`](crate::model::GreengrassOutputDetails)
        pub fn build(self) -> crate::model::GreengrassOutputDetails {
            crate::model::GreengrassOutputDetails {
                component_version_arn: self.component_version_arn,
                component_name: self.component_name,
                component_version: self.component_version,
            }
        }
    }
}
impl GreengrassOutputDetails {
    /// Creates a new builder-style object to manufacture [`GreengrassOutputDetails`](crate::model::GreengrassOutputDetails)
    pub fn builder() -> crate::model::greengrass_output_details::Builder {
        crate::model::greengrass_output_details::Builder::default()
    }
}

/// The source of an image analysed by `DetectAnomalies`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ImageSource {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}
/// See [`ImageSource`](crate::model::ImageSource)
pub mod image_source {
    /// A builder for [`ImageSource`](crate::model::ImageSource)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        r#type: Option<String>,
    }
    impl Builder {
        pub fn r#type(mut self, inp: impl Into<String>) -> Self {
            self.r#type = Some(inp.into());
            self
        }
        pub fn set_type(mut self, inp: Option<String>) -> Self {
            self.r#type = inp;
            self
        }
        /// Consumes the builder and constructs a [`ImageSource`](crate::model::ImageSource)
        pub fn build(self) -> crate::model::ImageSource {
            crate::model::ImageSource {
                r#type: self.r#type,
            }
        }
    }
}
impl ImageSource {
    /// Creates a new builder-style object to manufacture [`ImageSource`](crate::model::ImageSource)
    pub fn builder() -> crate::model::image_source::Builder {
        crate::model::image_source::Builder::default()
    }
}

/// An S3 object used as input.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InputS3Object {
    #[serde(rename = "Bucket", default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "VersionId", default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}
/// See [`InputS3Object`](crate::model::InputS3Object)
pub mod input_s3_object {
    /// A builder for [`InputS3Object`](crate::model::InputS3Object)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        bucket: Option<String>,
        key: Option<String>,
        version_id: Option<String>,
    }
    impl Builder {
        pub fn bucket(mut self, inp: impl Into<String>) -> Self {
            self.bucket = Some(inp.into());
            self
        }
        pub fn set_bucket(mut self, inp: Option<String>) -> Self {
            self.bucket = inp;
            self
        }
        pub fn key(mut self, inp: impl Into<String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: Option<String>) -> Self {
            self.key = inp;
            self
        }
        pub fn version_id(mut self, inp: impl Into<String>) -> Self {
            self.version_id = Some(inp.into());
            self
        }
        pub fn set_version_id(mut self, inp: Option<String>) -> Self {
            self.version_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`InputS3Object`](crate::model::InputS3Object)
        pub fn build(self) -> crate::model::InputS3Object {
            crate::model::InputS3Object {
                bucket: self.bucket,
                key: self.key,
                version_id: self.version_id,
            }
        }
    }
}
impl InputS3Object {
    /// Creates a new builder-style object to manufacture [`InputS3Object`](crate::model::InputS3Object)
    pub fn builder() -> crate::model::input_s3_object::Builder {
        crate::model::input_s3_object::Builder::default()
    }
}

/// The description of a model version returned by `DescribeModel`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelDescription {
    #[serde(rename = "ModelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "ModelArn", default, skip_serializing_if = "Option::is_none")]
    pub model_arn: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(rename = "StatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(rename = "Performance", default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<ModelPerformance>,
    #[serde(rename = "OutputConfig", default, skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,
    #[serde(rename = "EvaluationManifest", default, skip_serializing_if = "Option::is_none")]
    pub evaluation_manifest: Option<OutputS3Object>,
    #[serde(rename = "EvaluationResult", default, skip_serializing_if = "Option::is_none")]
    pub evaluation_result: Option<OutputS3Object>,
    #[serde(
        rename = "EvaluationEndTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub evaluation_end_timestamp: Option<Instant>,
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "MinInferenceUnits", default, skip_serializing_if = "Option::is_none")]
    pub min_inference_units: Option<i32>,
    #[serde(rename = "MaxInferenceUnits", default, skip_serializing_if = "Option::is_none")]
    pub max_inference_units: Option<i32>,
}
/// See [`ModelDescription`](crate::model::ModelDescription)
pub mod model_description {
    /// A builder for [`ModelDescription`](crate::model::ModelDescription)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        model_version: Option<String>,
        model_arn: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
        description: Option<String>,
        status: Option<crate::model::ModelStatus>,
        status_message: Option<String>,
        performance: Option<crate::model::ModelPerformance>,
        output_config: Option<crate::model::OutputConfig>,
        evaluation_manifest: Option<crate::model::OutputS3Object>,
        evaluation_result: Option<crate::model::OutputS3Object>,
        evaluation_end_timestamp: Option<smithy_types::Instant>,
        kms_key_id: Option<String>,
        min_inference_units: Option<i32>,
        max_inference_units: Option<i32>,
    }
    impl Builder {
        pub fn model_version(mut self, inp: impl Into<String>) -> Self {
            self.model_version = Some(inp.into());
            self
        }
        pub fn set_model_version(mut self, inp: Option<String>) -> Self {
            self.model_version = inp;
            self
        }
        pub fn model_arn(mut self, inp: impl Into<String>) -> Self {
            self.model_arn = Some(inp.into());
            self
        }
        pub fn set_model_arn(mut self, inp: Option<String>) -> Self {
            self.model_arn = inp;
            self
        }
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
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
        pub fn status(mut self, inp: crate::model::ModelStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::ModelStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn status_message(mut self, inp: impl Into<String>) -> Self {
            self.status_message = Some(inp.into());
            self
        }
        pub fn set_status_message(mut self, inp: Option<String>) -> Self {
            self.status_message = inp;
            self
        }
        pub fn performance(mut self, inp: crate::model::ModelPerformance) -> Self {
            self.performance = Some(inp);
            self
        }
        pub fn set_performance(mut self, inp: Option<crate::model::ModelPerformance>) -> Self {
            self.performance = inp;
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
        pub fn evaluation_manifest(mut self, inp: crate::model::OutputS3Object) -> Self {
            self.evaluation_manifest = Some(inp);
            self
        }
        pub fn set_evaluation_manifest(
            mut self,
            inp: Option<crate::model::OutputS3Object>,
        ) -> Self {
            self.evaluation_manifest = inp;
            self
        }
        pub fn evaluation_result(mut self, inp: crate::model::OutputS3Object) -> Self {
            self.evaluation_result = Some(inp);
            self
        }
        pub fn set_evaluation_result(mut self, inp: Option<crate::model::OutputS3Object>) -> Self {
            self.evaluation_result = inp;
            self
        }
        pub fn evaluation_end_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.evaluation_end_timestamp = Some(inp);
            self
        }
        pub fn set_evaluation_end_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.evaluation_end_timestamp = inp;
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
        pub fn min_inference_units(mut self, inp: i32) -> Self {
            self.min_inference_units = Some(inp);
            self
        }
        pub fn set_min_inference_units(mut self, inp: Option<i32>) -> Self {
            self.min_inference_units = inp;
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
        /// Consumes the builder and constructs a [`ModelDescription`](crate::model::ModelDescription)
        pub fn build(self) -> crate::model::ModelDescription {
            crate::model::ModelDescription {
                model_version: self.model_version,
                model_arn: self.model_arn,
                creation_timestamp: self.creation_timestamp,
                description: self.description,
                status: self.status,
                status_message: self.status_message,
                performance: self.performance,
                output_config: self.output_config,
                evaluation_manifest: self.evaluation_manifest,
                evaluation_result: self.evaluation_result,
                evaluation_end_timestamp: self.evaluation_end_timestamp,
                kms_key_id: self.kms_key_id,
                min_inference_units: self.min_inference_units,
                max_inference_units: self.max_inference_units,
            }
        }
    }
}
impl ModelDescription {
    /// Creates a new builder-style object to manufacture [`ModelDescription`](crate::model::ModelDescription)
    pub fn builder() -> crate::model::model_description::Builder {
        crate::model::model_description::Builder::default()
    }
}

/// Hosting status returned when a model is started or stopped.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModelHostingStatus {
    StartingHosting,
    Hosted,
    HostingFailed,
    StoppingHosting,
    SystemUpdating,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl ModelHostingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModelHostingStatus::StartingHosting => "STARTING_HOSTING",
            ModelHostingStatus::Hosted => "HOSTED",
            ModelHostingStatus::HostingFailed => "HOSTING_FAILED",
            ModelHostingStatus::StoppingHosting => "STOPPING_HOSTING",
            ModelHostingStatus::SystemUpdating => "SYSTEM_UPDATING",
            ModelHostingStatus::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["STARTING_HOSTING", "HOSTED", "HOSTING_FAILED", "STOPPING_HOSTING", "SYSTEM_UPDATING"]
    }
}
impl<'a> From<&'a str> for ModelHostingStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "STARTING_HOSTING" => ModelHostingStatus::StartingHosting,
            "HOSTED" => ModelHostingStatus::Hosted,
            "HOSTING_FAILED" => ModelHostingStatus::HostingFailed,
            "STOPPING_HOSTING" => ModelHostingStatus::StoppingHosting,
            "SYSTEM_UPDATING" => ModelHostingStatus::SystemUpdating,
            other => ModelHostingStatus::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for ModelHostingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelHostingStatus::from(s))
    }
}
impl AsRef<str> for ModelHostingStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ModelHostingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ModelHostingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ModelHostingStatus::from(value.as_str()))
    }
}

/// Summary information for a model version.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelMetadata {
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(rename = "ModelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "ModelArn", default, skip_serializing_if = "Option::is_none")]
    pub model_arn: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(rename = "StatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(rename = "Performance", default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<ModelPerformance>,
}
/// See [`ModelMetadata`](crate::model::ModelMetadata)
pub mod model_metadata {
    /// A builder for [`ModelMetadata`](crate::model::ModelMetadata)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        creation_timestamp: Option<smithy_types::Instant>,
        model_version: Option<String>,
        model_arn: Option<String>,
        description: Option<String>,
        status: Option<crate::model::ModelStatus>,
        status_message: Option<String>,
        performance: Option<crate::model::ModelPerformance>,
    }
    impl Builder {
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
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
        pub fn model_arn(mut self, inp: impl Into<String>) -> Self {
            self.model_arn = Some(inp.into());
            self
        }
        pub fn set_model_arn(mut self, inp: Option<String>) -> Self {
            self.model_arn = inp;
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
        pub fn status(mut self, inp: crate::model::ModelStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::ModelStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn status_message(mut self, inp: impl Into<String>) -> Self {
            self.status_message = Some(inp.into());
            self
        }
        pub fn set_status_message(mut self, inp: Option<String>) -> Self {
            self.status_message = inp;
            self
        }
        pub fn performance(mut self, inp: crate::model::ModelPerformance) -> Self {
            self.performance = Some(inp);
            self
        }
        pub fn set_performance(mut self, inp: Option<crate::model::ModelPerformance>) -> Self {
            self.performance = inp;
            self
        }
        /// Consumes the builder and constructs a [`ModelMetadata`](crate::model::ModelMetadata)
        pub fn build(self) -> crate::model::ModelMetadata {
            crate::model::ModelMetadata {
                creation_timestamp: self.creation_timestamp,
                model_version: self.model_version,
                model_arn: self.model_arn,
                description: self.description,
                status: self.status,
                status_message: self.status_message,
                performance: self.performance,
            }
        }
    }
}
impl ModelMetadata {
    /// Creates a new builder-style object to manufacture [`ModelMetadata`](crate::model::ModelMetadata)
    pub fn builder() -> crate::model::model_metadata::Builder {
        crate::model::model_metadata::Builder::default()
    }
}

/// Configuration of a model packaging job.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelPackagingConfiguration {
    #[serde(rename = "Greengrass", default, skip_serializing_if = "Option::is_none")]
    pub greengrass: Option<GreengrassConfiguration>,
}
/// See [`ModelPackagingConfiguration`](crate::model::ModelPackagingConfiguration)
pub mod model_packaging_configuration {
    /// A builder for [`ModelPackagingConfiguration`](crate::model::ModelPackagingConfiguration)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        greengrass: Option<crate::model::GreengrassConfiguration>,
    }
    impl Builder {
        pub fn greengrass(mut self, inp: crate::model::GreengrassConfiguration) -> Self {
            self.greengrass = Some(inp);
            self
        }
        pub fn set_greengrass(
            mut self,
            inp: Option<crate::model::GreengrassConfiguration>,
        ) -> Self {
            self.greengrass = inp;
            self
        }
        /// Consumes the builder and constructs a [`ModelPackagingConfiguration`](crate::model::ModelPackagingConfiguration)
        pub fn build(self) -> crate::model::ModelPackagingConfiguration {
            crate::model::ModelPackagingConfiguration {
                greengrass: self.greengrass,
            }
        }
    }
}
impl ModelPackagingConfiguration {
    /// Creates a new builder-style object to manufacture [`ModelPackagingConfiguration`](crate::model::ModelPackagingConfiguration)
    pub fn builder() -> crate::model::model_packaging_configuration::Builder {
        crate::model::model_packaging_configuration::Builder::default()
    }
}

/// The description of a model packaging job.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelPackagingDescription {
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(rename = "ProjectName", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(rename = "ModelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(
        rename = "ModelPackagingConfiguration",
        default,
        skip_serializing_if = "Option::is_none",
    )]
    pub model_packaging_configuration: Option<ModelPackagingConfiguration>,
    #[serde(
        rename = "ModelPackagingJobDescription",
        default,
        skip_serializing_if = "Option::is_none",
    )]
    pub model_packaging_job_description: Option<String>,
    #[serde(rename = "ModelPackagingMethod", default, skip_serializing_if = "Option::is_none")]
    pub model_packaging_method: Option<String>,
    #[serde(
        rename = "ModelPackagingOutputDetails",
        default,
        skip_serializing_if = "Option::is_none",
    )]
    pub model_packaging_output_details: Option<ModelPackagingOutputDetails>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelPackagingJobStatus>,
    #[serde(rename = "StatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(
        rename = "LastUpdatedTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub last_updated_timestamp: Option<Instant>,
}
/// See [`ModelPackagingDescription`](crate::model::ModelPackagingDescription)
pub mod model_packaging_description {
    /// A builder for [`ModelPackagingDescription`](crate::model::ModelPackagingDescription)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        job_name: Option<String>,
        project_name: Option<String>,
        model_version: Option<String>,
        model_packaging_configuration: Option<crate::model::ModelPackagingConfiguration>,
        model_packaging_job_description: Option<String>,
        model_packaging_method: Option<String>,
        model_packaging_output_details: Option<crate::model::ModelPackagingOutputDetails>,
        status: Option<crate::model::ModelPackagingJobStatus>,
        status_message: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
        last_updated_timestamp: Option<smithy_types::Instant>,
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
        pub fn model_packaging_configuration(
            mut self,
            inp: crate::model::ModelPackagingConfiguration,
        ) -> Self {
            self.model_packaging_configuration = Some(inp);
            self
        }
        pub fn set_model_packaging_configuration(
            mut self,
            inp: Option<crate::model::ModelPackagingConfiguration>,
        ) -> Self {
            self.model_packaging_configuration = inp;
            self
        }
        pub fn model_packaging_job_description(mut self, inp: impl Into<String>) -> Self {
            self.model_packaging_job_description = Some(inp.into());
            self
        }
        pub fn set_model_packaging_job_description(mut self, inp: Option<String>) -> Self {
            self.model_packaging_job_description = inp;
            self
        }
        pub fn model_packaging_method(mut self, inp: impl Into<String>) -> Self {
            self.model_packaging_method = Some(inp.into());
            self
        }
        pub fn set_model_packaging_method(mut self, inp: Option<String>) -> Self {
            self.model_packaging_method = inp;
            self
        }
        pub fn model_packaging_output_details(
            mut self,
            inp: crate::model::ModelPackagingOutputDetails,
        ) -> Self {
            self.model_packaging_output_details = Some(inp);
            self
        }
        pub fn set_model_packaging_output_details(
            mut self,
            inp: Option<crate::model::ModelPackagingOutputDetails>,
        ) -> Self {
            self.model_packaging_output_details = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::ModelPackagingJobStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::ModelPackagingJobStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn status_message(mut self, inp: impl Into<String>) -> Self {
            self.status_message = Some(inp.into());
            self
        }
        pub fn set_status_message(mut self, inp: Option<String>) -> Self {
            self.status_message = inp;
            self
        }
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
            self
        }
        pub fn last_updated_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.last_updated_timestamp = Some(inp);
            self
        }
        pub fn set_last_updated_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = inp;
            self
        }
        /// Consumes the builder and constructs a [`ModelPackagingDescription`](crate::model::ModelPackagingDescription)
        pub fn build(self) -> crate::model::ModelPackagingDescription {
            crate::model::ModelPackagingDescription {
                job_name: self.job_name,
                project_name: self.project_name,
                model_version: self.model_version,
                model_packaging_configuration: self.model_packaging_configuration,
                model_packaging_job_description: self.model_packaging_job_description,
                model_packaging_method: self.model_packaging_method,
                model_packaging_output_details: self.model_packaging_output_details,
                status: self.status,
                status_message: self.status_message,
                creation_timestamp: self.creation_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
            }
        }
    }
}
impl ModelPackagingDescription {
    /// Creates a new builder-style object to manufacture [`ModelPackagingDescription`](crate::model::ModelPackagingDescription)
    pub fn builder() -> crate::model::model_packaging_description::Builder {
        crate::model::model_packaging_description::Builder::default()
    }
}

/// Summary information for a model packaging job.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelPackagingJobMetadata {
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(rename = "ProjectName", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(rename = "ModelVersion", default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(
        rename = "ModelPackagingJobDescription",
        default,
        skip_serializing_if = "Option::is_none",
    )]
    pub model_packaging_job_description: Option<String>,
    #[serde(rename = "ModelPackagingMethod", default, skip_serializing_if = "Option::is_none")]
    pub model_packaging_method: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelPackagingJobStatus>,
    #[serde(rename = "StatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(
        rename = "LastUpdatedTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub last_updated_timestamp: Option<Instant>,
}
/// See [`ModelPackagingJobMetadata`](crate::model::ModelPackagingJobMetadata)
pub mod model_packaging_job_metadata {
    /// A builder for [`ModelPackagingJobMetadata`](crate::model::ModelPackagingJobMetadata)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        job_name: Option<String>,
        project_name: Option<String>,
        model_version: Option<String>,
        model_packaging_job_description: Option<String>,
        model_packaging_method: Option<String>,
        status: Option<crate::model::ModelPackagingJobStatus>,
        status_message: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
        last_updated_timestamp: Option<smithy_types::Instant>,
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
        pub fn model_packaging_job_description(mut self, inp: impl Into<String>) -> Self {
            self.model_packaging_job_description = Some(inp.into());
            self
        }
        pub fn set_model_packaging_job_description(mut self, inp: Option<String>) -> Self {
            self.model_packaging_job_description = inp;
            self
        }
        pub fn model_packaging_method(mut self, inp: impl Into<String>) -> Self {
            self.model_packaging_method = Some(inp.into());
            self
        }
        pub fn set_model_packaging_method(mut self, inp: Option<String>) -> Self {
            self.model_packaging_method = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::ModelPackagingJobStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::ModelPackagingJobStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn status_message(mut self, inp: impl Into<String>) -> Self {
            self.status_message = Some(inp.into());
            self
        }
        pub fn set_status_message(mut self, inp: Option<String>) -> Self {
            self.status_message = inp;
            self
        }
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
            self
        }
        pub fn last_updated_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.last_updated_timestamp = Some(inp);
            self
        }
        pub fn set_last_updated_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.last_updated_timestamp = inp;
            self
        }
        /// Consumes the builder and constructs a [`ModelPackagingJobMetadata`](crate::model::ModelPackagingJobMetadata)
        pub fn build(self) -> crate::model::ModelPackagingJobMetadata {
            crate::model::ModelPackagingJobMetadata {
                job_name: self.job_name,
                project_name: self.project_name,
                model_version: self.model_version,
                model_packaging_job_description: self.model_packaging_job_description,
                model_packaging_method: self.model_packaging_method,
                status: self.status,
                status_message: self.status_message,
                creation_timestamp: self.creation_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
            }
        }
    }
}
impl ModelPackagingJobMetadata {
    /// Creates a new builder-style object to manufacture [`ModelPackagingJobMetadata`](crate::model::ModelPackagingJobMetadata)
    pub fn builder() -> crate::model::model_packaging_job_metadata::Builder {
        crate::model::model_packaging_job_metadata::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModelPackagingJobStatus {
    Created,
    Running,
    Succeeded,
    Failed,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl ModelPackagingJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModelPackagingJobStatus::Created => "CREATED",
            ModelPackagingJobStatus::Running => "RUNNING",
            ModelPackagingJobStatus::Succeeded => "SUCCEEDED",
            ModelPackagingJobStatus::Failed => "FAILED",
            ModelPackagingJobStatus::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["CREATED", "RUNNING", "SUCCEEDED", "FAILED"]
    }
}
impl<'a> From<&'a str> for ModelPackagingJobStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "CREATED" => ModelPackagingJobStatus::Created,
            "RUNNING" => ModelPackagingJobStatus::Running,
            "SUCCEEDED" => ModelPackagingJobStatus::Succeeded,
            "FAILED" => ModelPackagingJobStatus::Failed,
            other => ModelPackagingJobStatus::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for ModelPackagingJobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelPackagingJobStatus::from(s))
    }
}
impl AsRef<str> for ModelPackagingJobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ModelPackagingJobStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ModelPackagingJobStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ModelPackagingJobStatus::from(value.as_str()))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelPackagingOutputDetails {
    #[serde(rename = "Greengrass", default, skip_serializing_if = "Option::is_none")]
    pub greengrass: Option<GreengrassOutputDetails>,
}
/// See [`ModelPackagingOutputDetails`](crate::model::ModelPackagingOutputDetails)
pub mod model_packaging_output_details {
    /// A builder for [`ModelPackagingOutputDetails`](crate::model::ModelPackagingOutputDetails)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        greengrass: Option<crate::model::GreengrassOutputDetails>,
    }
    impl Builder {
        pub fn greengrass(mut self, inp: crate::model::GreengrassOutputDetails) -> Self {
            self.greengrass = Some(inp);
            self
        }
        pub fn set_greengrass(
            mut self,
            inp: Option<crate::model::GreengrassOutputDetails>,
        ) -> Self {
            self.greengrass = inp;
            self
        }
        /// Consumes the builder and constructs a [`ModelPackagingOutputDetails`](crate::model::ModelPackagingOutputDetails)
        pub fn build(self) -> crate::model::ModelPackagingOutputDetails {
            crate::model::ModelPackagingOutputDetails {
                greengrass: self.greengrass,
            }
        }
    }
}
impl ModelPackagingOutputDetails {
    /// Creates a new builder-style object to manufacture [`ModelPackagingOutputDetails`](crate::model::ModelPackagingOutputDetails)
    pub fn builder() -> crate::model::model_packaging_output_details::Builder {
        crate::model::model_packaging_output_details::Builder::default()
    }
}

/// Evaluation metrics of a trained model.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ModelPerformance {
    #[serde(rename = "F1Score", default, skip_serializing_if = "Option::is_none")]
    pub f1_score: Option<f32>,
    #[serde(rename = "Recall", default, skip_serializing_if = "Option::is_none")]
    pub recall: Option<f32>,
    #[serde(rename = "Precision", default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f32>,
}
/// See [`ModelPerformance`](crate::model::ModelPerformance)
pub mod model_performance {
    /// A builder for [`ModelPerformance`](crate::model::ModelPerformance)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        f1_score: Option<f32>,
        recall: Option<f32>,
        precision: Option<f32>,
    }
    impl Builder {
        pub fn f1_score(mut self, inp: f32) -> Self {
            self.f1_score = Some(inp);
            self
        }
        pub fn set_f1_score(mut self, inp: Option<f32>) -> Self {
            self.f1_score = inp;
            self
        }
        pub fn recall(mut self, inp: f32) -> Self {
            self.recall = Some(inp);
            self
        }
        pub fn set_recall(mut self, inp: Option<f32>) -> Self {
            self.recall = inp;
            self
        }
        pub fn precision(mut self, inp: f32) -> Self {
            self.precision = Some(inp);
            self
        }
        pub fn set_precision(mut self, inp: Option<f32>) -> Self {
            self.precision = inp;
            self
        }
        /// Consumes the builder and constructs a [`ModelPerformance`](crate::model::ModelPerformance)
        pub fn build(self) -> crate::model::ModelPerformance {
            crate::model::ModelPerformance {
                f1_score: self.f1_score,
                recall: self.recall,
                precision: self.precision,
            }
        }
    }
}
impl ModelPerformance {
    /// Creates a new builder-style object to manufacture [`ModelPerformance`](crate::model::ModelPerformance)
    pub fn builder() -> crate::model::model_performance::Builder {
        crate::model::model_performance::Builder::default()
    }
}

/// Training and hosting status of a model version.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModelStatus {
    Training,
    Trained,
    TrainingFailed,
    StartingHosting,
    Hosted,
    HostingFailed,
    StoppingHosting,
    SystemUpdating,
    Deleting,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl ModelStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModelStatus::Training => "TRAINING",
            ModelStatus::Trained => "TRAINED",
            ModelStatus::TrainingFailed => "TRAINING_FAILED",
            ModelStatus::StartingHosting => "STARTING_HOSTING",
            ModelStatus::Hosted => "HOSTED",
            ModelStatus::HostingFailed => "HOSTING_FAILED",
            ModelStatus::StoppingHosting => "STOPPING_HOSTING",
            ModelStatus::SystemUpdating => "SYSTEM_UPDATING",
            ModelStatus::Deleting => "DELETING",
            ModelStatus::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &[
            "TRAINING",
            "TRAINED",
            "TRAINING_FAILED",
            "STARTING_HOSTING",
            "HOSTED",
            "HOSTING_FAILED",
            "STOPPING_HOSTING",
            "SYSTEM_UPDATING",
            "DELETING",
        ]
    }
}
impl<'a> From<&'a str> for ModelStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "TRAINING" => ModelStatus::Training,
            "TRAINED" => ModelStatus::Trained,
            "TRAINING_FAILED" => ModelStatus::TrainingFailed,
            "STARTING_HOSTING" => ModelStatus::StartingHosting,
            "HOSTED" => ModelStatus::Hosted,
            "HOSTING_FAILED" => ModelStatus::HostingFailed,
            "STOPPING_HOSTING" => ModelStatus::StoppingHosting,
            "SYSTEM_UPDATING" => ModelStatus::SystemUpdating,
            "DELETING" => ModelStatus::Deleting,
            other => ModelStatus::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for ModelStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelStatus::from(s))
    }
}
impl AsRef<str> for ModelStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ModelStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ModelStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ModelStatus::from(value.as_str()))
    }
}

/// Where training output is written.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OutputConfig {
    #[serde(rename = "S3Location", default, skip_serializing_if = "Option::is_none")]
    pub s3_location: Option<S3Location>,
}
/// See [`OutputConfig`](crate::model::OutputConfig)
pub mod output_config {
    /// A builder for [`OutputConfig`](crate::model::OutputConfig)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        s3_location: Option<crate::model::S3Location>,
    }
    impl Builder {
        pub fn s3_location(mut self, inp: crate::model::S3Location) -> Self {
            self.s3_location = Some(inp);
            self
        }
        pub fn set_s3_location(mut self, inp: Option<crate::model::S3Location>) -> Self {
            self.s3_location = inp;
            self
        }
        /// Consumes the builder and constructs a [`OutputConfig`](crate::model::OutputConfig)
        pub fn build(self) -> crate::model::OutputConfig {
            crate::model::OutputConfig {
                s3_location: self.s3_location,
            }
        }
    }
}
impl OutputConfig {
    /// Creates a new builder-style object to manufacture [`OutputConfig`](crate::model::OutputConfig)
    pub fn builder() -> crate::model::output_config::Builder {
        crate::model::output_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OutputS3Object {
    #[serde(rename = "Bucket", default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
/// See [`OutputS3Object`](crate::model::OutputS3Object)
pub mod output_s3_object {
    /// A builder for [`OutputS3Object`](crate::model::OutputS3Object)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        bucket: Option<String>,
        key: Option<String>,
    }
    impl Builder {
        pub fn bucket(mut self, inp: impl Into<String>) -> Self {
            self.bucket = Some(inp.into());
            self
        }
        pub fn set_bucket(mut self, inp: Option<String>) -> Self {
            self.bucket = inp;
            self
        }
        pub fn key(mut self, inp: impl Into<String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: Option<String>) -> Self {
            self.key = inp;
            self
        }
        /// Consumes the builder and constructs a [`OutputS3Object`](crate::model::OutputS3Object)
        pub fn build(self) -> crate::model::OutputS3Object {
            crate::model::OutputS3Object {
                bucket: self.bucket,
                key: self.key,
            }
        }
    }
}
impl OutputS3Object {
    /// Creates a new builder-style object to manufacture [`OutputS3Object`](crate::model::OutputS3Object)
    pub fn builder() -> crate::model::output_s3_object::Builder {
        crate::model::output_s3_object::Builder::default()
    }
}

/// Area and mask color of an anomaly.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PixelAnomaly {
    #[serde(rename = "TotalPercentageArea", default, skip_serializing_if = "Option::is_none")]
    pub total_percentage_area: Option<f32>,
    #[serde(rename = "Color", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
/// See [`PixelAnomaly`](crate::model::PixelAnomaly)
pub mod pixel_anomaly {
    /// A builder for [`PixelAnomaly`](crate::model::PixelAnomaly)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        total_percentage_area: Option<f32>,
        color: Option<String>,
    }
    impl Builder {
        pub fn total_percentage_area(mut self, inp: f32) -> Self {
            self.total_percentage_area = Some(inp);
            self
        }
        pub fn set_total_percentage_area(mut self, inp: Option<f32>) -> Self {
            self.total_percentage_area = inp;
            self
        }
        pub fn color(mut self, inp: impl Into<String>) -> Self {
            self.color = Some(inp.into());
            self
        }
        pub fn set_color(mut self, inp: Option<String>) -> Self {
            self.color = inp;
            self
        }
        /// Consumes the builder and constructs a [`PixelAnomaly`](crate::model::PixelAnomaly)
        pub fn build(self) -> crate::model::PixelAnomaly {
            crate::model::PixelAnomaly {
                total_percentage_area: self.total_percentage_area,
                color: self.color,
            }
        }
    }
}
impl PixelAnomaly {
    /// Creates a new builder-style object to manufacture [`PixelAnomaly`](crate::model::PixelAnomaly)
    pub fn builder() -> crate::model::pixel_anomaly::Builder {
        crate::model::pixel_anomaly::Builder::default()
    }
}

/// The description of a project returned by `DescribeProject`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectDescription {
    #[serde(rename = "ProjectArn", default, skip_serializing_if = "Option::is_none")]
    pub project_arn: Option<String>,
    #[serde(rename = "ProjectName", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(rename = "Datasets", default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<DatasetMetadata>>,
}
/// See [`ProjectDescription`](crate::model::ProjectDescription)
pub mod project_description {
    /// A builder for [`ProjectDescription`](crate::model::ProjectDescription)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_arn: Option<String>,
        project_name: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
        datasets: Option<Vec<crate::model::DatasetMetadata>>,
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
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
            self
        }
        pub fn datasets(mut self, inp: Vec<crate::model::DatasetMetadata>) -> Self {
            self.datasets = Some(inp);
            self
        }
        pub fn set_datasets(mut self, inp: Option<Vec<crate::model::DatasetMetadata>>) -> Self {
            self.datasets = inp;
            self
        }
        /// Consumes the builder and constructs a [`ProjectDescription`](crate::model::ProjectDescription)
        pub fn build(self) -> crate::model::ProjectDescription {
            crate::model::ProjectDescription {
                project_arn: self.project_arn,
                project_name: self.project_name,
                creation_timestamp: self.creation_timestamp,
                datasets: self.datasets,
            }
        }
    }
}
impl ProjectDescription {
    /// Creates a new builder-style object to manufacture [`ProjectDescription`](crate::model::ProjectDescription)
    pub fn builder() -> crate::model::project_description::Builder {
        crate::model::project_description::Builder::default()
    }
}

/// Summary information for a project.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectMetadata {
    #[serde(rename = "ProjectArn", default, skip_serializing_if = "Option::is_none")]
    pub project_arn: Option<String>,
    #[serde(rename = "ProjectName", default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(
        rename = "CreationTimestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub creation_timestamp: Option<Instant>,
}
/// See [`ProjectMetadata`](crate::model::ProjectMetadata)
pub mod project_metadata {
    /// A builder for [`ProjectMetadata`](crate::model::ProjectMetadata)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        project_arn: Option<String>,
        project_name: Option<String>,
        creation_timestamp: Option<smithy_types::Instant>,
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
        pub fn project_name(mut self, inp: impl Into<String>) -> Self {
            self.project_name = Some(inp.into());
            self
        }
        pub fn set_project_name(mut self, inp: Option<String>) -> Self {
            self.project_name = inp;
            self
        }
        pub fn creation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_timestamp = Some(inp);
            self
        }
        pub fn set_creation_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.creation_timestamp = inp;
            self
        }
        /// Consumes the builder and constructs a [`ProjectMetadata`](crate::model::ProjectMetadata)
        pub fn build(self) -> crate::model::ProjectMetadata {
            crate::model::ProjectMetadata {
                project_arn: self.project_arn,
                project_name: self.project_name,
                creation_timestamp: self.creation_timestamp,
            }
        }
    }
}
impl ProjectMetadata {
    /// Creates a new builder-style object to manufacture [`ProjectMetadata`](crate::model::ProjectMetadata)
    pub fn builder() -> crate::model::project_metadata::Builder {
        crate::model::project_metadata::Builder::default()
    }
}

/// Kind of resource named by a conflict or not-found error.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResourceType {
    Project,
    Dataset,
    Model,
    Trial,
    ModelPackageJob,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Project => "PROJECT",
            ResourceType::Dataset => "DATASET",
            ResourceType::Model => "MODEL",
            ResourceType::Trial => "TRIAL",
            ResourceType::ModelPackageJob => "MODEL_PACKAGE_JOB",
            ResourceType::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["PROJECT", "DATASET", "MODEL", "TRIAL", "MODEL_PACKAGE_JOB"]
    }
}
impl<'a> From<&'a str> for ResourceType {
    fn from(s: &'a str) -> Self {
        match s {
            "PROJECT" => ResourceType::Project,
            "DATASET" => ResourceType::Dataset,
            "MODEL" => ResourceType::Model,
            "TRIAL" => ResourceType::Trial,
            "MODEL_PACKAGE_JOB" => ResourceType::ModelPackageJob,
            other => ResourceType::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for ResourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceType::from(s))
    }
}
impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ResourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ResourceType::from(value.as_str()))
    }
}

/// An S3 bucket and optional key prefix.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct S3Location {
    #[serde(rename = "Bucket", default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(rename = "Prefix", default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}
/// See [`S3Location`](crate::model::S3Location)
pub mod s3_location {
    /// A builder for [`S3Location`](crate::model::S3Location)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        bucket: Option<String>,
        prefix: Option<String>,
    }
    impl Builder {
        pub fn bucket(mut self, inp: impl Into<String>) -> Self {
            self.bucket = Some(inp.into());
            self
        }
        pub fn set_bucket(mut self, inp: Option<String>) -> Self {
            self.bucket = inp;
            self
        }
        pub fn prefix(mut self, inp: impl Into<String>) -> Self {
            self.prefix = Some(inp.into());
            self
        }
        pub fn set_prefix(mut self, inp: Option<String>) -> Self {
            self.prefix = inp;
            self
        }
        /// Consumes the builder and constructs a [`S3Location`](crate::model::S3Location)
        pub fn build(self) -> crate::model::S3Location {
            crate::model::S3Location {
                bucket: self.bucket,
                prefix: self.prefix,
            }
        }
    }
}
impl S3Location {
    /// Creates a new builder-style object to manufacture [`S3Location`](crate::model::S3Location)
    pub fn builder() -> crate::model::s3_location::Builder {
        crate::model::s3_location::Builder::default()
    }
}

/// A key-value pair attached to a model.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Tag {
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }
    impl Builder {
        pub fn key(mut self, inp: impl Into<String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: Option<String>) -> Self {
            self.key = inp;
            self
        }
        pub fn value(mut self, inp: impl Into<String>) -> Self {
            self.value = Some(inp.into());
            self
        }
        pub fn set_value(mut self, inp: Option<String>) -> Self {
            self.value = inp;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TargetDevice {
    JetsonXavier,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl TargetDevice {
    pub fn as_str(&self) -> &str {
        match self {
            TargetDevice::JetsonXavier => "jetson_xavier",
            TargetDevice::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["jetson_xavier"]
    }
}
impl<'a> From<&'a str> for TargetDevice {
    fn from(s: &'a str) -> Self {
        match s {
            "jetson_xavier" => TargetDevice::JetsonXavier,
            other => TargetDevice::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for TargetDevice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TargetDevice::from(s))
    }
}
impl AsRef<str> for TargetDevice {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for TargetDevice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for TargetDevice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(TargetDevice::from(value.as_str()))
    }
}

/// The platform a Greengrass component is compiled for.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TargetPlatform {
    #[serde(rename = "Os", default, skip_serializing_if = "Option::is_none")]
    pub os: Option<TargetPlatformOs>,
    #[serde(rename = "Arch", default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<TargetPlatformArch>,
    #[serde(rename = "Accelerator", default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<TargetPlatformAccelerator>,
}
/// See [`TargetPlatform`](crate::model::TargetPlatform)
pub mod target_platform {
    /// A builder for [`TargetPlatform`](crate::model::TargetPlatform)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        os: Option<crate::model::TargetPlatformOs>,
        arch: Option<crate::model::TargetPlatformArch>,
        accelerator: Option<crate::model::TargetPlatformAccelerator>,
    }
    impl Builder {
        pub fn os(mut self, inp: crate::model::TargetPlatformOs) -> Self {
            self.os = Some(inp);
            self
        }
        pub fn set_os(mut self, inp: Option<crate::model::TargetPlatformOs>) -> Self {
            self.os = inp;
            self
        }
        pub fn arch(mut self, inp: crate::model::TargetPlatformArch) -> Self {
            self.arch = Some(inp);
            self
        }
        pub fn set_arch(mut self, inp: Option<crate::model::TargetPlatformArch>) -> Self {
            self.arch = inp;
            self
        }
        pub fn accelerator(mut self, inp: crate::model::TargetPlatformAccelerator) -> Self {
            self.accelerator = Some(inp);
            self
        }
        pub fn set_accelerator(
            mut self,
            inp: Option<crate::model::TargetPlatformAccelerator>,
        ) -> Self {
            self.accelerator = inp;
            self
        }
        /// Consumes the builder and constructs a [`TargetPlatform`](crate::model::TargetPlatform)
        pub fn build(self) -> crate::model::TargetPlatform {
            crate::model::TargetPlatform {
                os: self.os,
                arch: self.arch,
                accelerator: self.accelerator,
            }
        }
    }
}
impl TargetPlatform {
    /// Creates a new builder-style object to manufacture [`TargetPlatform`](crate::model::TargetPlatform)
    pub fn builder() -> crate::model::target_platform::Builder {
        crate::model::target_platform::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TargetPlatformAccelerator {
    Nvidia,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl TargetPlatformAccelerator {
    pub fn as_str(&self) -> &str {
        match self {
            TargetPlatformAccelerator::Nvidia => "NVIDIA",
            TargetPlatformAccelerator::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["NVIDIA"]
    }
}
impl<'a> From<&'a str> for TargetPlatformAccelerator {
    fn from(s: &'a str) -> Self {
        match s {
            "NVIDIA" => TargetPlatformAccelerator::Nvidia,
            other => TargetPlatformAccelerator::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for TargetPlatformAccelerator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TargetPlatformAccelerator::from(s))
    }
}
impl AsRef<str> for TargetPlatformAccelerator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for TargetPlatformAccelerator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for TargetPlatformAccelerator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(TargetPlatformAccelerator::from(value.as_str()))
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TargetPlatformArch {
    Arm64,
    X8664,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl TargetPlatformArch {
    pub fn as_str(&self) -> &str {
        match self {
            TargetPlatformArch::Arm64 => "ARM64",
            TargetPlatformArch::X8664 => "X86_64",
            TargetPlatformArch::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["ARM64", "X86_64"]
    }
}
impl<'a> From<&'a str> for TargetPlatformArch {
    fn from(s: &'a str) -> Self {
        match s {
            "ARM64" => TargetPlatformArch::Arm64,
            "X86_64" => TargetPlatformArch::X8664,
            other => TargetPlatformArch::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for TargetPlatformArch {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TargetPlatformArch::from(s))
    }
}
impl AsRef<str> for TargetPlatformArch {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for TargetPlatformArch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for TargetPlatformArch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(TargetPlatformArch::from(value.as_str()))
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TargetPlatformOs {
    Linux,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl TargetPlatformOs {
    pub fn as_str(&self) -> &str {
        match self {
            TargetPlatformOs::Linux => "LINUX",
            TargetPlatformOs::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["LINUX"]
    }
}
impl<'a> From<&'a str> for TargetPlatformOs {
    fn from(s: &'a str) -> Self {
        match s {
            "LINUX" => TargetPlatformOs::Linux,
            other => TargetPlatformOs::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for TargetPlatformOs {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TargetPlatformOs::from(s))
    }
}
impl AsRef<str> for TargetPlatformOs {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for TargetPlatformOs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for TargetPlatformOs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(TargetPlatformOs::from(value.as_str()))
    }
}
