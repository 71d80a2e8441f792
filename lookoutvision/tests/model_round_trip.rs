/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Every model survives serialization followed by deserialization.

use lookoutvision::model::{
    Anomaly, DatasetDescription, DatasetGroundTruthManifest, DatasetImageStats, DatasetMetadata,
    DatasetSource, DatasetStatus, DetectAnomalyResult, GreengrassConfiguration,
    GreengrassOutputDetails, ImageSource, InputS3Object, ModelDescription, ModelHostingStatus,
    ModelMetadata, ModelPackagingConfiguration, ModelPackagingDescription,
    ModelPackagingJobMetadata, ModelPackagingJobStatus, ModelPackagingOutputDetails,
    ModelPerformance, ModelStatus, OutputConfig, OutputS3Object, PixelAnomaly, ProjectDescription,
    ProjectMetadata, ResourceType, S3Location, Tag, TargetDevice, TargetPlatform,
    TargetPlatformAccelerator, TargetPlatformArch, TargetPlatformOs,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use smithy_types::{Blob, Instant};

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

fn instant() -> impl Strategy<Value = Instant> {
    (-2_000_000_000_000_i64..4_000_000_000_000_i64).prop_map(Instant::from_epoch_millis)
}

fn blob() -> impl Strategy<Value = Blob> {
    vec(any::<u8>(), 0..64).prop_map(Blob::new)
}

fn dataset_status() -> impl Strategy<Value = DatasetStatus> {
    prop_oneof![
        select(DatasetStatus::values()).prop_map(DatasetStatus::from),
        "[a-z]{1,8}".prop_map(|name| DatasetStatus::from(name.as_str())),
    ]
}

fn model_hosting_status() -> impl Strategy<Value = ModelHostingStatus> {
    prop_oneof![
        select(ModelHostingStatus::values()).prop_map(ModelHostingStatus::from),
        "[a-z]{1,8}".prop_map(|name| ModelHostingStatus::from(name.as_str())),
    ]
}

fn model_packaging_job_status() -> impl Strategy<Value = ModelPackagingJobStatus> {
    prop_oneof![
        select(ModelPackagingJobStatus::values()).prop_map(ModelPackagingJobStatus::from),
        "[a-z]{1,8}".prop_map(|name| ModelPackagingJobStatus::from(name.as_str())),
    ]
}

fn model_status() -> impl Strategy<Value = ModelStatus> {
    prop_oneof![
        select(ModelStatus::values()).prop_map(ModelStatus::from),
        "[a-z]{1,8}".prop_map(|name| ModelStatus::from(name.as_str())),
    ]
}

fn resource_type() -> impl Strategy<Value = ResourceType> {
    prop_oneof![
        select(ResourceType::values()).prop_map(ResourceType::from),
        "[a-z]{1,8}".prop_map(|name| ResourceType::from(name.as_str())),
    ]
}

fn target_device() -> impl Strategy<Value = TargetDevice> {
    prop_oneof![
        select(TargetDevice::values()).prop_map(TargetDevice::from),
        "[a-z]{1,8}".prop_map(|name| TargetDevice::from(name.as_str())),
    ]
}

fn target_platform_accelerator() -> impl Strategy<Value = TargetPlatformAccelerator> {
    prop_oneof![
        select(TargetPlatformAccelerator::values()).prop_map(TargetPlatformAccelerator::from),
        "[a-z]{1,8}".prop_map(|name| TargetPlatformAccelerator::from(name.as_str())),
    ]
}

fn target_platform_arch() -> impl Strategy<Value = TargetPlatformArch> {
    prop_oneof![
        select(TargetPlatformArch::values()).prop_map(TargetPlatformArch::from),
        "[a-z]{1,8}".prop_map(|name| TargetPlatformArch::from(name.as_str())),
    ]
}

fn target_platform_os() -> impl Strategy<Value = TargetPlatformOs> {
    prop_oneof![
        select(TargetPlatformOs::values()).prop_map(TargetPlatformOs::from),
        "[a-z]{1,8}".prop_map(|name| TargetPlatformOs::from(name.as_str())),
    ]
}

fn anomaly() -> impl Strategy<Value = Anomaly> {
    (option::of(text()), option::of(pixel_anomaly()))
        .prop_map(|(name, pixel_anomaly)| {
            Anomaly::builder()
                .set_name(name)
                .set_pixel_anomaly(pixel_anomaly)
                .build()
        })
}

fn dataset_description() -> impl Strategy<Value = DatasetDescription> {
    (
        (
            option::of(text()),
            option::of(text()),
            option::of(instant()),
            option::of(instant()),
            option::of(dataset_status()),
            option::of(text()),
        ),
        (option::of(dataset_image_stats()),),
    )
        .prop_map(|fields| {
            let (
                (
                    project_name,
                    dataset_type,
                    creation_timestamp,
                    last_updated_timestamp,
                    status,
                    status_message,
                ),
                (
                    image_stats,
                ),
            ) = fields;
            DatasetDescription::builder()
                .set_project_name(project_name)
                .set_dataset_type(dataset_type)
                .set_creation_timestamp(creation_timestamp)
                .set_last_updated_timestamp(last_updated_timestamp)
                .set_status(status)
                .set_status_message(status_message)
                .set_image_stats(image_stats)
                .build()
        })
}

fn dataset_ground_truth_manifest() -> impl Strategy<Value = DatasetGroundTruthManifest> {
    (option::of(input_s3_object()),)
        .prop_map(|(s3_object,)| {
            DatasetGroundTruthManifest::builder()
                .set_s3_object(s3_object)
                .build()
        })
}

fn dataset_image_stats() -> impl Strategy<Value = DatasetImageStats> {
    (
        option::of(any::<i32>()),
        option::of(any::<i32>()),
        option::of(any::<i32>()),
        option::of(any::<i32>()),
    )
        .prop_map(|(total, labeled, normal, anomaly)| {
            DatasetImageStats::builder()
                .set_total(total)
                .set_labeled(labeled)
                .set_normal(normal)
                .set_anomaly(anomaly)
                .build()
        })
}

fn dataset_metadata() -> impl Strategy<Value = DatasetMetadata> {
    (option::of(text()), option::of(instant()), option::of(dataset_status()), option::of(text()))
        .prop_map(|(dataset_type, creation_timestamp, status, status_message)| {
            DatasetMetadata::builder()
                .set_dataset_type(dataset_type)
                .set_creation_timestamp(creation_timestamp)
                .set_status(status)
                .set_status_message(status_message)
                .build()
        })
}

fn dataset_source() -> impl Strategy<Value = DatasetSource> {
    (option::of(dataset_ground_truth_manifest()),)
        .prop_map(|(ground_truth_manifest,)| {
            DatasetSource::builder()
                .set_ground_truth_manifest(ground_truth_manifest)
                .build()
        })
}

fn detect_anomaly_result() -> impl Strategy<Value = DetectAnomalyResult> {
    (
        option::of(image_source()),
        option::of(any::<bool>()),
        option::of(-1.0e6f32..1.0e6f32),
        option::of(vec(anomaly(), 0..3)),
        option::of(blob()),
    )
        .prop_map(|(source, is_anomalous, confidence, anomalies, anomaly_mask)| {
            DetectAnomalyResult::builder()
                .set_source(source)
                .set_is_anomalous(is_anomalous)
                .set_confidence(confidence)
                .set_anomalies(anomalies)
                .set_anomaly_mask(anomaly_mask)
                .build()
        })
}

fn greengrass_configuration() -> impl Strategy<Value = GreengrassConfiguration> {
    (
        (
            option::of(text()),
            option::of(target_device()),
            option::of(target_platform()),
            option::of(s3_location()),
            option::of(text()),
            option::of(text()),
        ),
        (option::of(text()), option::of(vec(tag(), 0..3))),
    )
        .prop_map(|fields| {
            let (
                (
                    compiler_options,
                    target_device,
                    target_platform,
                    s3_output_location,
                    component_name,
                    component_version,
                ),
                (
                    component_description,
                    tags,
                ),
            ) = fields;
            GreengrassConfiguration::builder()
                .set_compiler_options(compiler_options)
                .set_target_device(target_device)
                .set_target_platform(target_platform)
                .set_s3_output_location(s3_output_location)
                .set_component_name(component_name)
                .set_component_version(component_version)
                .set_component_description(component_description)
                .set_tags(tags)
                .build()
        })
}

fn greengrass_output_details() -> impl Strategy<Value = GreengrassOutputDetails> {
    (option::of(text()), option::of(text()), option::of(text()))
        .prop_map(|(component_version_arn, component_name, component_version)| {
            GreengrassOutputDetails::builder()
                .set_component_version_arn(component_version_arn)
                .set_component_name(component_name)
                .set_component_version(component_version)
                .build()
        })
}

fn image_source() -> impl Strategy<Value = ImageSource> {
    Just(())
        .prop_map(|()| {
            ImageSource::builder()
                .build()
        })
}

fn input_s3_object() -> impl Strategy<Value = InputS3Object> {
    (option::of(text()), option::of(text()), option::of(text()))
        .prop_map(|(bucket, key, version_id)| {
            InputS3Object::builder()
                .set_bucket(bucket)
                .set_key(key)
                .set_version_id(version_id)
                .build()
        })
}

fn model_description() -> impl Strategy<Value = ModelDescription> {
    (
        (
            option::of(text()),
            option::of(text()),
            option::of(instant()),
            option::of(text()),
            option::of(model_status()),
            option::of(text()),
        ),
        (
            option::of(model_performance()),
            option::of(output_config()),
            option::of(output_s3_object()),
            option::of(output_s3_object()),
            option::of(instant()),
            option::of(text()),
        ),
        (option::of(any::<i32>()), option::of(any::<i32>())),
    )
        .prop_map(|fields| {
            let (
                (
                    model_version,
                    model_arn,
                    creation_timestamp,
                    description,
                    status,
                    status_message,
                ),
                (
                    performance,
                    output_config,
                    evaluation_manifest,
                    evaluation_result,
                    evaluation_end_timestamp,
                    kms_key_id,
                ),
                (
                    min_inference_units,
                    max_inference_units,
                ),
            ) = fields;
            ModelDescription::builder()
                .set_model_version(model_version)
                .set_model_arn(model_arn)
                .set_creation_timestamp(creation_timestamp)
                .set_description(description)
                .set_status(status)
                .set_status_message(status_message)
                .set_performance(performance)
                .set_output_config(output_config)
                .set_evaluation_manifest(evaluation_manifest)
                .set_evaluation_result(evaluation_result)
                .set_evaluation_end_timestamp(evaluation_end_timestamp)
                .set_kms_key_id(kms_key_id)
                .set_min_inference_units(min_inference_units)
                .set_max_inference_units(max_inference_units)
                .build()
        })
}

fn model_metadata() -> impl Strategy<Value = ModelMetadata> {
    (
        (
            option::of(instant()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(model_status()),
            option::of(text()),
        ),
        (option::of(model_performance()),),
    )
        .prop_map(|fields| {
            let (
                (
                    creation_timestamp,
                    model_version,
                    model_arn,
                    description,
                    status,
                    status_message,
                ),
                (
                    performance,
                ),
            ) = fields;
            ModelMetadata::builder()
                .set_creation_timestamp(creation_timestamp)
                .set_model_version(model_version)
                .set_model_arn(model_arn)
                .set_description(description)
                .set_status(status)
                .set_status_message(status_message)
                .set_performance(performance)
                .build()
        })
}

fn model_packaging_configuration() -> impl Strategy<Value = ModelPackagingConfiguration> {
    (option::of(greengrass_configuration()),)
        .prop_map(|(greengrass,)| {
            ModelPackagingConfiguration::builder()
                .set_greengrass(greengrass)
                .build()
        })
}

fn model_packaging_description() -> impl Strategy<Value = ModelPackagingDescription> {
    (
        (
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(model_packaging_configuration()),
            option::of(text()),
            option::of(text()),
        ),
        (
            option::of(model_packaging_output_details()),
            option::of(model_packaging_job_status()),
            option::of(text()),
            option::of(instant()),
            option::of(instant()),
        ),
    )
        .prop_map(|fields| {
            let (
                (
                    job_name,
                    project_name,
                    model_version,
                    model_packaging_configuration,
                    model_packaging_job_description,
                    model_packaging_method,
                ),
                (
                    model_packaging_output_details,
                    status,
                    status_message,
                    creation_timestamp,
                    last_updated_timestamp,
                ),
            ) = fields;
            ModelPackagingDescription::builder()
                .set_job_name(job_name)
                .set_project_name(project_name)
                .set_model_version(model_version)
                .set_model_packaging_configuration(model_packaging_configuration)
                .set_model_packaging_job_description(model_packaging_job_description)
                .set_model_packaging_method(model_packaging_method)
                .set_model_packaging_output_details(model_packaging_output_details)
                .set_status(status)
                .set_status_message(status_message)
                .set_creation_timestamp(creation_timestamp)
                .set_last_updated_timestamp(last_updated_timestamp)
                .build()
        })
}

fn model_packaging_job_metadata() -> impl Strategy<Value = ModelPackagingJobMetadata> {
    (
        (
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(model_packaging_job_status()),
        ),
        (option::of(text()), option::of(instant()), option::of(instant())),
    )
        .prop_map(|fields| {
            let (
                (
                    job_name,
                    project_name,
                    model_version,
                    model_packaging_job_description,
                    model_packaging_method,
                    status,
                ),
                (
                    status_message,
                    creation_timestamp,
                    last_updated_timestamp,
                ),
            ) = fields;
            ModelPackagingJobMetadata::builder()
                .set_job_name(job_name)
                .set_project_name(project_name)
                .set_model_version(model_version)
                .set_model_packaging_job_description(model_packaging_job_description)
                .set_model_packaging_method(model_packaging_method)
                .set_status(status)
                .set_status_message(status_message)
                .set_creation_timestamp(creation_timestamp)
                .set_last_updated_timestamp(last_updated_timestamp)
                .build()
        })
}

fn model_packaging_output_details() -> impl Strategy<Value = ModelPackagingOutputDetails> {
    (option::of(greengrass_output_details()),)
        .prop_map(|(greengrass,)| {
            ModelPackagingOutputDetails::builder()
                .set_greengrass(greengrass)
                .build()
        })
}

fn model_performance() -> impl Strategy<Value = ModelPerformance> {
    (
        option::of(-1.0e6f32..1.0e6f32),
        option::of(-1.0e6f32..1.0e6f32),
        option::of(-1.0e6f32..1.0e6f32),
    )
        .prop_map(|(f1_score, recall, precision)| {
            ModelPerformance::builder()
                .set_f1_score(f1_score)
                .set_recall(recall)
                .set_precision(precision)
                .build()
        })
}

fn output_config() -> impl Strategy<Value = OutputConfig> {
    (option::of(s3_location()),)
        .prop_map(|(s3_location,)| {
            OutputConfig::builder()
                .set_s3_location(s3_location)
                .build()
        })
}

fn output_s3_object() -> impl Strategy<Value = OutputS3Object> {
    (option::of(text()), option::of(text()))
        .prop_map(|(bucket, key)| {
            OutputS3Object::builder()
                .set_bucket(bucket)
                .set_key(key)
                .build()
        })
}

fn pixel_anomaly() -> impl Strategy<Value = PixelAnomaly> {
    (option::of(-1.0e6f32..1.0e6f32), option::of(text()))
        .prop_map(|(total_percentage_area, color)| {
            PixelAnomaly::builder()
                .set_total_percentage_area(total_percentage_area)
                .set_color(color)
                .build()
        })
}

fn project_description() -> impl Strategy<Value = ProjectDescription> {
    (
        option::of(text()),
        option::of(text()),
        option::of(instant()),
        option::of(vec(dataset_metadata(), 0..3)),
    )
        .prop_map(|(project_arn, project_name, creation_timestamp, datasets)| {
            ProjectDescription::builder()
                .set_project_arn(project_arn)
                .set_project_name(project_name)
                .set_creation_timestamp(creation_timestamp)
                .set_datasets(datasets)
                .build()
        })
}

fn project_metadata() -> impl Strategy<Value = ProjectMetadata> {
    (option::of(text()), option::of(text()), option::of(instant()))
        .prop_map(|(project_arn, project_name, creation_timestamp)| {
            ProjectMetadata::builder()
                .set_project_arn(project_arn)
                .set_project_name(project_name)
                .set_creation_timestamp(creation_timestamp)
                .build()
        })
}

fn s3_location() -> impl Strategy<Value = S3Location> {
    (option::of(text()), option::of(text()))
        .prop_map(|(bucket, prefix)| {
            S3Location::builder()
                .set_bucket(bucket)
                .set_prefix(prefix)
                .build()
        })
}

fn tag() -> impl Strategy<Value = Tag> {
    (option::of(text()), option::of(text()))
        .prop_map(|(key, value)| {
            Tag::builder()
                .set_key(key)
                .set_value(value)
                .build()
        })
}

fn target_platform() -> impl Strategy<Value = TargetPlatform> {
    (
        option::of(target_platform_os()),
        option::of(target_platform_arch()),
        option::of(target_platform_accelerator()),
    )
        .prop_map(|(os, arch, accelerator)| {
            TargetPlatform::builder()
                .set_os(os)
                .set_arch(arch)
                .set_accelerator(accelerator)
                .build()
        })
}

macro_rules! round_trips {
    ($($test:ident: $strategy:expr => $ty:ty,)*) => {
        proptest! {
            $(
                #[test]
                fn $test(value in $strategy) {
                    let json = serde_json::to_string(&value).unwrap();
                    let parsed: $ty = serde_json::from_str(&json).unwrap();
                    prop_assert_eq!(parsed, value, "{}", json);
                }
            )*
        }
    };
}

round_trips! {
    anomaly_round_trip: anomaly() => Anomaly,
    dataset_description_round_trip: dataset_description() => DatasetDescription,
    dataset_ground_truth_manifest_round_trip:
        dataset_ground_truth_manifest() => DatasetGroundTruthManifest,
    dataset_image_stats_round_trip: dataset_image_stats() => DatasetImageStats,
    dataset_metadata_round_trip: dataset_metadata() => DatasetMetadata,
    dataset_source_round_trip: dataset_source() => DatasetSource,
    detect_anomaly_result_round_trip: detect_anomaly_result() => DetectAnomalyResult,
    greengrass_configuration_round_trip: greengrass_configuration() => GreengrassConfiguration,
    greengrass_output_details_round_trip: greengrass_output_details() => GreengrassOutputDetails,
    image_source_round_trip: image_source() => ImageSource,
    input_s3_object_round_trip: input_s3_object() => InputS3Object,
    model_description_round_trip: model_description() => ModelDescription,
    model_metadata_round_trip: model_metadata() => ModelMetadata,
    model_packaging_configuration_round_trip:
        model_packaging_configuration() => ModelPackagingConfiguration,
    model_packaging_description_round_trip:
        model_packaging_description() => ModelPackagingDescription,
    model_packaging_job_metadata_round_trip:
        model_packaging_job_metadata() => ModelPackagingJobMetadata,
    model_packaging_output_details_round_trip:
        model_packaging_output_details() => ModelPackagingOutputDetails,
    model_performance_round_trip: model_performance() => ModelPerformance,
    output_config_round_trip: output_config() => OutputConfig,
    output_s3_object_round_trip: output_s3_object() => OutputS3Object,
    pixel_anomaly_round_trip: pixel_anomaly() => PixelAnomaly,
    project_description_round_trip: project_description() => ProjectDescription,
    project_metadata_round_trip: project_metadata() => ProjectMetadata,
    s3_location_round_trip: s3_location() => S3Location,
    tag_round_trip: tag() => Tag,
    target_platform_round_trip: target_platform() => TargetPlatform,
    dataset_status_round_trip: dataset_status() => DatasetStatus,
    model_hosting_status_round_trip: model_hosting_status() => ModelHostingStatus,
    model_packaging_job_status_round_trip: model_packaging_job_status() => ModelPackagingJobStatus,
    model_status_round_trip: model_status() => ModelStatus,
    resource_type_round_trip: resource_type() => ResourceType,
    target_device_round_trip: target_device() => TargetDevice,
    target_platform_accelerator_round_trip:
        target_platform_accelerator() => TargetPlatformAccelerator,
    target_platform_arch_round_trip: target_platform_arch() => TargetPlatformArch,
    target_platform_os_round_trip: target_platform_os() => TargetPlatformOs,
}

macro_rules! known_and_unknown_values {
    ($($enum:ident),*) => {
        $(
            for value in $enum::values() {
                let known = $enum::from(*value);
                assert!(!matches!(known, $enum::Unknown(_)), "{} is modeled", value);
                assert_eq!(known.as_str(), *value);
                assert_eq!(serde_json::to_value(known).unwrap(), serde_json::json!(value));
            }
            let unknown = $enum::from("NOT_MODELED_YET");
            assert!(matches!(unknown, $enum::Unknown(_)));
            assert_eq!(unknown.as_str(), "NOT_MODELED_YET");
            let parsed: $enum = serde_json::from_str(r#""NOT_MODELED_YET""#).unwrap();
            assert_eq!(parsed, unknown);
        )*
    };
}

#[test]
fn enum_values() {
    known_and_unknown_values!(
        DatasetStatus,
        ModelHostingStatus,
        ModelPackagingJobStatus,
        ModelStatus,
        ResourceType,
        TargetDevice,
        TargetPlatformAccelerator,
        TargetPlatformArch,
        TargetPlatformOs
    );
}
