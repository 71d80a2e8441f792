/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use lookoutvision::model::{
    DatasetStatus, ModelPerformance, ProjectDescription, TargetDevice, TargetPlatformArch,
};
use std::str::FromStr;

#[test]
fn known_enum_values() {
    assert_eq!(
        DatasetStatus::from("UPDATE_FAILED_ROLLBACK_COMPLETE"),
        DatasetStatus::UpdateFailedRollbackComplete
    );
    assert_eq!(TargetPlatformArch::X8664.as_str(), "X86_64");
    assert_eq!(TargetDevice::from_str("jetson_xavier"), Ok(TargetDevice::JetsonXavier));
    assert_eq!(DatasetStatus::values().len(), 10);
    assert!(DatasetStatus::values().contains(&"DELETE_FAILED"));
}

#[test]
fn unknown_enum_values_survive_serialization() {
    let arch = TargetPlatformArch::from("RISCV64");
    assert!(matches!(arch, TargetPlatformArch::Unknown(_)));
    assert_eq!(arch.as_str(), "RISCV64");
    assert_eq!(serde_json::to_string(&arch).unwrap(), r#""RISCV64""#);
    // the same value maps to the same variant
    assert_eq!(TargetPlatformArch::from("RISCV64"), arch);
    assert_ne!(TargetPlatformArch::from("MIPS"), arch);
}

#[test]
fn set_but_empty_members_are_kept() {
    let description = ProjectDescription::builder()
        .project_name("circuit-boards")
        .datasets(vec![])
        .build();
    let json = serde_json::to_string(&description).unwrap();
    assert_eq!(json, r#"{"ProjectName":"circuit-boards","Datasets":[]}"#);
    let parsed: ProjectDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.datasets, Some(vec![]));
    assert_eq!(parsed.project_arn, None);
}

#[test]
fn acronym_members() {
    let performance: ModelPerformance =
        serde_json::from_str(r#"{"F1Score": 0.75, "Recall": 0.5}"#).unwrap();
    assert_eq!(performance.f1_score, Some(0.75));
    assert_eq!(performance.recall, Some(0.5));
    assert_eq!(performance.precision, None);
}
