/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Every model survives serialization followed by deserialization.

use meteringmarketplace::model::{
    Tag, UsageAllocation, UsageRecord, UsageRecordResult, UsageRecordResultStatus,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use smithy_types::Instant;

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

fn instant() -> impl Strategy<Value = Instant> {
    (-2_000_000_000_000_i64..4_000_000_000_000_i64).prop_map(Instant::from_epoch_millis)
}

fn usage_record_result_status() -> impl Strategy<Value = UsageRecordResultStatus> {
    prop_oneof![
        select(UsageRecordResultStatus::values()).prop_map(UsageRecordResultStatus::from),
        "[a-z]{1,8}".prop_map(|name| UsageRecordResultStatus::from(name.as_str())),
    ]
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

fn usage_allocation() -> impl Strategy<Value = UsageAllocation> {
    (option::of(any::<i32>()), option::of(vec(tag(), 0..3)))
        .prop_map(|(allocated_usage_quantity, tags)| {
            UsageAllocation::builder()
                .set_allocated_usage_quantity(allocated_usage_quantity)
                .set_tags(tags)
                .build()
        })
}

fn usage_record() -> impl Strategy<Value = UsageRecord> {
    (
        option::of(instant()),
        option::of(text()),
        option::of(text()),
        option::of(any::<i32>()),
        option::of(vec(usage_allocation(), 0..3)),
    )
        .prop_map(|(timestamp, customer_identifier, dimension, quantity, usage_allocations)| {
            UsageRecord::builder()
                .set_timestamp(timestamp)
                .set_customer_identifier(customer_identifier)
                .set_dimension(dimension)
                .set_quantity(quantity)
                .set_usage_allocations(usage_allocations)
                .build()
        })
}

fn usage_record_result() -> impl Strategy<Value = UsageRecordResult> {
    (option::of(usage_record()), option::of(text()), option::of(usage_record_result_status()))
        .prop_map(|(usage_record, metering_record_id, status)| {
            UsageRecordResult::builder()
                .set_usage_record(usage_record)
                .set_metering_record_id(metering_record_id)
                .set_status(status)
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
    tag_round_trip: tag() => Tag,
    usage_allocation_round_trip: usage_allocation() => UsageAllocation,
    usage_record_round_trip: usage_record() => UsageRecord,
    usage_record_result_round_trip: usage_record_result() => UsageRecordResult,
    usage_record_result_status_round_trip: usage_record_result_status() => UsageRecordResultStatus,
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
    known_and_unknown_values!(UsageRecordResultStatus);
}
